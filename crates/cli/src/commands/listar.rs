// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::{CaseStore, Priority, Status};

use crate::display::{list_block, SEPARATOR};
use crate::error::Result;

pub fn run(archivo: &Path, estado: Option<Status>, prioridad: Option<Priority>) -> Result<()> {
    let store = CaseStore::open(archivo);
    let casos = store.list(estado, prioridad);

    if casos.is_empty() {
        println!("No se encontraron casos.");
        return Ok(());
    }

    println!("\nTotal de casos: {}\n", casos.len());
    for caso in casos {
        println!("{}", SEPARATOR);
        println!("{}", list_block(caso));
        println!();
    }
    Ok(())
}
