// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::CaseStore;

use crate::display::{detail, SEPARATOR};
use crate::error::{Error, Result};

pub fn run(archivo: &Path, id: u64) -> Result<()> {
    let store = CaseStore::open(archivo);
    let caso = store.get(id).ok_or(Error::CaseNotFound(id))?;

    println!("\n{}", SEPARATOR);
    println!("{}", detail(caso));
    println!("{}", SEPARATOR);
    Ok(())
}
