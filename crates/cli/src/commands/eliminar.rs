// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::CaseStore;

use crate::error::{Error, Result};

pub fn run(archivo: &Path, id: u64) -> Result<()> {
    let mut store = CaseStore::open(archivo);
    if !store.delete(id)? {
        return Err(Error::CaseNotFound(id));
    }

    println!("\n✓ Caso #{} eliminado exitosamente.", id);
    Ok(())
}
