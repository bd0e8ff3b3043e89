// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::CaseStore;

use crate::error::{Error, Result};

pub fn run(archivo: &Path, id: u64, texto: &str) -> Result<()> {
    let mut store = CaseStore::open(archivo);
    store
        .append_note(id, texto)?
        .ok_or(Error::CaseNotFound(id))?;

    println!("\n✓ Nota agregada al caso #{}", id);
    Ok(())
}

#[cfg(test)]
#[path = "nota_tests.rs"]
mod tests;
