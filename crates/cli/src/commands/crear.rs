// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::{CaseStore, Priority};

use crate::error::Result;

pub fn run(
    archivo: &Path,
    titulo: String,
    descripcion: String,
    prioridad: Priority,
    asignado_a: Option<String>,
) -> Result<()> {
    let mut store = CaseStore::open(archivo);
    let caso = store.create(titulo, descripcion, prioridad, asignado_a)?;

    println!("\n✓ Caso creado exitosamente:");
    println!("{}", caso.summary());
    Ok(())
}

#[cfg(test)]
#[path = "crear_tests.rs"]
mod tests;
