// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use caso_core::{CaseStore, CaseUpdate, Priority, Status};

use crate::error::{Error, Result};

#[allow(clippy::too_many_arguments)]
pub fn run(
    archivo: &Path,
    id: u64,
    titulo: Option<String>,
    descripcion: Option<String>,
    estado: Option<Status>,
    prioridad: Option<Priority>,
    asignado_a: Option<String>,
) -> Result<()> {
    let update = CaseUpdate {
        title: titulo,
        description: descripcion,
        status: estado,
        priority: prioridad,
        assignee: asignado_a,
    };
    if update.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }

    let mut store = CaseStore::open(archivo);
    let caso = store.update(id, update)?.ok_or(Error::CaseNotFound(id))?;

    println!("\n✓ Caso actualizado exitosamente:");
    println!("{}", caso.summary());
    Ok(())
}

#[cfg(test)]
#[path = "actualizar_tests.rs"]
mod tests;
