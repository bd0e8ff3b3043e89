// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the casos CLI.
///
/// Every variant exits the process with code 1; success paths exit 0.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no se encontró el caso #{0}")]
    CaseNotFound(u64),

    #[error(
        "no fields to update\n  hint: pass at least one of --titulo, --descripcion, --estado, --prioridad, --asignado-a"
    )]
    NoFieldsToUpdate,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] caso_core::Error),
}

/// A specialized Result type for casosrs operations.
pub type Result<T> = std::result::Result<T, Error>;
