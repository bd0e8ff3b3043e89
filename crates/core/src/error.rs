// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for caso-core operations.

use thiserror::Error;

/// All possible errors that can occur in caso-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: abierto, en_progreso, resuelto, cerrado"
    )]
    InvalidStatus(String),

    #[error(
        "invalid priority: '{0}'\n  hint: valid priorities are: baja, media, alta, crítica"
    )]
    InvalidPriority(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for caso-core operations.
pub type Result<T> = std::result::Result<T, Error>;
