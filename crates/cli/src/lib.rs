// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! casosrs - Library behind the `casos` case tracking CLI.
//!
//! The CLI is a thin adapter over [`caso_core::CaseStore`]: it parses and
//! validates user input (enum tokens are checked once, at this boundary),
//! invokes one store operation, and formats the result for humans.
//! All data lives in a single JSON file chosen with `--archivo`.

use std::path::Path;

mod cli;
mod commands;
mod display;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{Error, Result};

use clap::CommandFactory;

/// Installs the stderr logging subscriber. Warnings from the core (for
/// example a corrupt data file being discarded) surface here.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
///
/// `None` means no subcommand was given: print help and succeed, matching
/// the reference behavior.
pub fn run(archivo: &Path, command: Option<Command>) -> Result<()> {
    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    match command {
        Command::Listar { estado, prioridad } => commands::listar::run(archivo, estado, prioridad),
        Command::Crear {
            titulo,
            descripcion,
            prioridad,
            asignado_a,
        } => commands::crear::run(archivo, titulo, descripcion, prioridad, asignado_a),
        Command::Ver { id } => commands::ver::run(archivo, id),
        Command::Actualizar {
            id,
            titulo,
            descripcion,
            estado,
            prioridad,
            asignado_a,
        } => commands::actualizar::run(archivo, id, titulo, descripcion, estado, prioridad, asignado_a),
        Command::Nota { id, texto } => commands::nota::run(archivo, id, &texto),
        Command::Eliminar { id } => commands::eliminar::run(archivo, id),
    }
}
