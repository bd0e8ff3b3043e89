// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use caso_core::{Priority, Status};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "casos")]
#[command(about = "Sistema de seguimiento de casos")]
#[command(version)]
pub struct Cli {
    /// Archivo de datos para casos
    #[arg(long, global = true, default_value = "casos.json")]
    pub archivo: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lista los casos
    #[command(after_help = "Ejemplos:\n  \
        casos listar                        Todos los casos\n  \
        casos listar --estado abierto       Solo casos abiertos\n  \
        casos listar --prioridad crítica    Solo casos críticos")]
    Listar {
        /// Filtrar por estado (abierto, en_progreso, resuelto, cerrado)
        #[arg(long)]
        estado: Option<Status>,

        /// Filtrar por prioridad (baja, media, alta, crítica)
        #[arg(long)]
        prioridad: Option<Priority>,
    },

    /// Crea un nuevo caso
    Crear {
        /// Título del caso
        titulo: String,

        /// Descripción del caso
        descripcion: String,

        /// Prioridad del caso (baja, media, alta, crítica)
        #[arg(long, default_value = "media")]
        prioridad: Priority,

        /// Persona asignada al caso
        #[arg(long = "asignado-a")]
        asignado_a: Option<String>,
    },

    /// Ver detalles de un caso
    Ver {
        /// ID del caso
        id: u64,
    },

    /// Actualiza un caso
    Actualizar {
        /// ID del caso
        id: u64,

        /// Nuevo título
        #[arg(long)]
        titulo: Option<String>,

        /// Nueva descripción
        #[arg(long)]
        descripcion: Option<String>,

        /// Nuevo estado (abierto, en_progreso, resuelto, cerrado)
        #[arg(long)]
        estado: Option<Status>,

        /// Nueva prioridad (baja, media, alta, crítica)
        #[arg(long)]
        prioridad: Option<Priority>,

        /// Nueva persona asignada
        #[arg(long = "asignado-a")]
        asignado_a: Option<String>,
    },

    /// Agrega una nota a un caso
    Nota {
        /// ID del caso
        id: u64,

        /// Texto de la nota
        texto: String,
    },

    /// Elimina un caso
    Eliminar {
        /// ID del caso
        id: u64,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
