// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core case types for the casos tracker.
//!
//! This module contains the fundamental data types: Case, Status, and
//! Priority. Enum variants map bidirectionally to the lowercase Spanish
//! tokens used in the data file and on the CLI.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Returns the current local wall-clock time.
///
/// The data file stores local ISO-8601 timestamps without an offset, so
/// all timestamps in the system are naive local times.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Lifecycle stage of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Newly reported, nobody has acted on it yet. Initial state.
    #[default]
    #[serde(rename = "abierto")]
    Open,
    /// Currently being worked on.
    #[serde(rename = "en_progreso")]
    InProgress,
    /// A fix or answer exists; awaiting confirmation.
    #[serde(rename = "resuelto")]
    Resolved,
    /// No further work will happen.
    #[serde(rename = "cerrado")]
    Closed,
}

impl Status {
    /// Returns the token used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "abierto",
            Status::InProgress => "en_progreso",
            Status::Resolved => "resuelto",
            Status::Closed => "cerrado",
        }
    }

    /// All valid tokens, for help and error messages.
    pub const TOKENS: [&'static str; 4] = ["abierto", "en_progreso", "resuelto", "cerrado"];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abierto" => Ok(Status::Open),
            "en_progreso" => Ok(Status::InProgress),
            "resuelto" => Ok(Status::Resolved),
            "cerrado" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency classification of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "baja")]
    Low,
    /// Default for new cases.
    #[default]
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "crítica")]
    Critical,
}

impl Priority {
    /// Returns the token used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "baja",
            Priority::Medium => "media",
            Priority::High => "alta",
            Priority::Critical => "crítica",
        }
    }

    /// All valid tokens, for help and error messages.
    pub const TOKENS: [&'static str; 4] = ["baja", "media", "alta", "crítica"];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "baja" => Ok(Priority::Low),
            "media" => Ok(Priority::Medium),
            "alta" => Ok(Priority::High),
            // The wire token is accented; accept the bare spelling on input.
            "crítica" | "critica" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked case.
///
/// Serde field renames match the data file format exactly; see the store
/// module for the file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier, assigned by the store. Never changes.
    pub id: u64,
    /// Short description of the case.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Longer description providing context. May be empty.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Current lifecycle stage.
    #[serde(rename = "estado")]
    pub status: Status,
    /// Urgency classification.
    #[serde(rename = "prioridad")]
    pub priority: Priority,
    /// When the case was created. Set once.
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    /// When the case was last modified.
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: NaiveDateTime,
    /// Person this case is assigned to. Serialized as null when unset;
    /// the data file always carries the field.
    #[serde(rename = "asignado_a")]
    pub assignee: Option<String>,
    /// Freeform note history: newline-separated `[timestamp] text` lines
    /// in append order.
    #[serde(rename = "notas")]
    pub notes: String,
}

impl Case {
    /// Creates a new case with both timestamps set to `created_at`.
    pub fn new(
        id: u64,
        title: String,
        description: String,
        priority: Priority,
        assignee: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Case {
            id,
            title,
            description,
            status: Status::Open,
            priority,
            created_at,
            updated_at: created_at,
            assignee,
            notes: String::new(),
        }
    }

    /// Sets the status and refreshes the update timestamp.
    ///
    /// All transitions are allowed; token validation happens at the CLI
    /// boundary, never here.
    pub fn update_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = now();
    }

    /// Sets the priority and refreshes the update timestamp.
    pub fn update_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.updated_at = now();
    }

    /// Assigns the case to a person and refreshes the update timestamp.
    pub fn assign(&mut self, person: impl Into<String>) {
        self.assignee = Some(person.into());
        self.updated_at = now();
    }

    /// Appends a timestamped note line and refreshes the update timestamp.
    ///
    /// Existing notes are preserved verbatim; the new line is joined below
    /// them with a single newline.
    pub fn append_note(&mut self, text: &str) {
        let stamp = now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{stamp}] {text}");
        if self.notes.is_empty() {
            self.notes = line;
        } else {
            self.notes.push('\n');
            self.notes.push_str(&line);
        }
        self.updated_at = now();
    }

    /// Multi-line human-readable summary. Display only, never persisted.
    pub fn summary(&self) -> String {
        format!(
            "Caso #{}: {}\n\
             Estado: {}, Prioridad: {}\n\
             Asignado a: {}\n\
             Creado: {}\n\
             Actualizado: {}",
            self.id,
            self.title,
            self.status,
            self.priority,
            self.assignee.as_deref().unwrap_or("sin asignar"),
            self.created_at.format("%Y-%m-%d %H:%M"),
            self.updated_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
