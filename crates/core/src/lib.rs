// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! caso-core: Shared library for the casos case tracker
//!
//! This crate provides the core data structures and the file-backed store
//! used by the `casos` CLI.

pub mod case;
pub mod error;
pub mod store;

pub use case::{Case, Priority, Status};
pub use error::{Error, Result};
pub use store::{CaseStore, CaseUpdate};
