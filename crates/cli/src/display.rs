// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use caso_core::Case;

/// Block separator used between cases in listings and around details.
pub const SEPARATOR: &str =
    "============================================================";

/// Format a case for the `listar` output: summary block plus the
/// description when present.
pub fn list_block(case: &Case) -> String {
    let mut block = case.summary();
    if !case.description.is_empty() {
        block.push('\n');
        block.push_str(&format!("Descripción: {}", case.description));
    }
    block
}

/// Format the full detail view for `ver`: summary, description, and the
/// note history when present.
pub fn detail(case: &Case) -> String {
    let mut out = case.summary();
    out.push_str(&format!("\n\nDescripción: {}", case.description));
    if !case.notes.is_empty() {
        out.push_str(&format!("\n\nNotas:\n{}", case.notes));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
