// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `casos crear` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn casos() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("casos").unwrap()
}

#[test]
fn crear_writes_default_data_file() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["crear", "Sin conexión", "El portátil no encuentra la VPN"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Caso creado exitosamente"))
        .stdout(predicate::str::contains("Caso #1: Sin conexión"));

    let raw = std::fs::read_to_string(temp.path().join("casos.json")).unwrap();
    assert!(raw.contains("\"titulo\": \"Sin conexión\""));
    assert!(raw.contains("\"estado\": \"abierto\""));
    assert!(raw.contains("\"prioridad\": \"media\""));
    assert!(raw.contains("\"asignado_a\": null"));
}

#[test]
fn crear_with_prioridad_and_asignado() {
    let temp = TempDir::new().unwrap();
    casos()
        .args([
            "crear",
            "Caída total",
            "Nadie puede entrar",
            "--prioridad",
            "crítica",
            "--asignado-a",
            "maría",
        ])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Prioridad: crítica"))
        .stdout(predicate::str::contains("Asignado a: maría"));
}

#[test]
fn crear_respects_archivo_flag() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["crear", "T", "D", "--archivo", "incidencias.json"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("incidencias.json").exists());
    assert!(!temp.path().join("casos.json").exists());
}

#[test]
fn crear_rejects_invalid_prioridad() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["crear", "T", "D", "--prioridad", "altisima"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("crítica"));

    assert!(!temp.path().join("casos.json").exists());
}

#[test]
fn sin_subcomando_imprime_ayuda() {
    let temp = TempDir::new().unwrap();
    casos()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
