// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end flow specs: a case's whole life through the CLI.

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
fn vida_completa_de_un_caso() {
    let temp = TempDir::new().unwrap();

    casos()
        .args(["crear", "Fallo de impresión", "La cola se queda atascada"])
        .current_dir(temp.path())
        .assert()
        .success();

    casos()
        .args(["nota", "1", "reiniciado el servicio de cola"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Nota agregada al caso #1"));

    casos()
        .args(["ver", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fallo de impresión"))
        .stdout(predicate::str::contains("Notas:"))
        .stdout(predicate::str::contains("reiniciado el servicio de cola"));

    casos()
        .args(["actualizar", "1", "--estado", "cerrado"])
        .current_dir(temp.path())
        .assert()
        .success();

    casos()
        .args(["eliminar", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Caso #1 eliminado"));

    casos()
        .args(["ver", "1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no se encontró el caso #1"));
}

#[test]
fn eliminar_id_inexistente_falla() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["eliminar", "7"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no se encontró el caso #7"));
}

#[test]
fn nota_id_inexistente_falla() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["nota", "7", "texto"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no se encontró el caso #7"));
}

#[test]
fn notas_se_acumulan_en_orden() {
    let temp = TempDir::new().unwrap();
    casos()
        .args(["crear", "T", "D"])
        .current_dir(temp.path())
        .assert()
        .success();

    for texto in ["primer intento", "segundo intento"] {
        casos()
            .args(["nota", "1", texto])
            .current_dir(temp.path())
            .assert()
            .success();
    }

    let output = casos()
        .args(["ver", "1"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let primero = stdout.find("primer intento").unwrap();
    let segundo = stdout.find("segundo intento").unwrap();
    assert!(primero < segundo);
}

#[test]
fn los_ids_sobreviven_al_reinicio() {
    let temp = TempDir::new().unwrap();
    for titulo in ["uno", "dos"] {
        casos()
            .args(["crear", titulo, ""])
            .current_dir(temp.path())
            .assert()
            .success();
    }
    casos()
        .args(["eliminar", "2"])
        .current_dir(temp.path())
        .assert()
        .success();

    // A fresh process re-reads the file; the next id moves past the
    // largest persisted id, not past the deleted one.
    casos()
        .args(["crear", "tres", ""])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Caso #2: tres"));
}

#[test]
fn datos_no_ascii_sobreviven_el_viaje() {
    let temp = TempDir::new().unwrap();
    casos()
        .args([
            "crear",
            "Acentuación rota",
            "El módulo de facturación pierde las eñes",
            "--asignado-a",
            "josé",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    let raw = std::fs::read_to_string(temp.path().join("casos.json")).unwrap();
    assert!(raw.contains("Acentuación rota"));
    assert!(raw.contains("josé"));
    assert!(!raw.contains("\\u"));

    casos()
        .args(["ver", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("las eñes"));
}
