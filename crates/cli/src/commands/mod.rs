// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod actualizar;
pub mod crear;
pub mod eliminar;
pub mod listar;
pub mod nota;
pub mod ver;
