// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use casosrs::Cli;
use clap::Parser;

fn main() {
    casosrs::setup_logging();
    let cli = Cli::parse();
    if let Err(e) = casosrs::run(&cli.archivo, cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
