/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for kpath-rs

use clap::Parser;
use env_logger::Env;

use kpath_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    log::info!("kpath-rs v{}", kpath_rs::VERSION);
    cli::run(&cli)
}
