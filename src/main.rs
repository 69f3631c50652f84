// src/main.rs

use anyhow::Result;
use cgmerger::cli::Cli;
use cgmerger::config::{load_settings, save_settings, ConfigBuilder, Operation};
use cgmerger::constants::SETTINGS_FILE_NAME;
use cgmerger::run;
use clap::Parser;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG wins; otherwise stay quiet in release builds.
    let default_directive = if cfg!(debug_assertions) {
        "cgmerger=debug"
    } else {
        "cgmerger=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_directive))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    log::info!("Starting cgmerger v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();
    let settings_path = PathBuf::from(cli.settings.as_deref().unwrap_or(SETTINGS_FILE_NAME));

    let persisted = match load_settings(&settings_path) {
        Ok(persisted) => persisted,
        Err(e) => fail(e),
    };
    if persisted.is_none() {
        log::warn!(
            "No settings file at {}; use --write to create one",
            settings_path.display()
        );
    }

    // --- Configuration ---
    let builder = ConfigBuilder::from_cli(cli).persisted(persisted);
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    log::debug!("Configuration built successfully.");

    // --- Execution ---
    match builder.get_operation() {
        Operation::Debug => {
            print!("{}", builder.layered());
            eprintln!("No further operations will be performed");
        }
        Operation::WriteSettings => {
            let settings = builder.layered();
            if let Err(e) = save_settings(&settings_path, &settings) {
                fail(e);
            }
            print!("{}", settings);
            println!("Settings file created with listed values");
        }
        Operation::Merge => {
            if let Err(e) = run(&config) {
                fail(e);
            }
        }
    }

    Ok(())
}

/// Reports a library error and exits with status 1.
fn fail(e: cgmerger::errors::Error) -> ! {
    eprintln!("cgmerger: {}", e);
    std::process::exit(1);
}
