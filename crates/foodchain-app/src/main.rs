//! Food Chain Simulator binary.
//!
//! An interactive classroom tool: students enter a four-level food chain
//! (or load an example), build it, and see how changing one population
//! ripples through the linked levels under the selected model.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `foodchain-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing) on stderr
//! 3. Create the shell and its session state
//! 4. Read commands from stdin until `quit` or end of input

mod command;
mod error;
mod render;
mod shell;

use std::io;
use std::path::Path;

use foodchain_core::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;
use crate::shell::Shell;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "foodchain-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal
/// cannot be read or written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so this step is silent.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        default_model = %config.session.default_model,
        default_change_level = %config.session.default_change_level,
        max_dots = config.display.max_dots,
        example_selection = ?config.examples.selection,
        "Configuration loaded"
    );

    // 3. Create the shell.
    let mut shell = Shell::new(&config);

    // 4. Run the command loop.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;

    info!(
        chain_built = shell.state().chain().is_some(),
        model = %shell.state().model(),
        "foodchain shutdown complete"
    );
    Ok(())
}

/// Load the configuration from [`CONFIG_FILE`].
///
/// Looks for the file relative to the current working directory.
fn load_config() -> Result<AppConfig, AppError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        Ok(AppConfig::from_file(config_path)?)
    } else {
        Ok(AppConfig::default())
    }
}
