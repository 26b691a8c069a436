//! Create command implementation
//!
//! Writes a starter configuration document.

use colored::Colorize;
use serde_json::{json, Value};

use confc_core::document;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Run the create command
///
/// Writes a minimal starter document at the `--config` path. Refuses to
/// overwrite an existing file.
pub fn run_create(cli: &Cli) -> Result<()> {
    if cli.config.exists() {
        return Err(CliError::user(format!(
            "{} already exists, refusing to overwrite",
            cli.config.display()
        )));
    }

    document::save(&cli.config, &starter_document())?;

    println!("{} Created {}", "OK".green().bold(), cli.config.display());
    println!(
        "   Edit it, then run: {}",
        format!("confc --config {}", cli.config.display()).cyan()
    );
    Ok(())
}

/// The starter document: a complete `project` section and an empty
/// `config` section to fill in.
fn starter_document() -> Value {
    json!({
        "project": {
            "name": "my-project",
            "desc": "Project description",
            "output-path": "conf.hpp",
            "project-dir": ".",
            "version": "0.1.0",
            "debug": true,
            "dev": true
        },
        "config": {}
    })
}
