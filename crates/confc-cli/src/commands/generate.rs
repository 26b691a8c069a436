//! Generate command implementation
//!
//! Compiles a configuration document into a C++ constant header.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use colored::Colorize;
use tracing::warn;

use confc_core::document;
use confc_core::{BuildContext, BuildMode, BuildType, CxxStandard, ProjectSettings};

use crate::cli::Cli;
use crate::error::Result;

/// Run the generate command
///
/// Loads the document, merges CLI flags over the stored project settings,
/// compiles the header and writes it out. With `--rewrite-config` the
/// effective settings are persisted back into the document.
pub fn run_generate(cli: &Cli) -> Result<()> {
    let mut document = document::load(&cli.config)?;
    let mut settings = ProjectSettings::from_document(&document)?;

    // CLI flags win over the values stored in the document.
    if cli.debug {
        settings.debug = true;
    } else if cli.release {
        settings.debug = false;
    }
    if cli.development {
        settings.dev = true;
    } else if cli.production {
        settings.dev = false;
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output_path));
    let project_dir = cli
        .working_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.project_dir));

    let commit_hash = if cli.no_git {
        None
    } else {
        lookup_commit_hash(&project_dir)
    };

    let ctx = BuildContext {
        target: cli.target.clone(),
        system: cli.target_system.clone(),
        arch: cli.target_arch.clone(),
        mode: BuildMode::from_dev_flag(settings.dev),
        build_type: BuildType::from_debug_flag(settings.debug),
        commit_hash,
        std: CxxStandard::from_str(&cli.std)?,
        root_namespace: cli.namespace.clone(),
        output_path: output_path.clone(),
    };

    println!(
        "{} Compiling {} ({} {} build)...",
        "=>".blue().bold(),
        cli.config.display().to_string().cyan(),
        ctx.mode.to_string().yellow(),
        ctx.build_type.to_string().yellow()
    );

    let copyright = format!("Copyright (c) the {} project", settings.name);
    let header = confc_core::compile_header(&document, &settings, &ctx, &copyright)?;
    document::write_output(&output_path, &header)?;

    println!("{} Wrote {}", "OK".green().bold(), output_path.display());

    if cli.rewrite_config {
        document::update_project_fields(
            &mut document,
            &output_path.display().to_string(),
            &project_dir.display().to_string(),
            settings.debug,
            settings.dev,
        )?;
        document::save(&cli.config, &document)?;
        println!("{} Updated {}", "OK".green().bold(), cli.config.display());
    }

    Ok(())
}

/// Look up the short HEAD commit hash, starting discovery from the
/// project directory. Failure is not fatal: the header is simply
/// emitted without a `git_hash` constant.
fn lookup_commit_hash(project_dir: &Path) -> Option<String> {
    match confc_git::head_short_hash(project_dir) {
        Ok(hash) => Some(hash),
        Err(e) => {
            warn!("No git commit hash available: {e}");
            None
        }
    }
}
