//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Compile a JSON/JSON5 configuration document into a C++ constant header
#[derive(Parser, Debug)]
#[command(name = "confc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration document (JSON or JSON5)
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// Output header path (overrides the document's output-path)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Project directory (overrides the document's project-dir)
    #[arg(long, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,

    /// Force a debug build type
    #[arg(long = "dbg", conflicts_with = "release")]
    pub debug: bool,

    /// Force a release build type
    #[arg(long = "rel")]
    pub release: bool,

    /// Force development mode
    #[arg(long = "dev", conflicts_with = "production")]
    pub development: bool,

    /// Force production mode
    #[arg(long = "prod")]
    pub production: bool,

    /// Root namespace of the generated header
    #[arg(long, value_name = "NAME", default_value = "config")]
    pub namespace: String,

    /// Name of the build target being compiled
    #[arg(long, value_name = "NAME", default_value = "none")]
    pub target: String,

    /// Target operating system
    #[arg(long, value_name = "NAME", default_value = "none")]
    pub target_system: String,

    /// Target architecture
    #[arg(long, value_name = "NAME", default_value = "x64")]
    pub target_arch: String,

    /// C++ standard for emission (c++11 through c++23)
    #[arg(long, value_name = "STD", default_value = "c++23")]
    pub std: String,

    /// Write the effective settings back to the configuration document
    #[arg(long)]
    pub rewrite_config: bool,

    /// Skip the git commit-hash lookup
    #[arg(long)]
    pub no_git: bool,

    /// Create a starter configuration document and exit
    #[arg(long)]
    pub create: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
