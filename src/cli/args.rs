//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// dts-cjs - convert ESM declaration files into CommonJS-compatible `.d.cts` files
#[derive(Parser, Debug, Clone)]
#[command(name = "dts-cjs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert ESM .d.ts declaration files into CommonJS-compatible .d.cts files")]
#[command(long_about = "dts-cjs rewrites the .d.ts files emitted by a library build into .d.cts files that \
use a single `export =` assignment. Named exports are wrapped in a synthetic namespace, a default export \
becomes `export = <value>;`, and documents without exports are marked with `export {};`.")]
#[command(after_help = "EXAMPLES:

    # Convert every .d.ts under ./dist
    dts-cjs

    # Convert a different build directory
    dts-cjs --out-dir build/types

    # Only convert the entry point
    dts-cjs --pattern index.d.ts

    # Use one namespace name for every file
    dts-cjs --namespace MyLibrary

    # Name the namespace after package.json (my-lib -> myLib)
    dts-cjs --namespace-from-package

    # Machine-readable report
    dts-cjs --output json --output-file dts-cjs-report.json

    # Create a default configuration file
    dts-cjs --init
")]
pub struct Args {
    /// Directory containing the emitted declaration files
    #[arg(short = 'd', long, value_name = "DIR", help = "Directory containing the .d.ts files (defaults to dist)")]
    pub out_dir: Option<PathBuf>,

    /// Glob pattern selecting documents, relative to the output directory
    #[arg(short, long, value_name = "GLOB", help = "Glob pattern, relative to --out-dir, selecting files to convert (defaults to **/*.d.ts)")]
    pub pattern: Option<String>,

    /// Glob patterns for documents that must not be converted
    #[arg(short, long, value_name = "GLOB", help = "Glob patterns for files to skip (can be specified multiple times; defaults to **/*.d.cts and **/*.d.mts)")]
    pub ignore: Vec<String>,

    /// Fixed namespace name
    #[arg(short, long, value_name = "NAME", conflicts_with = "namespace_from_package", help = "Use this namespace name for every file instead of deriving it from the file name")]
    pub namespace: Option<String>,

    /// Derive the namespace name from package.json
    #[arg(long, help = "Use the camel-cased package.json name as the namespace name")]
    pub namespace_from_package: bool,

    /// package.json location
    #[arg(long, value_name = "FILE", help = "package.json used by --namespace-from-package (defaults to ./package.json)")]
    pub package_json: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Report format: 'text' for humans, 'json' for machine processing (defaults to text)")]
    pub output: Option<OutputFormat>,

    /// Report file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Suppress non-essential output (only failures are printed)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug logging")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .dts-cjs.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Convert files one at a time instead of in parallel")]
    pub no_parallel: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.dts-cjs.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
