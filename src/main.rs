use std::process;

use dts_cjs::{
    cli::{Args, Command},
    error::ErrorSeverity,
};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose, args.quiet);

    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the flag-derived level
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "dts_cjs=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if let Err(err) = builder.try_init() {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

/// Run the command and map the outcome to an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            if let Some(suggestion) = err.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }

            let exit_code = match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            };

            if exit_code > 0 {
                eprintln!("\nExiting with code {} due to {}", exit_code, err.severity());
            }

            exit_code
        }
    }
}
