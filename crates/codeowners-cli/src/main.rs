//! CODEOWNERS Resolver CLI
//!
//! A command-line tool that prints the owners of repository paths according
//! to the repository's CODEOWNERS file.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, Resolutions};

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    let exit_code = run(&args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
///
/// Library records emitted through `log` are forwarded to the subscriber.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Resolve the requested paths and print the results.
fn run(args: &Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let use_colors = !args.json && io::stdout().is_terminal();

    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.repo_path.display());

    let table = match config.build_table() {
        Ok(table) => table,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };
    info!(
        "Loaded {} rules, repository root {}",
        table.len(),
        table.repo_root()
    );

    let paths = config.expand_paths(config.query_root(&table));
    debug!("Resolving {} path(s)", paths.len());

    let mut results = Resolutions::collect(&table, paths.iter().map(String::as_str));
    let unowned = results.unowned_count();
    if config.only_unowned {
        results.retain_unowned();
    }

    let written = if config.json_output {
        results.write_json(&mut stdout)
    } else {
        results.write_human(&mut stdout, use_colors, config.show_section)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    info!("{} of {} path(s) unowned", unowned, paths.len());
    config.exit_code_for_results(unowned)
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let _ = HumanOutput::new(writer, use_colors, false).write_error(message);
}
