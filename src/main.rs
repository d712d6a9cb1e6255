//! webgl-preflight CLI entry point
//!
//! Pre-publish validation for Unity WebGL build exports.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use webgl_preflight::checks::{find_check, get_all_checks};
use webgl_preflight::cli::args::{Args, CheckArgs, Command};
use webgl_preflight::cli::exit_code;
use webgl_preflight::cli::output::get_formatter;
use webgl_preflight::platform::LocalFileSystem;
use webgl_preflight::version::get_build_info;
use webgl_preflight::{validate_with, PreflightConfig};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through clap errors too
            return if e.use_stderr() {
                ExitCode::from(3)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.verbose);

    let output = match &args.command {
        Command::Version => get_build_info().to_string(),
        Command::List => check_list(),
        Command::Check(check) => return run_check(&args, check),
    };

    match print(&output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(3),
    }
}

/// Logs go to stderr so stdout stays parseable; RUST_LOG overrides -v.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn check_list() -> String {
    let mut output = String::from("Available checks:\n");
    for check in get_all_checks() {
        output.push_str(&format!(
            "\n  {:<8} {:<20} [{}]\n           {}",
            check.id, check.name, check.category, check.description
        ));
    }
    output
}

fn run_check(args: &Args, check: &CheckArgs) -> ExitCode {
    let config = PreflightConfig::from_args(check);
    for id in &config.skip_checks {
        if find_check(id).is_none() {
            tracing::warn!(check = %id, "unknown check id in --skip");
        }
    }
    tracing::debug!(path = %check.path.display(), ?config, "starting validation");

    let report = validate_with(LocalFileSystem, &check.path, &config);

    let formatter = get_formatter(check.format, args.no_color, args.verbose > 0, check.quiet);
    if print(&formatter.format(&report)).is_err() {
        return ExitCode::from(3);
    }

    ExitCode::from(exit_code(&report))
}

fn print(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)
        .and_then(|_| stdout.flush())
        .inspect_err(|e| tracing::error!(error = %e, "failed to write output"))
}
