/// Stack Sanity - A Stack Overflow sanity checker
///
/// The main entry point. It collects file paths from the command line and
/// hands them to the checker.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use stack_sanity::app;
use stack_sanity::utils::output_formatter::{usage_lines, RandomSelector, Reporter};
use stack_sanity::SanityConfig;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "stack_sanity",
    about = "Scans source files for code smells usually found on Stack Overflow",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Path(s) to the file(s) to check
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    file_paths: Vec<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse_from(path_args(std::env::args_os()));

    setup_logging();

    if args.file_paths.is_empty() {
        for line in usage_lines(env!("CARGO_PKG_NAME")) {
            println!("{}", line);
        }
        process::exit(1);
    }

    let config = SanityConfig::builtin().context("Failed to build the built-in rule set")?;
    debug!(
        "Loaded {} rules and {} quotes",
        config.rules.len(),
        config.quotes.len()
    );

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    colored::control::set_override(color);
    let mut reporter = Reporter::new(stdout.lock(), RandomSelector::thread_local(), color);

    reporter.banner().context("Failed to write to stdout")?;
    app::run(&args.file_paths, &config, &mut reporter).context("Failed to write to stdout")?;

    reporter
        .into_inner()
        .flush()
        .context("Failed to flush stdout")?;

    Ok(())
}

/// Put an escape in front of the user's arguments so clap takes every one of
/// them, a literal `--` included, as a path.
fn path_args<I: IntoIterator<Item = OsString>>(raw: I) -> Vec<OsString> {
    let mut raw = raw.into_iter();
    let mut args: Vec<OsString> = raw.next().into_iter().collect();
    args.push(OsString::from("--"));
    args.extend(raw);
    args
}

/// Set up logging on stderr so stdout carries only the report
fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(LevelFilter::Warn);

    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr);

    builder.init();
}
