//! kevs - KEVS configuration parser CLI.
//!
//! A thin `clap`-driven wrapper around the `kevs` and `kevs-lex` crates:
//! parse or just scan a file, optionally dump the result, and control how
//! errors are reported.

mod dump;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kevs::ParseOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse and inspect a KEVS configuration file.
#[derive(Parser, Debug)]
#[command(name = "kevs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse and inspect a KEVS configuration file", long_about = None)]
struct Cli {
    /// The file to parse.
    file: PathBuf,

    /// Print the token stream instead of the parsed tree.
    #[arg(long)]
    scan: bool,

    /// Print the parsed tree to stdout after a successful parse.
    #[arg(long)]
    dump: bool,

    /// Abort the process (via `process::abort`) on the first error instead
    /// of returning it, printing the diagnostic first. Reproduces the
    /// reference implementation's debugging aid.
    #[arg(long)]
    abort: bool,

    /// Exit 0 even when an error occurs; the diagnostic is still printed.
    #[arg(long = "no-err")]
    no_err: bool,

    /// Omit the `file:line:` prefix from diagnostic messages.
    #[arg(long = "no-file")]
    no_file: bool,

    /// Accepted for compatibility with the reference CLI's arena-freeing
    /// timing flag; owned allocation is dropped automatically, so this is
    /// a no-op here.
    #[arg(long)]
    free: bool,

    /// Enable verbose (debug-level) tracing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if cli.no_err {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bytes = kevs::read_file(&cli.file)?;

    let options = ParseOptions {
        file_name: cli.file.display().to_string(),
        include_location: !cli.no_file,
        abort_on_error: cli.abort,
    };

    if cli.scan {
        let mut diagnostics =
            kevs_util::Diagnostics::new(options.file_name, options.include_location, cli.abort);
        let tokens = kevs_lex::scan(&bytes, &mut diagnostics)?;
        dump::dump_tokens(&tokens, &mut std::io::stdout())?;
        return Ok(());
    }

    let table = kevs::parse(&bytes, &options)?;
    if cli.dump {
        dump::dump_table(&table, &mut std::io::stdout())?;
    }
    Ok(())
}
