//! Command-line interface for the vangen binary.
//!
//! Reads a JSON configuration file and writes one vanity import page per
//! package path, plus an optional index page, into an output directory.

use std::{path::PathBuf, process};

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use vangen::{Error, GenerateOptions, generate_site, load_config};

/// Command line interface for generating vanity import pages.
#[derive(Debug, Parser)]
#[command(name = "vangen", version, about = "Generate vanity import pages for Go packages")]
struct Cli {
    /// Log each generated file.
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// Path to the JSON configuration file.
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = "vangen.json")]
    file: PathBuf,

    /// Directory that will receive the generated pages.
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = "vangen/")]
    out: PathBuf,

    /// Fail instead of replacing files that already exist.
    #[arg(short = 'n', long = "no-overwrite", action = ArgAction::SetTrue)]
    no_overwrite: bool
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        if std::env::var_os("RUST_LOG").is_some() {
            return EnvFilter::from_default_env();
        }
        EnvFilter::new(if self.verbose { "debug" } else { "warn" })
    }

    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::new(&self.out).with_overwrite(!self.no_overwrite)
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(error) = run(&cli) {
        eprintln!("{}", error.to_display_string());
        process::exit(error.exit_code());
    }
}

/// Loads the configuration and generates the page tree.
///
/// # Errors
///
/// Propagates errors originating from configuration loading, rendering and
/// writing.
fn run(cli: &Cli) -> Result<(), Error> {
    let config = load_config(&cli.file)?;
    generate_site(&config, &cli.generate_options())?;
    Ok(())
}
