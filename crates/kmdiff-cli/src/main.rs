//! kmdiff CLI
//!
//! Compares two Kubernetes manifest files and prints the differences

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use kmdiff_core::logging_facility::{self, Profile};
use kmdiff_core::render::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

mod banner;
mod commands;

#[derive(Debug, Parser)]
#[command(name = "kmdiff", version)]
#[command(about = "Compare two Kubernetes manifest YAML files.", long_about = None)]
#[command(help_template = "Description\n  {about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}")]
#[command(after_help = "Examples:\n  kmdiff old.yaml new.yaml\n  kmdiff old.yaml new.yaml --json")]
struct Cli {
    /// Manifest file to compare from
    old_file: Option<PathBuf>,

    /// Manifest file to compare to
    new_file: Option<PathBuf>,

    /// Output diff result in JSON format
    #[arg(long)]
    json: bool,

    /// Log output format (logs go to stderr, filtered by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Human => Profile::Human,
            LogFormat::Json => Profile::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return usage(),
    };

    let (Some(old_file), Some(new_file)) = (cli.old_file, cli.new_file) else {
        return usage();
    };

    logging_facility::init(cli.log_format.into());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        banner::print_banner();
        OutputFormat::Markdown
    };

    let args = commands::diff::DiffArgs {
        old_file,
        new_file,
        format,
    };

    match commands::diff::execute(args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

/// Print the full help to stdout and fail
fn usage() -> ExitCode {
    println!("{}", Cli::command().render_help());
    ExitCode::from(1)
}
