use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use regex::Regex;
use tracing::info;

use fstriage::ops::export::export_stream;

/// Export matching files from a capture stream read from stdin
///
/// Writes every regular-file record whose full logical path matches PATTERN
/// into a mirrored directory tree under the output root.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Regular expression matched against each record's full logical path
    pattern: String,

    /// Output root for the mirrored directory tree
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> ExitCode {
    fstriage::logging::init();
    let args = Args::parse();

    let pattern = match Regex::new(&args.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("fstriage-export: invalid pattern: {e}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    match export_stream(stdin.lock(), &pattern, &args.output) {
        Ok(files_written) => {
            info!(files_written, "Export complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("fstriage-export: {e}");
            ExitCode::FAILURE
        }
    }
}
