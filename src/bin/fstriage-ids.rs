use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use fstriage::ops::index::index_stream;

/// Index a metadata-only capture stream read from stdin
///
/// Writes one `id<TAB>path` line per input line to stdout. Missing mandatory
/// keys are diagnosed on stderr without dropping the line.
#[derive(Parser)]
#[command(version, about)]
struct Args {}

fn main() -> ExitCode {
    fstriage::logging::init();
    let _args = Args::parse();

    let stdin = io::stdin();
    let stderr = io::stderr();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = stderr.lock();

    if let Err(e) = index_stream(stdin.lock(), &mut out, &mut err) {
        let _ = out.flush();
        eprintln!("fstriage-ids: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = out.flush() {
        eprintln!("fstriage-ids: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
