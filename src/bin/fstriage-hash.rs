use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use fstriage::common::hash::HashAlgorithm;
use fstriage::ops::hash::hash_stream;

/// Digest every record of a capture stream read from stdin
///
/// Writes one `path<TAB>name<TAB>length<TAB>hexdigest` line per record and
/// a trailing `read N files` summary line to stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Digest algorithm (md5, sha1, sha256, blake3, xxh64, crc32)
    #[arg(short, long, default_value = "md5")]
    algorithm: String,
}

fn main() -> ExitCode {
    fstriage::logging::init();
    let args = Args::parse();

    let algorithm = match HashAlgorithm::from_str(&args.algorithm) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("fstriage-hash: {e}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(e) = hash_stream(stdin.lock(), &mut out, algorithm) {
        let _ = out.flush();
        eprintln!("fstriage-hash: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = out.flush() {
        eprintln!("fstriage-hash: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
