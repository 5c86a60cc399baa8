//! Verify an implementation against the reference vector file.
//!
//! Usage:
//!   cargo run --release -p harness --bin check-vectors -- --vectors test.vectors
//!   cargo run --release -p harness --bin check-vectors     (equivalence suite only)

use std::{
  env,
  fs::File,
  io::{self, BufReader, Write},
  process::ExitCode,
};

use harness::{equivalence, replay};

#[derive(Debug, Default)]
struct Args {
  /// Record file to replay; equivalence checks only when absent.
  vectors: Option<String>,

  /// Show help.
  help: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = env::args().skip(1);

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => args.help = true,
      "--vectors" | "-v" => {
        let Some(value) = iter.next() else {
          return Err("--vectors requires a value".to_string());
        };
        args.vectors = Some(value);
      }
      other => {
        return Err(format!("Unknown argument: {other}"));
      }
    }
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
check-vectors: verify the implementation under test

USAGE:
    check-vectors [OPTIONS]

    Always runs the record-independent equivalence suite (digest encodings,
    chunked updates, reset semantics). With --vectors, additionally replays
    every record in the file and reports every digest divergence; the run
    never stops at the first failure.

OPTIONS:
    -v, --vectors PATH  Reference record file to replay
    -h, --help          Show this help message
"
  );
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("Error: {msg}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  let mut out = io::stdout().lock();
  let mut failed = false;

  let divergences = equivalence::run_suite();
  failed |= !divergences.is_empty();
  if let Err(err) = equivalence::write_report(&divergences, &mut out) {
    eprintln!("Failed to write report: {err}");
    return ExitCode::FAILURE;
  }

  if let Some(path) = &args.vectors {
    let file = match File::open(path) {
      Ok(file) => file,
      Err(err) => {
        eprintln!("Failed to open {path}: {err}");
        return ExitCode::FAILURE;
      }
    };

    let report = match replay::replay(BufReader::new(file)) {
      Ok(report) => report,
      Err(err) => {
        eprintln!("Replay aborted: {err}");
        return ExitCode::FAILURE;
      }
    };
    failed |= !report.is_pass();
    if let Err(err) = report.write_summary(&mut out) {
      eprintln!("Failed to write report: {err}");
      return ExitCode::FAILURE;
    }
  }

  drop(out);
  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
