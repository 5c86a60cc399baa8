//! Produce the reference vector file.
//!
//! Usage:
//!   cargo run --release -p oracle --bin produce-vectors -- --xxhsum ./xxhsum > test.vectors
//!   cargo run --release -p oracle --bin produce-vectors -- --xxhsum ./xxhsum --output test.vectors

use std::{
  env,
  fs::File,
  io::{self, BufWriter, Write},
  process::ExitCode,
};

use oracle::{ReferenceOracle, produce};

#[derive(Debug)]
struct Args {
  /// Path to the reference binary.
  xxhsum: String,

  /// Record file destination; stdout when absent.
  output: Option<String>,

  /// Show help.
  help: bool,
}

impl Default for Args {
  fn default() -> Self {
    Self {
      xxhsum: String::from("./xxhsum"),
      output: None,
      help: false,
    }
  }
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = env::args().skip(1);

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => args.help = true,
      "--xxhsum" => {
        let Some(value) = iter.next() else {
          return Err("--xxhsum requires a value".to_string());
        };
        args.xxhsum = value;
      }
      "--output" | "-o" => {
        let Some(value) = iter.next() else {
          return Err("--output requires a value".to_string());
        };
        args.output = Some(value);
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
produce-vectors: emit the reference test-vector matrix

USAGE:
    produce-vectors [OPTIONS]

    Walks the fixed (algorithm x seed-or-secret x message) plan, invokes the
    reference xxhsum binary once per case, and writes one pipe-delimited
    record per line. Aborts on the first reference failure; a partial file
    must not be used.

OPTIONS:
    --xxhsum PATH     Reference binary (default: ./xxhsum)
    -o, --output PATH Write records to PATH instead of stdout
    -h, --help        Show this help message
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

  let mut out: Box<dyn Write> = match &args.output {
    Some(path) => match File::create(path) {
      Ok(file) => Box::new(BufWriter::new(file)),
      Err(err) => {
        eprintln!("Failed to create {path}: {err}");
        return ExitCode::FAILURE;
      }
    },
    None => Box::new(io::stdout().lock()),
  };

  let oracle = ReferenceOracle::new(&args.xxhsum);
  match produce(&oracle, &mut out) {
    Ok(written) => {
      if let Err(err) = out.flush() {
        eprintln!("Failed to flush output: {err}");
        return ExitCode::FAILURE;
      }
      eprintln!("wrote {written} records");
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("Production aborted: {err}");
      if args.output.is_some() {
        eprintln!("The partial output file must not be used.");
      }
      ExitCode::FAILURE
    }
  }
}
