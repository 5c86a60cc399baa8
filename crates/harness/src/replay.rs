//! Record replay against the implementation under test.

use std::{
  fmt,
  io::{self, BufRead, Write},
};

use traits::{DigestOutput, SECRET_SIZE_MIN, SecretHash, StreamingHash};
use vectors::{Algorithm, Record, RecordError, SeedKind};

use crate::xxh::{Xxh3_64, Xxh3_128, Xxh32, Xxh64};

/// Fatal errors while replaying a record file.
///
/// These are plan errors or I/O failures. Digest disagreements are not
/// errors; they accumulate as [`Mismatch`]es in the report.
#[derive(Debug)]
#[non_exhaustive]
pub enum ReplayError {
  /// Reading the record source failed.
  Io(io::Error),
  /// A record line could not be interpreted.
  Record(RecordError),
  /// Seeding material that cannot drive the algorithm the record names.
  InvalidMaterial { line: usize, detail: String },
}

impl fmt::Display for ReplayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(err) => write!(f, "I/O error: {err}"),
      Self::Record(err) => write!(f, "{err}"),
      Self::InvalidMaterial { line, detail } => write!(f, "line {line}: {detail}"),
    }
  }
}

impl std::error::Error for ReplayError {}

impl From<io::Error> for ReplayError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<RecordError> for ReplayError {
  fn from(err: RecordError) -> Self {
    Self::Record(err)
  }
}

/// One record whose recomputed digest disagrees with the expected one.
#[derive(Clone, Debug)]
pub struct Mismatch {
  /// 1-based line number in the record source.
  pub line: usize,
  /// The full offending record tuple.
  pub record: Record,
  /// Digest the implementation under test actually produced.
  pub actual: String,
}

impl fmt::Display for Mismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "line {}: {} -> got {}", self.line, self.record.to_line(), self.actual)
  }
}

/// Outcome of a full replay run.
#[derive(Debug, Default)]
pub struct ReplayReport {
  /// Records checked.
  pub checked: usize,
  /// Every divergence found, in record order.
  pub mismatches: Vec<Mismatch>,
}

impl ReplayReport {
  /// `true` when every record matched.
  #[must_use]
  pub fn is_pass(&self) -> bool {
    self.mismatches.is_empty()
  }

  /// Write the per-case divergences and a one-line summary.
  pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
    for mismatch in &self.mismatches {
      writeln!(out, "MISMATCH {mismatch}")?;
    }
    writeln!(
      out,
      "{}/{} records match",
      self.checked - self.mismatches.len(),
      self.checked
    )
  }
}

fn parse_seed32(record: &Record, line: usize) -> Result<u32, ReplayError> {
  u32::from_str_radix(&record.seed_or_secret, 16).map_err(|_| ReplayError::InvalidMaterial {
    line,
    detail: format!("invalid 32-bit seed '{}'", record.seed_or_secret),
  })
}

fn parse_seed64(record: &Record, line: usize) -> Result<u64, ReplayError> {
  u64::from_str_radix(&record.seed_or_secret, 16).map_err(|_| ReplayError::InvalidMaterial {
    line,
    detail: format!("invalid 64-bit seed '{}'", record.seed_or_secret),
  })
}

fn parse_secret(record: &Record, line: usize) -> Result<Vec<u8>, ReplayError> {
  let hex = &record.seed_or_secret;
  if hex.len() % 2 != 0 {
    return Err(ReplayError::InvalidMaterial {
      line,
      detail: format!("secret hex has odd length {}", hex.len()),
    });
  }
  let bytes: Option<Vec<u8>> = (0..hex.len())
    .step_by(2)
    .map(|i| hex.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
    .collect();
  let bytes = bytes.ok_or_else(|| ReplayError::InvalidMaterial {
    line,
    detail: String::from("secret is not valid hex"),
  })?;
  if bytes.len() < SECRET_SIZE_MIN {
    return Err(ReplayError::InvalidMaterial {
      line,
      detail: format!("secret is {} bytes, minimum is {SECRET_SIZE_MIN}", bytes.len()),
    });
  }
  Ok(bytes)
}

/// Recompute the digest a record describes, via the implementation under
/// test, in canonical lowercase hex.
pub fn recompute(record: &Record, line: usize) -> Result<String, ReplayError> {
  let message = record.method.materialize(record.message_length);

  match record.seed_kind {
    SeedKind::Seed => match record.algorithm {
      Algorithm::Xxh32 => Ok(Xxh32::hash_with_seed(parse_seed32(record, line)?, &message).to_hex()),
      Algorithm::Xxh64 => Ok(Xxh64::hash_with_seed(parse_seed64(record, line)?, &message).to_hex()),
      Algorithm::Xxh3_64 => Ok(Xxh3_64::hash_with_seed(parse_seed64(record, line)?, &message).to_hex()),
      Algorithm::Xxh3_128 => Ok(Xxh3_128::hash_with_seed(parse_seed64(record, line)?, &message).to_hex()),
    },
    SeedKind::Secret => {
      let secret = parse_secret(record, line)?;
      match record.algorithm {
        Algorithm::Xxh3_64 => Ok(Xxh3_64::hash_with_secret(&secret, &message).to_hex()),
        Algorithm::Xxh3_128 => Ok(Xxh3_128::hash_with_secret(&secret, &message).to_hex()),
        other => Err(ReplayError::InvalidMaterial {
          line,
          detail: format!("algorithm {other} does not accept a secret"),
        }),
      }
    }
  }
}

/// Replay every record from `reader`.
///
/// Plan errors abort immediately; digest mismatches accumulate so one run
/// reports every divergence. Blank lines are skipped (a trailing newline is
/// not a record).
pub fn replay<R: BufRead>(reader: R) -> Result<ReplayReport, ReplayError> {
  let mut report = ReplayReport::default();

  for (idx, line) in reader.lines().enumerate() {
    let line_number = idx + 1;
    let line = line?;
    if line.is_empty() {
      continue;
    }

    let record = Record::parse_line(&line, line_number)?;
    let actual = recompute(&record, line_number)?;
    report.checked += 1;
    if actual != record.expected_digest {
      report.mismatches.push(Mismatch {
        line: line_number,
        record,
        actual,
      });
    }
  }

  Ok(report)
}
