//! Reference vector production.
//!
//! Drives the trusted `xxhsum` reference binary across the fixed plan from
//! [`vectors::plan`] and emits one pipe-delimited record per case. The
//! oracle is assumed deterministic and locally available: there is no
//! retry, no timeout, and no partial success. The first failed invocation
//! aborts the whole run, because a missing or invalid reference answer must
//! never silently produce a wrong record file.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::{
  fmt,
  io::{self, Write},
  path::PathBuf,
  process::{Command, Stdio},
};

use vectors::{PlanCase, SeedKind, plan};

/// Errors raised while producing reference vectors.
///
/// Any of these is fatal to the production run.
#[derive(Debug)]
#[non_exhaustive]
pub enum OracleError {
  /// Spawning, feeding, or collecting the reference process failed, or
  /// writing a record line failed.
  Io(io::Error),
  /// The reference binary exited with a non-success status.
  Failed { case: String, status: Option<i32> },
  /// The reference binary produced no digest token on stdout.
  EmptyOutput { case: String },
}

impl fmt::Display for OracleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(err) => write!(f, "I/O error: {err}"),
      Self::Failed { case, status: Some(code) } => {
        write!(f, "reference oracle failed with exit code {code} for case: {case}")
      }
      Self::Failed { case, status: None } => {
        write!(f, "reference oracle terminated by signal for case: {case}")
      }
      Self::EmptyOutput { case } => write!(f, "reference oracle produced no digest for case: {case}"),
    }
  }
}

impl std::error::Error for OracleError {}

impl From<io::Error> for OracleError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

/// Handle to the external reference binary.
#[derive(Clone, Debug)]
pub struct ReferenceOracle {
  binary: PathBuf,
}

impl ReferenceOracle {
  /// Reference a binary at `path` (typically `./xxhsum`).
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { binary: path.into() }
  }

  /// Invoke the reference binary for one plan case.
  ///
  /// The algorithm selector goes in `-H<n>`, the seeding material in
  /// `-s<hex>` (seed) or `-S<hex>` (secret), and the message bytes on
  /// stdin. The digest is the first whitespace-delimited token of stdout.
  pub fn compute(&self, case: &PlanCase, message: &[u8]) -> Result<String, OracleError> {
    let mode_flag = match case.seed_kind {
      SeedKind::Seed => format!("-s{}", case.seed_or_secret),
      SeedKind::Secret => format!("-S{}", case.seed_or_secret),
    };

    let mut child = Command::new(&self.binary)
      .arg(format!("-H{}", case.algorithm.selector()))
      .arg(mode_flag)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
      stdin.write_all(message)?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
      return Err(OracleError::Failed {
        case: case.to_string(),
        status: output.status.code(),
      });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
      .split_whitespace()
      .next()
      .map(str::to_owned)
      .ok_or_else(|| OracleError::EmptyOutput { case: case.to_string() })
  }
}

/// Walk the full plan, compute every reference digest, and write one record
/// line per case to `out` in enumeration order.
///
/// Returns the number of records written. Aborts on the first oracle
/// failure; output already written before an error must not be trusted.
pub fn produce<W: Write>(oracle: &ReferenceOracle, out: &mut W) -> Result<usize, OracleError> {
  let mut written = 0;
  for case in plan() {
    let message = case.method.materialize(case.message_length);
    let digest = oracle.compute(&case, &message)?;
    let record = case.into_record(digest);
    writeln!(out, "{}", record.to_line())?;
    written += 1;
  }
  Ok(written)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_binary_is_an_io_error() {
    let oracle = ReferenceOracle::new("/nonexistent/xxhsum");
    let case = plan().into_iter().next().unwrap();
    let err = oracle.compute(&case, b"").unwrap_err();
    assert!(matches!(err, OracleError::Io(_)));
  }

  #[test]
  fn failing_oracle_reports_the_case() {
    // `false` accepts any arguments, reads nothing, and exits non-zero.
    let oracle = ReferenceOracle::new("false");
    let case = plan().into_iter().next().unwrap();
    let err = oracle.compute(&case, b"").unwrap_err();
    match err {
      OracleError::Failed { case, .. } => assert!(case.starts_with("32 null(0) seed 00000000")),
      other => panic!("expected Failed, got {other:?}"),
    }
  }

  #[test]
  fn first_stdout_token_is_the_digest() {
    // echo stands in for the reference: its output is "-H0 -s00000000",
    // which has the same digest-then-trailer shape as real xxhsum output.
    let oracle = ReferenceOracle::new("echo");
    let case = plan().into_iter().next().unwrap();
    let digest = oracle.compute(&case, b"").unwrap();
    assert_eq!(digest, "-H0");
  }
}
