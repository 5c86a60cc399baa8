//! Record-independent encoding and incremental-update equivalence checks.
//!
//! These invariants need no oracle data: every digest must render
//! identically through its three encodings, chunk boundaries must not
//! affect an incremental computation, and a reset hasher must behave like a
//! fresh one. Each failed assertion becomes one [`Divergence`]; the suite
//! never stops early, so a run reports every diverging case.

use std::{
  fmt,
  io::{self, Write},
};

use traits::{DigestOutput, StreamingHash};
use vectors::Algorithm;

use crate::xxh::{Xxh3_64, Xxh3_128, Xxh32, Xxh64};

/// Fixed short message fed as arbitrary chunks.
const SHORT_MESSAGE: &[u8] = b"abcd";
const SHORT_CHUNKS: [&[u8]; 2] = [b"ab", b"cd"];

/// One failed equivalence assertion.
#[derive(Clone, Debug)]
pub struct Divergence {
  pub algorithm: Algorithm,
  /// Which invariant broke.
  pub check: &'static str,
  pub message_length: usize,
  pub expected: String,
  pub actual: String,
}

impl fmt::Display for Divergence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} over {} bytes: {}: expected {}, got {}",
      self.algorithm, self.message_length, self.check, self.expected, self.actual
    )
  }
}

/// Write one line per divergence plus a summary line.
pub fn write_report<W: Write>(divergences: &[Divergence], out: &mut W) -> io::Result<()> {
  for divergence in divergences {
    writeln!(out, "DIVERGENCE {divergence}")?;
  }
  if divergences.is_empty() {
    writeln!(out, "equivalence checks pass")
  } else {
    writeln!(out, "{} equivalence checks failed", divergences.len())
  }
}

fn hex_encode(bytes: &[u8]) -> String {
  use fmt::Write as _;
  let mut out = String::with_capacity(bytes.len() * 2);
  for b in bytes {
    // Writing to a String cannot fail.
    let _ = write!(out, "{b:02x}");
  }
  out
}

fn push_if_differs(
  out: &mut Vec<Divergence>,
  algorithm: Algorithm,
  check: &'static str,
  message_length: usize,
  expected: &str,
  actual: &str,
) {
  if expected != actual {
    out.push(Divergence {
      algorithm,
      check,
      message_length,
      expected: expected.to_string(),
      actual: actual.to_string(),
    });
  }
}

/// Run every equivalence invariant for one algorithm over one message.
///
/// `chunks` concatenated must equal `message`; the chunk boundaries are the
/// arbitrary part under test.
pub fn check_hash<H: StreamingHash>(
  algorithm: Algorithm,
  seed: H::Seed,
  message: &[u8],
  chunks: &[&[u8]],
  out: &mut Vec<Divergence>,
) {
  debug_assert_eq!(chunks.concat(), message);

  let oneshot = H::hash_with_seed(seed, message);
  let hex = oneshot.to_hex();

  // Raw binary digest, re-encoded as hex, equals the hex digest.
  push_if_differs(
    out,
    algorithm,
    "raw-bytes encoding",
    message.len(),
    &hex,
    &hex_encode(&oneshot.to_raw()),
  );

  // Zero-padded integer rendering equals the hex digest.
  let int_hex = format!("{:0width$x}", oneshot.to_uint(), width = H::Output::HEX_WIDTH);
  push_if_differs(out, algorithm, "integer encoding", message.len(), &hex, &int_hex);

  // Chunk boundaries must not affect the digest.
  let mut hasher = H::with_seed(seed);
  for chunk in chunks {
    hasher.update(chunk);
  }
  push_if_differs(out, algorithm, "chunked update", message.len(), &hex, &hasher.digest().to_hex());

  // Finalize is non-destructive and repeatable.
  push_if_differs(out, algorithm, "repeated finalize", message.len(), &hex, &hasher.digest().to_hex());

  // Reset leaves no residual state behind.
  hasher.reset(seed);
  hasher.update(message);
  push_if_differs(out, algorithm, "reset state", message.len(), &hex, &hasher.digest().to_hex());
}

/// Run the full suite: every algorithm, zero seed, over the empty message
/// and the fixed short message split at an arbitrary boundary.
#[must_use]
pub fn run_suite() -> Vec<Divergence> {
  let mut out = Vec::new();

  let cases: [(&[u8], &[&[u8]]); 2] = [(b"", &[]), (SHORT_MESSAGE, &SHORT_CHUNKS)];
  for (message, chunks) in cases {
    check_hash::<Xxh32>(Algorithm::Xxh32, 0, message, chunks, &mut out);
    check_hash::<Xxh64>(Algorithm::Xxh64, 0, message, chunks, &mut out);
    check_hash::<Xxh3_64>(Algorithm::Xxh3_64, 0, message, chunks, &mut out);
    check_hash::<Xxh3_128>(Algorithm::Xxh3_128, 0, message, chunks, &mut out);
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn the_suite_is_clean_for_the_implementation_under_test() {
    let divergences = run_suite();
    assert!(divergences.is_empty(), "{divergences:?}");
  }

  #[test]
  fn single_byte_chunks_match_oneshot() {
    let message: Vec<u8> = (0u8..=255).collect();
    let singles: Vec<&[u8]> = message.chunks(1).collect();
    let mut out = Vec::new();
    check_hash::<Xxh3_64>(Algorithm::Xxh3_64, 7, &message, &singles, &mut out);
    assert!(out.is_empty(), "{out:?}");
  }
}
