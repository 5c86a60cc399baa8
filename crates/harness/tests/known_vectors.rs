//! Replay against frozen, published reference values.
//!
//! The fixture digests are checked in as static data rather than re-derived
//! at runtime, so these tests catch regressions in derivation logic instead
//! of tautologically agreeing with it.

use std::io::Cursor;

use harness::{ReplayError, Xxh32, replay};
use traits::{DigestOutput, StreamingHash};
use vectors::RecordError;

const KNOWN_VECTORS: &str = include_str!("data/known.vectors");

#[test]
fn published_empty_message_digests_replay_clean() {
  let report = replay(Cursor::new(KNOWN_VECTORS)).unwrap();
  assert_eq!(report.checked, 4);
  assert!(report.is_pass(), "{:?}", report.mismatches);
}

#[test]
fn xxh32_zero_seed_empty_message() {
  assert_eq!(Xxh32::hash_with_seed(0, b"").to_hex(), "02cc5d05");
}

#[test]
fn xxh32_zero_seed_hello() {
  assert_eq!(Xxh32::hash_with_seed(0, b"hello").to_hex(), "fb0077f9");
}

#[test]
fn corrupted_digest_surfaces_as_a_mismatch_with_the_full_tuple() {
  let corrupted = KNOWN_VECTORS.replacen("02cc5d05", "02cc5d00", 1);
  let report = replay(Cursor::new(corrupted)).unwrap();

  assert_eq!(report.checked, 4);
  assert_eq!(report.mismatches.len(), 1);

  let mismatch = &report.mismatches[0];
  assert_eq!(mismatch.line, 1);
  assert_eq!(mismatch.record.to_line(), "32|null|0|seed|00000000|02cc5d00");
  assert_eq!(mismatch.actual, "02cc5d05");
}

#[test]
fn malformed_method_aborts_the_replay() {
  let bad = KNOWN_VECTORS.replacen("null", "randomized", 1);
  let err = replay(Cursor::new(bad)).unwrap_err();
  assert!(matches!(
    err,
    ReplayError::Record(RecordError::UnknownMethod { line: 1, .. })
  ));
}

#[test]
fn trailing_blank_line_is_not_a_record() {
  let report = replay(Cursor::new(format!("{KNOWN_VECTORS}\n"))).unwrap();
  assert_eq!(report.checked, 4);
  assert!(report.is_pass());
}

#[test]
fn hashing_works_across_threads() {
  let here = Xxh32::hash_with_seed(0, b"hello");
  let there = std::thread::spawn(|| Xxh32::hash_with_seed(0, b"hello"))
    .join()
    .unwrap();
  assert_eq!(here, there);
  assert_eq!(there.to_hex(), "fb0077f9");
}
