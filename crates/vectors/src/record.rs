//! Vector record model and the pipe-delimited line codec.
//!
//! One record describes one test case and its expected digest:
//!
//! ```text
//! algorithm|message_generation_method|message_length|seed_kind|seed_or_secret_hex|expected_digest_hex
//! ```
//!
//! No escaping exists; field values never contain `|`. Digest hex is
//! canonical lowercase, zero-padded to the algorithm's width.

use alloc::{
  format,
  string::{String, ToString},
  vec::Vec,
};
use core::fmt;

use crate::message::MessageMethod;

/// Hash algorithm named by a vector record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// XXH32.
  Xxh32,
  /// XXH64.
  Xxh64,
  /// XXH3, 64-bit output.
  Xxh3_64,
  /// XXH3, 128-bit output.
  Xxh3_128,
}

impl Algorithm {
  /// All algorithms, in plan enumeration order.
  pub const ALL: [Self; 4] = [Self::Xxh32, Self::Xxh64, Self::Xxh3_64, Self::Xxh3_128];

  /// Parse the algorithm field of a record.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "32" => Some(Self::Xxh32),
      "64" => Some(Self::Xxh64),
      "xxh3-64" => Some(Self::Xxh3_64),
      "xxh3-128" => Some(Self::Xxh3_128),
      _ => None,
    }
  }

  /// Canonical record-field spelling.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Xxh32 => "32",
      Self::Xxh64 => "64",
      Self::Xxh3_64 => "xxh3-64",
      Self::Xxh3_128 => "xxh3-128",
    }
  }

  /// `-H<n>` selector understood by the reference binary.
  #[must_use]
  pub const fn selector(self) -> u8 {
    match self {
      Self::Xxh32 => 0,
      Self::Xxh64 => 1,
      Self::Xxh3_128 => 2,
      Self::Xxh3_64 => 3,
    }
  }

  /// Canonical digest width in hex characters.
  #[must_use]
  pub const fn digest_hex_width(self) -> usize {
    match self {
      Self::Xxh32 => 8,
      Self::Xxh64 | Self::Xxh3_64 => 16,
      Self::Xxh3_128 => 32,
    }
  }

  /// The all-zero seed in this algorithm's canonical width.
  #[must_use]
  pub const fn zero_seed(self) -> &'static str {
    match self {
      Self::Xxh32 => "00000000",
      Self::Xxh64 | Self::Xxh3_64 | Self::Xxh3_128 => "0000000000000000",
    }
  }

  /// Whether the algorithm accepts secret-mode seeding material.
  #[must_use]
  pub const fn supports_secret(self) -> bool {
    matches!(self, Self::Xxh3_64 | Self::Xxh3_128)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// How a record's seeding material is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedKind {
  /// Fixed-width numeric seed.
  Seed,
  /// Variable-length secret buffer (XXH3 variants only).
  Secret,
}

impl SeedKind {
  /// Parse the seed-kind field of a record.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "seed" => Some(Self::Seed),
      "secret" => Some(Self::Secret),
      _ => None,
    }
  }

  /// Canonical record-field spelling.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Seed => "seed",
      Self::Secret => "secret",
    }
  }
}

/// One persisted test case: inputs plus the expected digest.
///
/// For a fixed `(algorithm, method, message_length, seed_kind,
/// seed_or_secret)` tuple the expected digest is a pure function;
/// recomputing it must always yield the same value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
  pub algorithm: Algorithm,
  pub method: MessageMethod,
  pub message_length: usize,
  pub seed_kind: SeedKind,
  pub seed_or_secret: String,
  pub expected_digest: String,
}

impl Record {
  const FIELD_COUNT: usize = 6;

  /// Render as one pipe-delimited line, no trailing newline.
  #[must_use]
  pub fn to_line(&self) -> String {
    format!(
      "{}|{}|{}|{}|{}|{}",
      self.algorithm.as_str(),
      self.method.as_str(),
      self.message_length,
      self.seed_kind.as_str(),
      self.seed_or_secret,
      self.expected_digest
    )
  }

  /// Parse one record line.
  ///
  /// `line_number` is 1-based and carried into every diagnostic. Any
  /// malformed field is a plan error; in particular an unknown message
  /// generation method is rejected, never treated as the empty message.
  pub fn parse_line(line: &str, line_number: usize) -> Result<Self, RecordError> {
    let fields: Vec<&str> = line.split('|').collect();
    let &[algorithm, method, length, seed_kind, seed_or_secret, digest] = fields.as_slice() else {
      return Err(RecordError::FieldCount {
        line: line_number,
        found: fields.len(),
      });
    };

    let algorithm = Algorithm::parse(algorithm).ok_or_else(|| RecordError::UnknownAlgorithm {
      line: line_number,
      value: algorithm.to_string(),
    })?;
    let method = MessageMethod::parse(method).ok_or_else(|| RecordError::UnknownMethod {
      line: line_number,
      value: method.to_string(),
    })?;
    let message_length = length.parse().map_err(|_| RecordError::InvalidLength {
      line: line_number,
      value: length.to_string(),
    })?;
    let seed_kind = SeedKind::parse(seed_kind).ok_or_else(|| RecordError::UnknownSeedKind {
      line: line_number,
      value: seed_kind.to_string(),
    })?;

    Ok(Self {
      algorithm,
      method,
      message_length,
      seed_kind,
      seed_or_secret: seed_or_secret.to_string(),
      expected_digest: digest.to_string(),
    })
  }
}

/// Errors raised while interpreting a vector record line.
///
/// Every variant is a plan error: the record data itself is wrong and the
/// run must abort rather than guess at intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
  /// Wrong number of pipe-delimited fields.
  FieldCount { line: usize, found: usize },
  /// Unrecognized algorithm field.
  UnknownAlgorithm { line: usize, value: String },
  /// Unrecognized message-generation-method field.
  UnknownMethod { line: usize, value: String },
  /// Non-numeric message length field.
  InvalidLength { line: usize, value: String },
  /// Unrecognized seed-kind field.
  UnknownSeedKind { line: usize, value: String },
}

impl fmt::Display for RecordError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::FieldCount { line, found } => {
        write!(f, "line {line}: expected {} fields, found {found}", Record::FIELD_COUNT)
      }
      Self::UnknownAlgorithm { line, value } => write!(f, "line {line}: unknown algorithm '{value}'"),
      Self::UnknownMethod { line, value } => {
        write!(f, "line {line}: unknown message generation method '{value}'")
      }
      Self::InvalidLength { line, value } => write!(f, "line {line}: invalid message length '{value}'"),
      Self::UnknownSeedKind { line, value } => write!(f, "line {line}: unknown seed kind '{value}'"),
    }
  }
}

impl core::error::Error for RecordError {}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Record {
    Record {
      algorithm: Algorithm::Xxh3_64,
      method: MessageMethod::ByteCycle,
      message_length: 4913,
      seed_kind: SeedKind::Seed,
      seed_or_secret: String::from("637c777bf26b6fc5"),
      expected_digest: String::from("0123456789abcdef"),
    }
  }

  #[test]
  fn line_round_trip() {
    let record = sample();
    let line = record.to_line();
    assert_eq!(line, "xxh3-64|0x00_to_0xff|4913|seed|637c777bf26b6fc5|0123456789abcdef");
    assert_eq!(Record::parse_line(&line, 1).unwrap(), record);
  }

  #[test]
  fn selector_mapping_matches_the_reference_binary() {
    assert_eq!(Algorithm::Xxh32.selector(), 0);
    assert_eq!(Algorithm::Xxh64.selector(), 1);
    assert_eq!(Algorithm::Xxh3_128.selector(), 2);
    assert_eq!(Algorithm::Xxh3_64.selector(), 3);
  }

  #[test]
  fn digest_widths() {
    assert_eq!(Algorithm::Xxh32.digest_hex_width(), 8);
    assert_eq!(Algorithm::Xxh64.digest_hex_width(), 16);
    assert_eq!(Algorithm::Xxh3_64.digest_hex_width(), 16);
    assert_eq!(Algorithm::Xxh3_128.digest_hex_width(), 32);
  }

  #[test]
  fn malformed_method_is_a_plan_error() {
    let err = Record::parse_line("32|randomized|0|seed|00000000|02cc5d05", 7).unwrap_err();
    assert_eq!(
      err,
      RecordError::UnknownMethod {
        line: 7,
        value: String::from("randomized")
      }
    );
  }

  #[test]
  fn malformed_algorithm_is_a_plan_error() {
    let err = Record::parse_line("16|null|0|seed|00000000|02cc5d05", 3).unwrap_err();
    assert!(matches!(err, RecordError::UnknownAlgorithm { line: 3, .. }));
  }

  #[test]
  fn field_count_is_checked_before_field_content() {
    let err = Record::parse_line("32|null|0|seed|00000000", 1).unwrap_err();
    assert_eq!(err, RecordError::FieldCount { line: 1, found: 5 });

    let err = Record::parse_line("", 2).unwrap_err();
    assert_eq!(err, RecordError::FieldCount { line: 2, found: 1 });
  }

  #[test]
  fn non_numeric_length_is_a_plan_error() {
    let err = Record::parse_line("32|null|x|seed|00000000|02cc5d05", 5).unwrap_err();
    assert!(matches!(err, RecordError::InvalidLength { line: 5, .. }));
  }

  #[test]
  fn error_messages_carry_the_line_number() {
    let err = Record::parse_line("32|randomized|0|seed|00000000|02cc5d05", 41).unwrap_err();
    assert_eq!(
      alloc::string::ToString::to_string(&err),
      "line 41: unknown message generation method 'randomized'"
    );
  }
}
