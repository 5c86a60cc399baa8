//! Deterministic message corpus generation.

use alloc::vec::Vec;

/// Message generation method named by a vector record.
///
/// Content is always derived, never random: a record plus this method fully
/// determines the message bytes, byte-for-byte, in any implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageMethod {
  /// The empty message.
  Null,
  /// The repeating ascending `0x00..=0xff` byte cycle, truncated to length.
  ByteCycle,
}

impl MessageMethod {
  /// Parse the method field of a record.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "null" => Some(Self::Null),
      "0x00_to_0xff" => Some(Self::ByteCycle),
      _ => None,
    }
  }

  /// Canonical record-field spelling.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::ByteCycle => "0x00_to_0xff",
    }
  }

  /// Materialize the message at `length` bytes.
  ///
  /// `Null` yields the empty message regardless of `length`; the plan only
  /// ever pairs it with length 0.
  #[must_use]
  pub fn materialize(self, length: usize) -> Vec<u8> {
    match self {
      Self::Null => Vec::new(),
      Self::ByteCycle => generate(length),
    }
  }
}

/// The first `length` bytes of the infinite repetition of the ascending
/// 256-byte template (`template[i] == i`).
#[must_use]
pub fn generate(length: usize) -> Vec<u8> {
  if length == 0 {
    return Vec::new();
  }

  let mut template = [0u8; 256];
  for (i, b) in template.iter_mut().enumerate() {
    *b = i as u8;
  }

  let cycles = length.div_ceil(template.len());
  let mut out = Vec::with_capacity(cycles * template.len());
  for _ in 0..cycles {
    out.extend_from_slice(&template);
  }
  out.truncate(length);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_length_is_empty() {
    assert!(generate(0).is_empty());
    assert!(MessageMethod::Null.materialize(0).is_empty());
  }

  #[test]
  fn null_ignores_the_length_field() {
    assert!(MessageMethod::Null.materialize(17).is_empty());
  }

  #[test]
  fn exact_lengths_for_the_plan_sizes() {
    for len in [0usize, 1, 17, 289, 4913, 83521, 1419857] {
      assert_eq!(generate(len).len(), len);
    }
  }

  #[test]
  fn content_is_the_ascending_cycle() {
    let msg = generate(1);
    assert_eq!(msg, [0x00]);

    let msg = generate(300);
    assert_eq!(msg[0], 0x00);
    assert_eq!(msg[255], 0xff);
    assert_eq!(msg[256], 0x00);
    assert_eq!(msg[299], 43);
  }

  #[test]
  fn every_length_is_a_prefix_of_the_next() {
    let long = generate(4913);
    let short = generate(289);
    assert_eq!(long[..289], short);
  }
}
