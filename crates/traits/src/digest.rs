//! Canonical digest encodings.

use alloc::{format, string::String, vec::Vec};
use core::fmt::Debug;

/// A fixed-size hash digest, retrievable in the three canonical encodings.
///
/// The encodings must be mutually consistent: hex-encoding the raw bytes
/// yields [`to_hex`](Self::to_hex), and zero-padding the hexadecimal
/// rendering of [`to_uint`](Self::to_uint) to [`HEX_WIDTH`](Self::HEX_WIDTH)
/// characters yields it as well. The harness asserts exactly that, so these
/// implementations are the reference behavior, not a convenience.
pub trait DigestOutput: Copy + Eq + Debug {
  /// Canonical hex width: two characters per digest byte, zero-padded.
  const HEX_WIDTH: usize;

  /// Raw digest bytes, big-endian.
  #[must_use]
  fn to_raw(&self) -> Vec<u8>;

  /// Lowercase hexadecimal, zero-padded to [`HEX_WIDTH`](Self::HEX_WIDTH).
  #[must_use]
  fn to_hex(&self) -> String;

  /// The digest as an unsigned integer, widened to 128 bits.
  #[must_use]
  fn to_uint(&self) -> u128;
}

macro_rules! impl_digest_output {
  ($($ty:ty),* $(,)?) => {$(
    impl DigestOutput for $ty {
      const HEX_WIDTH: usize = 2 * core::mem::size_of::<$ty>();

      #[inline]
      fn to_raw(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
      }

      #[inline]
      fn to_hex(&self) -> String {
        format!("{:0width$x}", self, width = Self::HEX_WIDTH)
      }

      #[inline]
      fn to_uint(&self) -> u128 {
        *self as u128
      }
    }
  )*};
}

impl_digest_output!(u32, u64, u128);
