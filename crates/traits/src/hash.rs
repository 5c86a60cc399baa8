//! Seeded streaming-hash and secret-mode hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

use crate::DigestOutput;

/// Smallest secret accepted by the XXH3 secret-mode API, in bytes.
pub const SECRET_SIZE_MIN: usize = 136;

/// A seeded non-cryptographic hash supporting one-shot and incremental
/// computation.
///
/// # Implementor Requirements
///
/// - [`digest`](Self::digest) is non-destructive and repeatable: it may be
///   called any number of times, interleaved with further updates.
/// - Chunk boundaries must not matter: any sequence of
///   [`update`](Self::update) calls whose concatenation equals `data`
///   produces the same digest as `hash_with_seed(seed, data)`.
/// - [`reset`](Self::reset) must leave no residual state: a reset hasher is
///   indistinguishable from a freshly constructed one.
pub trait StreamingHash: Clone {
  /// Seed type (`u32` or `u64` depending on the algorithm family).
  type Seed: Copy + Debug + Default;

  /// Digest type.
  type Output: DigestOutput;

  /// Compute the digest of `data` in one shot.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;

  /// Create an incremental hasher primed with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Feed one chunk of the message.
  fn update(&mut self, chunk: &[u8]);

  /// Digest of everything fed so far. Does not consume or disturb state.
  #[must_use]
  fn digest(&self) -> Self::Output;

  /// Discard all fed data and re-prime with `seed`.
  fn reset(&mut self, seed: Self::Seed);
}

/// XXH3-style secret-mode hashing.
///
/// Secrets replace the fixed-width seed with a byte buffer of at least
/// [`SECRET_SIZE_MIN`] bytes. Only one-shot computation is exposed; the
/// reference record producer never records streaming secret digests.
pub trait SecretHash: StreamingHash {
  /// Compute the digest of `data` under `secret` in one shot.
  ///
  /// Callers must ensure `secret.len() >= SECRET_SIZE_MIN`.
  #[must_use]
  fn hash_with_secret(secret: &[u8], data: &[u8]) -> Self::Output;
}
