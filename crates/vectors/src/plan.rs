//! The fixed production plan.
//!
//! Enumeration order is stable within a run (for diffability of produced
//! record files) and reproduces the order the record corpus was originally
//! produced in: the seed block over every algorithm first, then the secret
//! block over the XXH3 variants.

use alloc::{
  string::{String, ToString},
  vec::Vec,
};
use core::fmt;

use crate::{
  message::MessageMethod,
  record::{Algorithm, Record, SeedKind},
  seed::{SEED32_BATCH, Seed32Cycle, secrets, seeds64},
};

/// Message lengths exercised under seed mode: 0 plus the powers of 17 up to
/// 17^5, straddling the short-stripe, multi-block, and large-buffer paths.
pub const MESSAGE_LENGTHS: [usize; 7] = [0, 1, 17, 289, 4913, 83521, 1419857];

/// Message lengths exercised under secret mode.
///
/// Boundary cases only: secret handling is orthogonal to the
/// message-length-driven block logic, so the original plan's reduced
/// coverage is preserved as-is.
pub const SECRET_MESSAGE_LENGTHS: [usize; 3] = [0, 1, 1419857];

/// One planned oracle invocation: a record minus its expected digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanCase {
  pub algorithm: Algorithm,
  pub method: MessageMethod,
  pub message_length: usize,
  pub seed_kind: SeedKind,
  pub seed_or_secret: String,
}

impl PlanCase {
  /// Attach an expected digest, completing the record.
  #[must_use]
  pub fn into_record(self, expected_digest: String) -> Record {
    Record {
      algorithm: self.algorithm,
      method: self.method,
      message_length: self.message_length,
      seed_kind: self.seed_kind,
      seed_or_secret: self.seed_or_secret,
      expected_digest,
    }
  }
}

impl fmt::Display for PlanCase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}({}) {} {}",
      self.algorithm,
      self.method.as_str(),
      self.message_length,
      self.seed_kind.as_str(),
      self.seed_or_secret
    )
  }
}

/// `(method, length)` for a plan length; 0 is the null-message case.
fn message_case(length: usize) -> (MessageMethod, usize) {
  if length == 0 {
    (MessageMethod::Null, 0)
  } else {
    (MessageMethod::ByteCycle, length)
  }
}

/// Enumerate the full production plan in canonical order.
///
/// For every algorithm and message length: the zero seed first, then the
/// derived seeds: a fresh cyclic batch of [`SEED32_BATCH`] for XXH32, the
/// full 64-bit seed list for the rest. Then, for the XXH3 variants at the
/// secret-mode boundary lengths: all six synthesized secrets.
#[must_use]
pub fn plan() -> Vec<PlanCase> {
  let mut cases = Vec::new();
  let mut cycle = Seed32Cycle::new();
  let wide_seeds = seeds64();
  let secret_list = secrets();

  for algorithm in Algorithm::ALL {
    for length in MESSAGE_LENGTHS {
      let (method, message_length) = message_case(length);

      let mut seeds = Vec::with_capacity(1 + SEED32_BATCH.max(wide_seeds.len()));
      seeds.push(algorithm.zero_seed().to_string());
      match algorithm {
        Algorithm::Xxh32 => seeds.extend(cycle.draw(SEED32_BATCH)),
        Algorithm::Xxh64 | Algorithm::Xxh3_64 | Algorithm::Xxh3_128 => {
          seeds.extend(wide_seeds.iter().cloned());
        }
      }

      for seed in seeds {
        cases.push(PlanCase {
          algorithm,
          method,
          message_length,
          seed_kind: SeedKind::Seed,
          seed_or_secret: seed,
        });
      }
    }
  }

  for algorithm in [Algorithm::Xxh3_64, Algorithm::Xxh3_128] {
    for length in SECRET_MESSAGE_LENGTHS {
      let (method, message_length) = message_case(length);
      for secret in &secret_list {
        cases.push(PlanCase {
          algorithm,
          method,
          message_length,
          seed_kind: SeedKind::Secret,
          seed_or_secret: secret.clone(),
        });
      }
    }
  }

  cases
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed::seeds32;

  #[test]
  fn full_matrix_size() {
    let cases = plan();
    // Seed mode: 7 lengths x (1 + 32) seeds x 4 algorithms.
    // Secret mode: 3 lengths x 6 secrets x 2 algorithms.
    assert_eq!(cases.len(), 4 * 7 * 33 + 2 * 3 * 6);
  }

  #[test]
  fn zero_seed_always_comes_first() {
    let cases = plan();
    for window in cases.windows(2) {
      let [prev, next] = window else { unreachable!() };
      let starts_new_message_block =
        next.seed_kind == SeedKind::Seed && (prev.message_length != next.message_length || prev.algorithm != next.algorithm);
      if starts_new_message_block {
        assert_eq!(next.seed_or_secret, next.algorithm.zero_seed(), "in {next}");
      }
    }
    assert_eq!(cases[0].seed_or_secret, "00000000");
  }

  #[test]
  fn xxh32_seed_consumption_is_cyclic() {
    let all = seeds32();
    let cases = plan();

    let xxh32_seeds: Vec<&str> = cases
      .iter()
      .filter(|c| c.algorithm == Algorithm::Xxh32 && c.seed_or_secret != "00000000")
      .map(|c| c.seed_or_secret.as_str())
      .collect();
    assert_eq!(xxh32_seeds.len(), 7 * 32);

    // Batches tile the 64-seed list in order, wrapping across message cases.
    for (i, seed) in xxh32_seeds.iter().enumerate() {
      assert_eq!(*seed, all[i % all.len()]);
    }
  }

  #[test]
  fn wide_algorithms_reuse_the_full_seed_list() {
    let wide = seeds64();
    let cases = plan();

    for algorithm in [Algorithm::Xxh64, Algorithm::Xxh3_64, Algorithm::Xxh3_128] {
      let seeds: Vec<&str> = cases
        .iter()
        .filter(|c| c.algorithm == algorithm && c.seed_kind == SeedKind::Seed)
        .map(|c| c.seed_or_secret.as_str())
        .collect();
      assert_eq!(seeds.len(), 7 * 33);
      for chunk in seeds.chunks_exact(33) {
        assert_eq!(chunk[0], "0000000000000000");
        assert_eq!(chunk[1..], wide);
      }
    }
  }

  #[test]
  fn secret_block_covers_boundary_lengths_only() {
    let cases = plan();
    let secret_cases: Vec<&PlanCase> = cases.iter().filter(|c| c.seed_kind == SeedKind::Secret).collect();

    assert_eq!(secret_cases.len(), 36);
    assert!(secret_cases.iter().all(|c| c.algorithm.supports_secret()));
    assert!(
      secret_cases
        .iter()
        .all(|c| SECRET_MESSAGE_LENGTHS.contains(&c.message_length))
    );
    // The secret block follows the whole seed block.
    let first_secret = cases.iter().position(|c| c.seed_kind == SeedKind::Secret).unwrap();
    assert!(cases[first_secret..].iter().all(|c| c.seed_kind == SeedKind::Secret));
  }

  #[test]
  fn null_method_only_at_length_zero() {
    for case in plan() {
      match case.method {
        MessageMethod::Null => assert_eq!(case.message_length, 0),
        MessageMethod::ByteCycle => assert_ne!(case.message_length, 0),
      }
    }
  }
}
