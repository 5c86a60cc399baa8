//! Deterministic seed and secret synthesis from the byte-permutation table.

#![allow(clippy::indexing_slicing)] // All indices are reduced modulo fixed table sizes.

use alloc::{string::String, vec::Vec};

use crate::sbox::RIJNDAEL_SBOX;

/// 32-bit seeds drawn per message case.
pub const SEED32_BATCH: usize = 32;

/// Table prefix consumed by secret synthesis, in bytes.
const SECRET_PREFIX_LEN: usize = 144;

/// All orderings of a 3-byte group, lexicographic by source index.
const GROUP_ORDERINGS: [[usize; 3]; 6] = [
  [0, 1, 2],
  [0, 2, 1],
  [1, 0, 2],
  [1, 2, 0],
  [2, 0, 1],
  [2, 1, 0],
];

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub(crate) fn hex_of(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len() * 2);
  for &b in bytes {
    out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(b & 0xf)] as char);
  }
  out
}

/// The 64 derived 32-bit seeds: consecutive 4-byte table groups, each
/// rendered as 8 lowercase hex characters.
#[must_use]
pub fn seeds32() -> Vec<String> {
  RIJNDAEL_SBOX.chunks_exact(4).map(hex_of).collect()
}

/// The 32 derived 64-bit seeds: consecutive 8-byte table groups, each
/// rendered as 16 lowercase hex characters.
#[must_use]
pub fn seeds64() -> Vec<String> {
  RIJNDAEL_SBOX.chunks_exact(8).map(hex_of).collect()
}

/// Cyclic cursor over the 32-bit seed list.
///
/// The production plan draws more 32-bit seeds than exist in one pass, so
/// consumption wraps around the end of the list (index modulo list length)
/// and the cursor carries across batches.
#[derive(Clone, Debug)]
pub struct Seed32Cycle {
  seeds: Vec<String>,
  pos: usize,
}

impl Seed32Cycle {
  #[must_use]
  pub fn new() -> Self {
    Self {
      seeds: seeds32(),
      pos: 0,
    }
  }

  /// The next `n` seeds in table order, wrapping as needed.
  pub fn draw(&mut self, n: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
      out.push(self.seeds[self.pos].clone());
      self.pos = (self.pos + 1) % self.seeds.len();
    }
    out
  }
}

impl Default for Seed32Cycle {
  fn default() -> Self {
    Self::new()
  }
}

/// All six orderings of one 3-byte group, in [`GROUP_ORDERINGS`] order.
fn orderings_of(group: [u8; 3]) -> [[u8; 3]; 6] {
  GROUP_ORDERINGS.map(|idx| [group[idx[0]], group[idx[1]], group[idx[2]]])
}

/// The six synthesized 144-byte secrets, each as 288 lowercase hex chars.
///
/// Two explicit steps keep the ordering auditable: first the 48 groups of 3
/// table bytes are each expanded to their six orderings, then the lists are
/// transposed so the k-th secret concatenates every group's k-th ordering.
/// Secret 0 therefore reproduces the table prefix verbatim (the identity
/// ordering comes first).
#[must_use]
pub fn secrets() -> Vec<String> {
  let per_group: Vec<[[u8; 3]; 6]> = RIJNDAEL_SBOX[..SECRET_PREFIX_LEN]
    .chunks_exact(3)
    .map(|g| orderings_of([g[0], g[1], g[2]]))
    .collect();

  (0..GROUP_ORDERINGS.len())
    .map(|k| {
      let mut bytes = Vec::with_capacity(SECRET_PREFIX_LEN);
      for group in &per_group {
        bytes.extend_from_slice(&group[k]);
      }
      hex_of(&bytes)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_counts_and_widths() {
    let s32 = seeds32();
    let s64 = seeds64();
    assert_eq!(s32.len(), 64);
    assert_eq!(s64.len(), 32);
    assert!(s32.iter().all(|s| s.len() == 8));
    assert!(s64.iter().all(|s| s.len() == 16));
  }

  #[test]
  fn first_seeds_match_table_prefix() {
    assert_eq!(seeds32()[0], "637c777b");
    assert_eq!(seeds64()[0], "637c777bf26b6fc5");
  }

  #[test]
  fn cycle_wraps_preserving_order() {
    let mut cycle = Seed32Cycle::new();
    let all = seeds32();

    let first = cycle.draw(64);
    assert_eq!(first, all);

    // Second pass restarts at the top.
    let wrapped = cycle.draw(32);
    assert_eq!(wrapped, all[..32]);
  }

  #[test]
  fn cycle_carries_across_batches() {
    let mut cycle = Seed32Cycle::new();
    let all = seeds32();

    // Seven plan-sized batches consume 224 seeds: 3.5 passes over the list.
    let mut drawn = Vec::new();
    for _ in 0..7 {
      drawn.extend(cycle.draw(SEED32_BATCH));
    }
    assert_eq!(drawn.len(), 224);
    assert_eq!(drawn[64..128], all);
    assert_eq!(drawn[192..], all[..32]);

    // The next batch picks up mid-list, not at the top.
    assert_eq!(cycle.draw(SEED32_BATCH), all[32..]);
  }

  #[test]
  fn six_distinct_secrets_of_full_width() {
    let s = secrets();
    assert_eq!(s.len(), 6);
    assert!(s.iter().all(|sec| sec.len() == 288));
    for (i, a) in s.iter().enumerate() {
      for b in &s[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }

  #[test]
  fn secret_zero_is_the_identity_ordering() {
    assert_eq!(secrets()[0], hex_of(&RIJNDAEL_SBOX[..144]));
  }

  #[test]
  fn secrets_permute_within_groups_only() {
    for secret in secrets() {
      let bytes: Vec<u8> = (0..secret.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&secret[i..i + 2], 16).unwrap())
        .collect();
      for (group, original) in bytes.chunks_exact(3).zip(RIJNDAEL_SBOX[..144].chunks_exact(3)) {
        let mut got = [group[0], group[1], group[2]];
        let mut want = [original[0], original[1], original[2]];
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
      }
    }
  }

  #[test]
  fn orderings_cover_all_permutations() {
    let perms = orderings_of([1, 2, 3]);
    assert_eq!(
      perms,
      [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]]
    );
  }
}
