//! Property tests for the derivation core.
//!
//! These pin the laws the rest of the system leans on: message generation is
//! a pure prefix function, seed consumption is order-preserving modulo the
//! list length, and the record line codec is idempotent.

#![cfg(all(test, not(miri)))]

extern crate std;

use alloc::{string::String, vec::Vec};

use proptest::prelude::*;

use crate::{
  message::{MessageMethod, generate},
  record::{Algorithm, Record, SeedKind},
  seed::Seed32Cycle,
};

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
  prop::sample::select(Algorithm::ALL.to_vec())
}

fn hex_strategy(max_len: usize) -> impl Strategy<Value = String> {
  prop::collection::vec(prop::sample::select(b"0123456789abcdef".to_vec()), 1..=max_len)
    .prop_map(|chars| chars.into_iter().map(char::from).collect())
}

proptest! {
  #[test]
  fn generate_has_exact_length_and_cycle_content(len in 0usize..20_000) {
    let msg = generate(len);
    prop_assert_eq!(msg.len(), len);
    for (i, b) in msg.iter().enumerate() {
      prop_assert_eq!(*b, i as u8);
    }
  }

  #[test]
  fn generate_is_a_prefix_function(a in 0usize..10_000, b in 0usize..10_000) {
    let (short, long) = if a <= b { (a, b) } else { (b, a) };
    let long_msg = generate(long);
    prop_assert_eq!(&long_msg[..short], generate(short));
  }

  #[test]
  fn seed_cycle_is_position_independent(draws in prop::collection::vec(1usize..100, 1..20)) {
    // Drawing in arbitrary batch sizes yields the same stream as drawing
    // one seed at a time.
    let total: usize = draws.iter().sum();
    let mut batched = Seed32Cycle::new();
    let mut single = Seed32Cycle::new();

    let mut from_batches = Vec::new();
    for n in &draws {
      from_batches.extend(batched.draw(*n));
    }
    let from_singles: Vec<String> = (0..total).flat_map(|_| single.draw(1)).collect();
    prop_assert_eq!(from_batches, from_singles);
  }

  #[test]
  fn record_codec_is_idempotent(
    algorithm in algorithm_strategy(),
    method_null in any::<bool>(),
    message_length in 0usize..2_000_000,
    secret_mode in any::<bool>(),
    material in hex_strategy(288),
    digest in hex_strategy(32),
  ) {
    let record = Record {
      algorithm,
      method: if method_null { MessageMethod::Null } else { MessageMethod::ByteCycle },
      message_length,
      seed_kind: if secret_mode { SeedKind::Secret } else { SeedKind::Seed },
      seed_or_secret: material,
      expected_digest: digest,
    };

    let parsed = Record::parse_line(&record.to_line(), 1).unwrap();
    prop_assert_eq!(&parsed, &record);
    prop_assert_eq!(parsed.to_line(), record.to_line());
  }
}
