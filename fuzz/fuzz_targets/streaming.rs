//! Fuzz target for the streaming-state invariant.
//!
//! Arbitrary sequences of update calls must produce the one-shot digest for
//! every algorithm variant.

#![no_main]

use arbitrary::Arbitrary;
use harness::{Xxh3_64, Xxh3_128, Xxh32, Xxh64};
use libfuzzer_sys::fuzz_target;
use traits::StreamingHash;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming::<Xxh32>(input.seed as u32, &input.data, &input.chunk_sizes);
  test_streaming::<Xxh64>(input.seed, &input.data, &input.chunk_sizes);
  test_streaming::<Xxh3_64>(input.seed, &input.data, &input.chunk_sizes);
  test_streaming::<Xxh3_128>(input.seed, &input.data, &input.chunk_sizes);
});

fn test_streaming<H: StreamingHash>(seed: H::Seed, data: &[u8], chunk_sizes: &[usize]) {
  let expected = H::hash_with_seed(seed, data);

  let mut hasher = H::with_seed(seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.digest(), expected, "streaming mismatch");
}
