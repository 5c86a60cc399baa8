//! Hashing interface for the implementation under test.
//!
//! The conformance harness never touches a hash implementation directly; it
//! drives this interface. Every algorithm variant exposes one-shot and
//! incremental computation over the same seed material, and every digest is
//! retrievable in the three canonical encodings (raw big-endian bytes,
//! lowercase hex, unsigned integer).
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`DigestOutput`] | Canonical digest encodings |
//! | [`StreamingHash`] | Seeded one-shot + incremental hashing |
//! | [`SecretHash`] | XXH3-style secret-mode one-shot hashing |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

mod digest;
mod hash;

pub use digest::DigestOutput;
pub use hash::{SECRET_SIZE_MIN, SecretHash, StreamingHash};
