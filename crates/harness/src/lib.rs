//! Conformance harness for the xxHash implementation under test.
//!
//! Two independent verification modes:
//!
//! - [`replay`]: re-derive every input described by a vector record file,
//!   recompute each digest through the implementation under test, and
//!   report every divergence (never stopping at the first).
//! - [`equivalence`]: record-independent invariants: the three digest
//!   encodings agree, chunk boundaries don't matter, and reset leaves no
//!   residual state.
//!
//! The implementation under test is `xxhash-rust`, adapted to the
//! [`traits`] interface in [`xxh`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod equivalence;
pub mod replay;
pub mod xxh;

pub use equivalence::{Divergence, run_suite};
pub use replay::{Mismatch, ReplayError, ReplayReport, recompute, replay};
pub use xxh::{Xxh3_64, Xxh3_128, Xxh32, Xxh64};
