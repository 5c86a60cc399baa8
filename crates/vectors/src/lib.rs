//! Deterministic derivation core for the xxHash conformance oracle.
//!
//! Everything in this crate is a pure function of a single frozen constant,
//! [`RIJNDAEL_SBOX`]: the seed and secret synthesizer ([`seed`]), the
//! message corpus generator ([`message`]), the vector record model and its
//! pipe-delimited line codec ([`record`]), and the fixed production plan
//! ([`plan`]). Reproducibility is the entire point: two runs, or two
//! implementations in different languages, must derive byte-identical
//! inputs for every case.
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

pub mod message;
pub mod plan;
pub mod record;
pub mod sbox;
pub mod seed;

mod proptests;

pub use message::MessageMethod;
pub use plan::{MESSAGE_LENGTHS, PlanCase, SECRET_MESSAGE_LENGTHS, plan};
pub use record::{Algorithm, Record, RecordError, SeedKind};
pub use sbox::RIJNDAEL_SBOX;
pub use seed::{SEED32_BATCH, Seed32Cycle, secrets, seeds32, seeds64};
