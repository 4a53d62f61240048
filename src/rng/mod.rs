//! Random number generation module
//!
//! This module provides the deterministic hash-chain generator.
//!
//! Layout:
//! - `chain`: the pure advance transform, `digest -> (next, out)`
//! - `determ`: the stateful stream built on top of it
//!
//! The chain looks like this, with `H` the injected hash function:
//!
//! ```text
//! [a|...] -> H(a) -> [b|out] -> H(b) -> [c|out] -> ...
//! ```
//!
//! Only the `out` halves ever reach a caller.

mod chain;
mod determ;

pub use determ::{DetermRand, STRENGTHEN_ITERATIONS};
