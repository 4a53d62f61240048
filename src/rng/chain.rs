//! Hash-chain state and the pure advance step
//!
//! A single advance hashes the previous `next` value and splits the digest
//! into two equal halves:
//! - the first half is the new `next`, fed into the following advance
//! - the second half is `out`, the block that may be emitted to a caller
//!
//! Nothing in here mutates; the stream in `determ` decides which advances
//! are committed.

use sha2::digest::{Digest, Output};

/// One `(next, out)` pair produced by a single hash application.
///
/// Both halves live in the digest they were cut from, so the state is
/// exactly one digest wide.
pub(crate) struct ChainState<D: Digest> {
    digest: Output<D>,
}

impl<D: Digest> ChainState<D> {
    /// Continuation value, never exposed outside the crate.
    pub(crate) fn next(&self) -> &[u8] {
        self.halves().0
    }

    /// Pseudo-random block available for output.
    pub(crate) fn out(&self) -> &[u8] {
        self.halves().1
    }

    fn halves(&self) -> (&[u8], &[u8]) {
        self.digest.split_at(self.digest.len() / 2)
    }
}

/// Hashes `input` once and returns the split digest.
pub(crate) fn advance<D: Digest>(input: &[u8]) -> ChainState<D> {
    ChainState {
        digest: D::digest(input),
    }
}
