//! Deterministic hash-chain reader
//!
//! [`DetermRand`] turns a caller-chosen seed into an endless, reproducible
//! byte stream. It is built for reproducibility, not secrecy: anyone who
//! knows the seed knows every byte the stream will ever produce.
//!
//! Construction strengthens the seed through [`STRENGTHEN_ITERATIONS`] chain
//! advances so that short or structured seeds no longer appear in
//! recognizable form in the chain. Every read then advances the chain once
//! per output block.
//!
//! # Probe reads
//!
//! Some key-generation routines (ECDSA in particular) read a single byte
//! from the randomness source with 50% probability, purely to keep callers
//! from depending on their output being deterministic. With a plain hash
//! chain that probe would shift every following block and make the
//! generated key depend on a coin flip.
//!
//! To neutralize this, a call whose total requested length is at most one
//! byte never commits the advanced chain state. The probe still receives a
//! pseudo-random byte, and the next real read starts from exactly where it
//! would have without the probe. The rule applies to the length of the whole
//! call, not to individual advances.

use core::fmt;

use rand_core::{CryptoRng, RngCore, impls};
use sha2::Sha512;
use sha2::digest::Digest;
use tracing::trace;

use crate::rng::chain::{ChainState, advance};

/// Number of chain advances applied to the seed before any output.
pub const STRENGTHEN_ITERATIONS: usize = 2048;

/// Deterministic pseudo-random byte stream over a hash chain.
///
/// The hash defaults to SHA-512 (64-byte digest, 32-byte output blocks).
/// Any fixed-output [`Digest`] with an even output size can be used through
/// [`DetermRand::with_hash`].
///
/// The stream exclusively owns its chain state. It is intentionally not
/// `Clone`: independent streams are obtained by constructing them from the
/// same seed.
pub struct DetermRand<D: Digest = Sha512> {
    state: ChainState<D>,
}

impl DetermRand<Sha512> {
    /// Creates a SHA-512 stream from `seed`.
    ///
    /// Any seed is accepted, including an empty one; it only has to be
    /// fixed for the output to be reproducible.
    pub fn new(seed: &[u8]) -> Self {
        Self::with_hash(seed)
    }
}

impl<D: Digest> DetermRand<D> {
    /// Creates a stream from `seed` using the hash function `D`.
    ///
    /// # Panics
    ///
    /// If the output size of `D` is odd.
    pub fn with_hash(seed: &[u8]) -> Self {
        assert!(
            <D as Digest>::output_size() % 2 == 0,
            "hash output size must be even to split into (next, out)"
        );

        let mut state = advance::<D>(seed);
        for _ in 1..STRENGTHEN_ITERATIONS {
            state = advance::<D>(state.next());
        }

        trace!(
            seed_len = seed.len(),
            iterations = STRENGTHEN_ITERATIONS,
            block_len = state.out().len(),
            "strengthened deterministic stream seed"
        );

        Self { state }
    }

    /// Fills `buf` entirely and returns the number of bytes written.
    ///
    /// The buffer is never short-filled; an empty buffer is a no-op. The
    /// `out` block buffered by the previous advance is never reused: each
    /// call starts with a fresh advance, and only the prefix of the final
    /// block that fits is copied.
    ///
    /// Calls requesting at most one byte leave the chain state untouched
    /// (see the module documentation on probe reads).
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let len = buf.len();
        let mut filled = 0;

        while filled < len {
            let step = advance::<D>(self.state.next());
            let out = step.out();
            let n = out.len().min(len - filled);
            buf[filled..filled + n].copy_from_slice(&out[..n]);
            filled += n;

            if len > 1 {
                self.state = step;
            } else {
                trace!("single-byte probe read, chain state not committed");
            }
        }

        filled
    }
}

impl<D: Digest> fmt::Debug for DetermRand<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetermRand").finish_non_exhaustive()
    }
}

impl<D: Digest> RngCore for DetermRand<D> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        DetermRand::read(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        DetermRand::read(self, dest);
        Ok(())
    }
}

impl<D: Digest> CryptoRng for DetermRand<D> {}

#[cfg(feature = "std")]
impl<D: Digest> std::io::Read for DetermRand<D> {
    /// Always fills the whole buffer and never fails.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(DetermRand::read(self, buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    fn chain_after(seed: &[u8], advances: usize) -> ChainState<Sha512> {
        let mut state = advance::<Sha512>(seed);
        for _ in 1..advances {
            state = advance::<Sha512>(state.next());
        }
        state
    }

    #[test]
    fn first_block_comes_from_advance_2049() {
        let mut rng = DetermRand::new(b"seed");
        let mut buf = [0u8; 32];
        rng.read(&mut buf);

        let expected = chain_after(b"seed", STRENGTHEN_ITERATIONS + 1);
        assert_eq!(&buf[..], expected.out());
    }

    #[test]
    fn multi_byte_read_commits_every_advance() {
        let mut rng = DetermRand::new(b"seed");
        let mut buf = [0u8; 70];
        rng.read(&mut buf);

        // 70 bytes take three advances: 32 + 32 + 6.
        let expected = chain_after(b"seed", STRENGTHEN_ITERATIONS + 3);
        assert_eq!(rng.state.next(), expected.next());
        assert_eq!(&buf[64..], &expected.out()[..6]);
    }

    #[test]
    fn probe_does_not_commit() {
        let mut rng = DetermRand::new(b"seed");
        let before = rng.state.next().to_vec();

        let mut probe = [0u8; 1];
        assert_eq!(rng.read(&mut probe), 1);

        assert_eq!(rng.state.next(), &before[..]);
        let expected = chain_after(b"seed", STRENGTHEN_ITERATIONS + 1);
        assert_eq!(probe[0], expected.out()[0]);
    }

    #[test]
    fn empty_read_is_noop() {
        let mut rng = DetermRand::new(b"seed");
        let before = rng.state.next().to_vec();

        assert_eq!(rng.read(&mut []), 0);
        assert_eq!(rng.state.next(), &before[..]);
    }

    #[test]
    fn two_byte_read_commits() {
        let mut rng = DetermRand::new(b"seed");
        let mut buf = [0u8; 2];
        rng.read(&mut buf);

        let expected = chain_after(b"seed", STRENGTHEN_ITERATIONS + 1);
        assert_eq!(rng.state.next(), expected.next());
    }

    #[test]
    fn other_digest_uses_half_blocks() {
        let mut rng = DetermRand::<Sha256>::with_hash(b"seed");
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        rng.read(&mut a);
        rng.read(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn debug_hides_state() {
        let rng = DetermRand::new(b"seed");
        assert_eq!(format!("{:?}", rng), "DetermRand { .. }");
    }
}
