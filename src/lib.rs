//! Deterministic randomness for reproducible cryptographic artifacts
//!
//! This crate provides a byte stream that can stand in wherever a source of
//! cryptographic randomness is expected (key generation, nonce selection,
//! signing) while producing bit-for-bit identical output for a fixed seed.
//!
//! It is meant for test fixtures, golden vectors and reproducible builds of
//! key material. The seed is chosen by the caller and the whole output is a
//! pure function of it, so it must **never** be used to generate production
//! secrets.
//!
//! # Module overview
//!
//! - `rng`
//!   The hash-chain generator [`DetermRand`]. The seed is strengthened
//!   through a fixed number of SHA-512 chain advances, then every read
//!   hashes the chain forward and emits the second half of each digest.
//!
//! # Consumption
//!
//! [`DetermRand`] implements [`rand_core::RngCore`] and
//! [`rand_core::CryptoRng`], so it can be handed to any key-generation
//! routine written against `rand_core`. With the `std` feature (enabled by
//! default) it also implements [`std::io::Read`].
//!
//! ```
//! use determ_rand::DetermRand;
//!
//! let mut a = DetermRand::new(b"fixture seed");
//! let mut b = DetermRand::new(b"fixture seed");
//!
//! let mut x = [0u8; 48];
//! let mut y = [0u8; 48];
//! a.read(&mut x);
//! b.read(&mut y);
//!
//! assert_eq!(x, y);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod rng;

pub use rng::{DetermRand, STRENGTHEN_ITERATIONS};
