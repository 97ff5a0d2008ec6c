#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

mod arith;
mod encoding;
mod error;
mod int;
mod modular;
mod monty;
mod prime;
mod rand;
mod utils;

pub use crate::{
    error::{Error, Result},
    int::{BigInt, Sign},
    modular::EvenModulus,
    prime::{DEFAULT_MR_ROUNDS, DEFAULT_PRIME_BITS, FP_PRIME_SIZE, PrimeFlags, SMALL_PRIMES},
    rand::{FillFn, RandomSource},
};
pub use subtle;

/// A single limb of a [`BigInt`].
pub type Digit = u64;

/// Twice the width of a [`Digit`], used for carries and products.
pub(crate) type DoubleDigit = u128;

/// Width of a [`Digit`] in bits.
pub const DIGIT_BIT: usize = 64;

/// Maximum magnitude of a [`BigInt`] in bits.
pub const FP_MAX_SIZE: usize = 4096 + 8 * DIGIT_BIT;

/// Number of digits backing a [`BigInt`].
pub const FP_SIZE: usize = FP_MAX_SIZE / DIGIT_BIT;

/// Smallest prime size accepted by [`BigInt::generate_prime`].
pub const MIN_PRIME_BITS: usize = 16;

/// Largest prime size accepted by [`BigInt::generate_prime`].
pub const MAX_PRIME_BITS: usize = 4096;
