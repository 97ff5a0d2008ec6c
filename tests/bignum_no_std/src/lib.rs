//! Builds `bignum` for a `no_std` target.

#![no_std]

pub use bignum::{BigInt, Error, PrimeFlags, RandomSource};
