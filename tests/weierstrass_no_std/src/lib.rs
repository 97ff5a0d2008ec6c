//! Builds `weierstrass` for a `no_std` target, with and without `sha256`.

#![no_std]

pub use weierstrass::{AffinePoint, Curve, Error, Point, Signature, curve::NIST_P256};

#[cfg(feature = "sha256")]
pub use weierstrass::ecdsa::{SigningKey, VerifyingKey};
