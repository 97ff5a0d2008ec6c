//! secp256k1, as defined in SEC 2.

use crate::{AffinePoint, Curve};
use alloc::borrow::Cow;
use bignum::BigInt;
use hex_literal::hex;

/// The secp256k1 elliptic curve `y² = x³ + 7`.
pub static SECP256K1: Curve = Curve {
    p: BigInt::from_be_array(&hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
    )),
    a: BigInt::ZERO,
    b: BigInt::from_u64(7),
    q: BigInt::from_be_array(&hex!(
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
    )),
    g: AffinePoint::new(
        BigInt::from_be_array(&hex!(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        )),
        BigInt::from_be_array(&hex!(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        )),
    ),
    name: Cow::Borrowed("secp256k1"),
    oid: Cow::Borrowed(&[0x2b, 0x81, 0x04, 0x00, 0x0a]),
};
