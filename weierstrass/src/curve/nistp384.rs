//! NIST P-384 (a.k.a. secp384r1), as defined in SP 800-186.

use crate::{AffinePoint, Curve};
use alloc::borrow::Cow;
use bignum::BigInt;
use hex_literal::hex;

/// NIST P-384 elliptic curve.
pub static NIST_P384: Curve = Curve {
    p: BigInt::from_be_array(&hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"
    )),
    a: BigInt::from_be_array(&hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc"
    )),
    b: BigInt::from_be_array(&hex!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"
    )),
    q: BigInt::from_be_array(&hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"
    )),
    g: AffinePoint::new(
        BigInt::from_be_array(&hex!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"
        )),
        BigInt::from_be_array(&hex!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"
        )),
    ),
    name: Cow::Borrowed("P384"),
    oid: Cow::Borrowed(&[0x2b, 0x81, 0x04, 0x00, 0x22]),
};
