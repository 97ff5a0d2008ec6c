//! NIST P-256 (a.k.a. secp256r1, prime256v1), as defined in SP 800-186.

use crate::{AffinePoint, Curve};
use alloc::borrow::Cow;
use bignum::BigInt;
use hex_literal::hex;

/// NIST P-256 elliptic curve.
///
/// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field; `a` is
/// stored as `p - 3`.
pub static NIST_P256: Curve = Curve {
    p: BigInt::from_be_array(&hex!(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
    )),
    a: BigInt::from_be_array(&hex!(
        "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"
    )),
    b: BigInt::from_be_array(&hex!(
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
    )),
    q: BigInt::from_be_array(&hex!(
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
    )),
    g: AffinePoint::new(
        BigInt::from_be_array(&hex!(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        )),
        BigInt::from_be_array(&hex!(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        )),
    ),
    name: Cow::Borrowed("P256"),
    oid: Cow::Borrowed(&[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07]),
};
