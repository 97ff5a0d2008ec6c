//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! The [`sign_prehashed`] and [`verify_prehashed`] primitives operate on a
//! message digest given as ASCII hex, and leave hashing and nonce selection
//! to the caller. A digest longer than the group order is truncated to its
//! leftmost `⌈log₂ q⌉` bits.
//!
//! With the `sha256` feature (on by default), [`SigningKey`] and
//! [`VerifyingKey`] hash messages themselves.
//!
//! ## Signing/Verification Example
//!
//! ```
//! # #[cfg(feature = "sha256")]
//! # {
//! use weierstrass::{curve::NIST_P256, ecdsa::SigningKey};
//! use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let signing_key = SigningKey::random(&NIST_P256, &mut rng)?;
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature = signing_key.sign_with_rng(message, &mut rng)?;
//!
//! assert!(signing_key.verifying_key().verify(message, &signature));
//! # }
//! # Ok::<(), weierstrass::Error>(())
//! ```
//!
//! # ⚠️ Security Warning
//!
//! Reusing a nonce `k` for two different digests, or choosing it from a
//! biased source, reveals the private key. The affine arithmetic here does
//! not run in constant time.

use crate::{AffinePoint, Curve, Result, Signature};
use bignum::{BigInt, Error as BigIntError};
use tracing::debug;

#[cfg(feature = "sha256")]
use {
    crate::{Error, Point, keys},
    bignum::RandomSource,
    core::fmt,
    sha2::{Digest, Sha256},
    zeroize::{Zeroize, ZeroizeOnDrop},
};

/// Sign a hex-encoded digest with private scalar `d` and nonce `k`.
///
/// Computes `r = (k·G).x mod q` and `s = k⁻¹(e + d·r) mod q`. A nonce not
/// invertible modulo `q` fails with [`bignum::Error::NotInvertible`];
/// malformed hex with [`bignum::Error::InvalidArgument`].
pub fn sign_prehashed(
    digest_hex: &[u8],
    d: &BigInt,
    k: &BigInt,
    curve: &Curve,
) -> Result<Signature> {
    let q = curve.q();
    let e = digest_to_scalar(digest_hex, curve)?;
    let k_inv = k.invmod(q)?;

    let big_r = curve.mul(curve.generator_affine(), k)?;
    let r = big_r.x_or_zero().modulo(q)?;
    let s = d.mulmod(&r, q)?.add(&e)?.mulmod(&k_inv, q)?;
    Ok(Signature::new(r, s))
}

/// Verify a signature over a hex-encoded digest against public key
/// `public_key`.
///
/// Signatures with `r` or `s` outside `[1, q)` are rejected, as are public
/// keys that are the identity or not on `curve`. Arithmetic failures count
/// as rejection.
pub fn verify_prehashed(
    signature: &Signature,
    digest_hex: &[u8],
    public_key: &AffinePoint,
    curve: &Curve,
) -> bool {
    match check_signature(signature, digest_hex, public_key, curve) {
        Ok(true) => true,
        Ok(false) => {
            debug!("signature rejected");
            false
        }
        Err(err) => {
            debug!(%err, "signature verification failed");
            false
        }
    }
}

fn check_signature(
    signature: &Signature,
    digest_hex: &[u8],
    public_key: &AffinePoint,
    curve: &Curve,
) -> Result<bool> {
    let q = curve.q();
    let in_range = |v: &BigInt| !v.is_zero() && !v.is_negative() && v < q;
    let (r, s) = (signature.r(), signature.s());
    if !in_range(r) || !in_range(s) {
        debug!("signature component out of range");
        return Ok(false);
    }
    if public_key.is_identity() || !curve.contains(public_key) {
        debug!("invalid public key");
        return Ok(false);
    }

    let e = digest_to_scalar(digest_hex, curve)?;
    let w = s.invmod(q)?;
    let u1 = e.mulmod(&w, q)?;
    let u2 = r.mulmod(&w, q)?;
    let point = curve.shamirs_trick(curve.generator_affine(), &u1, public_key, &u2)?;
    Ok(point.x_or_zero().modulo(q)? == *r)
}

/// Parse a hex digest, keeping its leftmost `⌈log₂ q⌉` bits.
fn digest_to_scalar(digest_hex: &[u8], curve: &Curve) -> Result<BigInt> {
    let hex = core::str::from_utf8(digest_hex).map_err(|_| BigIntError::InvalidArgument)?;
    if hex.starts_with('-') {
        return Err(BigIntError::InvalidArgument.into());
    }
    let e = BigInt::from_radix(hex, 16)?;

    let digest_bits = 4 * digest_hex.len();
    let order_bits = curve.order_bits();
    if digest_bits > order_bits {
        Ok(e.div_2d(digest_bits - order_bits).0)
    } else {
        Ok(e)
    }
}

/// ECDSA private key bound to a curve, hashing messages with SHA-256 unless
/// told otherwise.
///
/// The private scalar is zeroized on drop.
#[cfg(feature = "sha256")]
#[derive(Clone)]
pub struct SigningKey<'c> {
    d: BigInt,
    verifying_key: VerifyingKey<'c>,
}

#[cfg(feature = "sha256")]
impl<'c> SigningKey<'c> {
    /// Signing key for private scalar `d`, which must lie in `[1, q)`.
    pub fn new(d: BigInt, curve: &'c Curve) -> Result<Self> {
        if d.is_zero() || d.is_negative() || d >= *curve.q() {
            return Err(BigIntError::InvalidArgument.into());
        }
        let public = Point::from_affine(keys::public_key(&d, curve)?, curve);
        Ok(Self {
            d,
            verifying_key: VerifyingKey { point: public },
        })
    }

    /// Generate a random signing key.
    pub fn random<R: RandomSource + ?Sized>(curve: &'c Curve, rng: &mut R) -> Result<Self> {
        Self::new(keys::random_scalar(curve, rng)?, curve)
    }

    /// Private scalar.
    pub fn as_scalar(&self) -> &BigInt {
        &self.d
    }

    /// Matching verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey<'c> {
        &self.verifying_key
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.verifying_key.point.curve()
    }

    /// Sign the SHA-256 hash of `msg` with nonce `k` in `[1, q)`.
    ///
    /// `k` is lifted to `k + q` or `k + 2q`, whichever is one bit longer than
    /// `q`, so that the scalar multiplication always runs the same number of
    /// steps. The signature is unchanged by this.
    pub fn sign_with_nonce(&self, msg: &[u8], k: &BigInt) -> Result<Signature> {
        self.sign_digest_with_nonce::<Sha256>(msg, k)
    }

    /// Sign the SHA-256 hash of `msg` with a fresh random nonce.
    pub fn sign_with_rng<R: RandomSource + ?Sized>(
        &self,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Signature> {
        let k = keys::random_scalar(self.curve(), rng)?;
        self.sign_with_nonce(msg, &k)
    }

    /// Sign the `D` hash of `msg` with nonce `k` in `[1, q)`.
    pub fn sign_digest_with_nonce<D: Digest>(&self, msg: &[u8], k: &BigInt) -> Result<Signature> {
        let curve = self.curve();
        let k = fixed_length_nonce(k, curve.q())?;
        let digest = hex::encode(D::digest(msg));
        sign_prehashed(digest.as_bytes(), &self.d, &k, curve)
    }
}

#[cfg(feature = "sha256")]
impl fmt::Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "sha256")]
impl Drop for SigningKey<'_> {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

#[cfg(feature = "sha256")]
impl ZeroizeOnDrop for SigningKey<'_> {}

/// `k + q` or `k + 2q`, whichever has bit length `⌈log₂ q⌉ + 1`.
#[cfg(feature = "sha256")]
fn fixed_length_nonce(k: &BigInt, q: &BigInt) -> Result<BigInt> {
    let once = k.add(q)?;
    if once.count_bits() == q.count_bits() {
        Ok(once.add(q)?)
    } else {
        Ok(once)
    }
}

/// ECDSA public key bound to a curve.
#[cfg(feature = "sha256")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'c> {
    point: Point<'c>,
}

#[cfg(feature = "sha256")]
impl<'c> VerifyingKey<'c> {
    /// Verifying key for `point`, which must be a finite point of `curve`.
    pub fn from_affine(point: AffinePoint, curve: &'c Curve) -> Result<Self> {
        let point = Point::from_affine(point, curve);
        if point.is_identity() || !point.is_on_curve() {
            return Err(Error::PointNotOnCurve);
        }
        Ok(Self { point })
    }

    /// Public point.
    pub fn as_point(&self) -> &Point<'c> {
        &self.point
    }

    /// Verify `signature` over the SHA-256 hash of `msg`.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_digest::<Sha256>(msg, signature)
    }

    /// Verify `signature` over the `D` hash of `msg`.
    pub fn verify_digest<D: Digest>(&self, msg: &[u8], signature: &Signature) -> bool {
        let digest = hex::encode(D::digest(msg));
        verify_prehashed(
            signature,
            digest.as_bytes(),
            &self.point.to_affine(),
            self.point.curve(),
        )
    }
}
