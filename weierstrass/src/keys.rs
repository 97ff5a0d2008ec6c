//! Key generation.

use crate::{AffinePoint, Curve, Result};
use alloc::vec;
use bignum::{BigInt, RandomSource};
use tracing::trace;
use zeroize::Zeroizing;

/// Uniform scalar in `[1, q)` by rejection sampling.
///
/// Draws as many bytes as `q` occupies, drops the excess low bits so the
/// candidate has the bit length of `q`, and retries on zero or values `≥ q`.
pub fn random_scalar<R: RandomSource + ?Sized>(curve: &Curve, rng: &mut R) -> Result<BigInt> {
    let order_bits = curve.order_bits();
    let order_bytes = order_bits.div_ceil(8);
    let extra_bits = order_bytes * 8 - order_bits;
    let mut buf = Zeroizing::new(vec![0u8; order_bytes]);

    loop {
        rng.fill_exact(&mut buf)?;
        let (candidate, _) = BigInt::from_unsigned_bytes(&buf)?.div_2d(extra_bits);
        if !candidate.is_zero() && candidate < *curve.q() {
            return Ok(candidate);
        }
        trace!("scalar out of range, resampling");
    }
}

/// Public key `d·G`.
pub fn public_key(d: &BigInt, curve: &Curve) -> Result<AffinePoint> {
    curve.mul(curve.generator_affine(), d)
}

/// Fresh `(d, d·G)` key pair.
pub fn generate_keypair<R: RandomSource + ?Sized>(
    curve: &Curve,
    rng: &mut R,
) -> Result<(BigInt, AffinePoint)> {
    let d = random_scalar(curve, rng)?;
    Ok((d, public_key(&d, curve)?))
}
