//! Curve parameters and the built-in named curves.

mod nistp256;
mod nistp384;
mod secp256k1;

pub use self::{nistp256::NIST_P256, nistp384::NIST_P384, secp256k1::SECP256K1};

use crate::{AffinePoint, Error, Point, Result};
use alloc::borrow::Cow;
use bignum::BigInt;

/// All named curves, searched by [`Curve::from_oid`].
pub static NAMED_CURVES: [&Curve; 3] = [&NIST_P256, &NIST_P384, &SECP256K1];

/// Short Weierstrass curve `y² = x³ + a·x + b (mod p)` with a base point of
/// prime order `q`.
///
/// The name and object identifier are descriptive only and take no part in
/// arithmetic or equality.
#[derive(Clone, Debug)]
pub struct Curve {
    pub(crate) p: BigInt,
    pub(crate) a: BigInt,
    pub(crate) b: BigInt,
    pub(crate) q: BigInt,
    pub(crate) g: AffinePoint,
    pub(crate) name: Cow<'static, str>,
    pub(crate) oid: Cow<'static, [u8]>,
}

impl Curve {
    /// Build a curve from its parameters.
    ///
    /// No validation is performed; use [`Curve::contains`] to check that the
    /// base point lies on the curve.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: BigInt,
        a: BigInt,
        b: BigInt,
        q: BigInt,
        gx: BigInt,
        gy: BigInt,
        name: impl Into<Cow<'static, str>>,
        oid: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        Self {
            p,
            a,
            b,
            q,
            g: AffinePoint::new(gx, gy),
            name: name.into(),
            oid: oid.into(),
        }
    }

    /// Look up a named curve by its DER-encoded object identifier body.
    pub fn from_oid(oid: &[u8]) -> Result<&'static Curve> {
        NAMED_CURVES
            .iter()
            .copied()
            .find(|curve| curve.oid.as_ref() == oid)
            .ok_or(Error::CurveNotFound)
    }

    /// Field prime `p`.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Equation coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Equation coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Order `q` of the base point.
    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// Base point `G` in affine coordinates.
    pub fn generator_affine(&self) -> &AffinePoint {
        &self.g
    }

    /// Base point `G` bound to this curve.
    pub fn generator(&self) -> Point<'_> {
        Point::from_affine(self.g, self)
    }

    /// Human readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object identifier bytes.
    pub fn oid(&self) -> &[u8] {
        &self.oid
    }

    /// Bit length of the group order.
    pub fn order_bits(&self) -> usize {
        self.q.count_bits()
    }
}

/// Equality of `(p, a, b, q, G)`.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
            && self.a == other.a
            && self.b == other.b
            && self.q == other.q
            && self.g == other.g
    }
}

impl Eq for Curve {}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn named_curves_are_consistent() {
        for curve in NAMED_CURVES {
            assert!(curve.contains(curve.generator_affine()), "{}", curve.name());
            let order_g = curve.mul(curve.generator_affine(), curve.q()).unwrap();
            assert!(order_g.is_identity(), "{}", curve.name());
        }
    }

    #[test]
    fn lookup_by_oid() {
        assert_eq!(
            Curve::from_oid(&hex!("2A8648CE3D030107")).unwrap().name(),
            "P256"
        );
        assert_eq!(Curve::from_oid(&hex!("2B81040022")).unwrap(), &NIST_P384);
        assert_eq!(Curve::from_oid(&hex!("2B8104000A")).unwrap(), &SECP256K1);
        assert_eq!(Curve::from_oid(&hex!("2B8104")), Err(Error::CurveNotFound));
    }

    #[test]
    fn equality_ignores_labels() {
        let renamed = Curve::new(
            *NIST_P256.p(),
            *NIST_P256.a(),
            *NIST_P256.b(),
            *NIST_P256.q(),
            *NIST_P256.generator_affine().x().unwrap(),
            *NIST_P256.generator_affine().y().unwrap(),
            "prime256v1",
            alloc::vec::Vec::<u8>::new(),
        );
        assert_eq!(renamed, NIST_P256);
        assert_ne!(NIST_P256, SECP256K1);
    }
}
