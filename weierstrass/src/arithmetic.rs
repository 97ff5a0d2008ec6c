//! Affine group law.
//!
//! Every operation reduces its result modulo `p`. Slopes are computed with
//! a modular inverse, so each addition or doubling costs one inversion.

use crate::{AffinePoint, Curve, Result};
use bignum::{BigInt, Error as BigIntError};
use subtle::{Choice, ConditionallySelectable};
use tracing::trace;

impl Curve {
    /// Does `point` satisfy the curve equation? The identity always does.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => true,
            AffinePoint::Finite { x, y } => {
                matches!(self.equation_residue(x, y), Ok(r) if r.is_zero())
            }
        }
    }

    /// `(y² - x³ - a·x - b) mod p`
    fn equation_residue(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        let p = &self.p;
        let lhs = y.sqrmod(p)?;
        let rhs = x
            .sqrmod(p)?
            .add(&self.a)?
            .mulmod(x, p)?
            .add(&self.b)?;
        Ok(lhs.submod(&rhs, p)?)
    }

    /// Additive inverse `(x, -y mod p)`.
    pub fn negate(&self, point: &AffinePoint) -> Result<AffinePoint> {
        match point {
            AffinePoint::Identity => Ok(AffinePoint::Identity),
            AffinePoint::Finite { x, y } => Ok(AffinePoint::new(*x, y.neg().modulo(&self.p)?)),
        }
    }

    /// Point doubling.
    ///
    /// A point with `y ≡ 0 (mod p)` has a vertical tangent and doubles to the
    /// identity.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        let (x, y) = match point {
            AffinePoint::Identity => return Ok(AffinePoint::Identity),
            AffinePoint::Finite { x, y } => (x, y),
        };
        let p = &self.p;

        let inv = match y.mul_2()?.invmod(p) {
            Ok(inv) => inv,
            Err(BigIntError::NotInvertible) => {
                trace!("vertical tangent, doubling to identity");
                return Ok(AffinePoint::Identity);
            }
            Err(err) => return Err(err.into()),
        };

        // λ = (3x² + a) / 2y
        let lambda = x.sqrmod(p)?.mul_d(3)?.add(&self.a)?.mulmod(&inv, p)?;
        let x3 = lambda.sqrmod(p)?.sub(x)?.sub(x)?.modulo(p)?;
        let y3 = lambda.mulmod(&x.sub(&x3)?, p)?.submod(y, p)?;
        Ok(AffinePoint::new(x3, y3))
    }

    /// Point addition.
    ///
    /// Equal operands are doubled and mutual negatives sum to the identity.
    /// Any other pair with equal x-coordinates modulo `p` means the inputs
    /// are not on this curve, and fails with
    /// [`bignum::Error::NotInvertible`].
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
            (AffinePoint::Identity, other) | (other, AffinePoint::Identity) => return Ok(*other),
            _ if lhs == rhs => return self.double(lhs),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };
        let p = &self.p;

        if x1 == x2 && y1.addmod(y2, p)?.is_zero() {
            return Ok(AffinePoint::Identity);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let inv = x2.sub(x1)?.invmod(p)?;
        let lambda = y2.sub(y1)?.mulmod(&inv, p)?;
        let x3 = lambda.sqrmod(p)?.sub(x1)?.sub(x2)?.modulo(p)?;
        let y3 = lambda.mulmod(&x1.sub(&x3)?, p)?.submod(y1, p)?;
        Ok(AffinePoint::new(x3, y3))
    }

    /// `lhs - rhs`
    pub fn sub(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        self.add(lhs, &self.negate(rhs)?)
    }

    /// Scalar multiplication `k·P` with a Montgomery ladder.
    ///
    /// A negative scalar multiplies the negated point by `|k|`.
    pub fn mul(&self, point: &AffinePoint, k: &BigInt) -> Result<AffinePoint> {
        if point.is_identity() || k.is_zero() {
            return Ok(AffinePoint::Identity);
        }
        if *k == BigInt::TWO {
            return self.double(point);
        }

        let (point, k) = if k.is_negative() {
            (self.negate(point)?, k.neg())
        } else {
            (*point, *k)
        };

        // invariant: r1 = r0 + P
        let mut r0 = point;
        let mut r1 = self.double(&point)?;
        for i in (0..k.count_bits() - 1).rev() {
            let bit = Choice::from(k.test_bit(i) as u8);
            AffinePoint::conditional_swap(&mut r0, &mut r1, bit);
            r1 = self.add(&r0, &r1)?;
            r0 = self.double(&r0)?;
            AffinePoint::conditional_swap(&mut r0, &mut r1, bit);
        }
        Ok(r0)
    }

    /// Dual scalar multiplication `s1·P1 + s2·P2` by Shamir's trick.
    ///
    /// Both scalars are scanned together from the most significant bit with
    /// one doubling per bit and at most one addition of `P1`, `P2` or the
    /// precomputed `P1 + P2`.
    pub fn shamirs_trick(
        &self,
        p1: &AffinePoint,
        s1: &BigInt,
        p2: &AffinePoint,
        s2: &BigInt,
    ) -> Result<AffinePoint> {
        let (p1, s1) = self.absorb_sign(p1, s1)?;
        let (p2, s2) = self.absorb_sign(p2, s2)?;

        let bits = s1.count_bits().max(s2.count_bits());
        if bits == 0 {
            return Ok(AffinePoint::Identity);
        }

        let sum = self.add(&p1, &p2)?;
        let addend = |i: usize| match (s1.test_bit(i), s2.test_bit(i)) {
            (true, true) => Some(&sum),
            (true, false) => Some(&p1),
            (false, true) => Some(&p2),
            (false, false) => None,
        };

        let mut acc = addend(bits - 1).copied().unwrap_or_default();
        for i in (0..bits - 1).rev() {
            acc = self.double(&acc)?;
            if let Some(q) = addend(i) {
                acc = self.add(&acc, q)?;
            }
        }
        Ok(acc)
    }

    /// Rewrite `k·P` with `k < 0` as `|k|·(-P)`.
    fn absorb_sign(&self, point: &AffinePoint, k: &BigInt) -> Result<(AffinePoint, BigInt)> {
        if k.is_negative() {
            Ok((self.negate(point)?, k.neg()))
        } else {
            Ok((*point, *k))
        }
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let (ax, ay, a_inf) = a.to_parts();
        let (bx, by, b_inf) = b.to_parts();
        let x = BigInt::conditional_select(&ax, &bx, choice);
        let y = BigInt::conditional_select(&ay, &by, choice);
        match u8::conditional_select(&a_inf, &b_inf, choice) {
            0 => Self::Finite { x, y },
            _ => Self::Identity,
        }
    }
}

impl AffinePoint {
    fn to_parts(self) -> (BigInt, BigInt, u8) {
        match self {
            Self::Identity => (BigInt::ZERO, BigInt::ZERO, 1),
            Self::Finite { x, y } => (x, y, 0),
        }
    }
}
