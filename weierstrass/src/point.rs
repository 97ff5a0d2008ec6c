//! Points bound to a curve.

use crate::{AffinePoint, Curve, Error, Result};
use bignum::BigInt;
use core::fmt;

/// Affine point together with the curve it belongs to.
///
/// Binary operations between points of different curves fail with
/// [`Error::CurveMismatch`].
#[derive(Clone, Copy)]
pub struct Point<'c> {
    inner: AffinePoint,
    curve: &'c Curve,
}

impl<'c> Point<'c> {
    /// Point with the given coordinates on `curve`.
    ///
    /// Curve membership is not checked; see [`Point::new_checked`].
    pub fn new(x: BigInt, y: BigInt, curve: &'c Curve) -> Self {
        Self::from_affine(AffinePoint::new(x, y), curve)
    }

    /// Point with the given coordinates on `curve`, or
    /// [`Error::PointNotOnCurve`].
    pub fn new_checked(x: BigInt, y: BigInt, curve: &'c Curve) -> Result<Self> {
        let point = Self::new(x, y, curve);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// The point at infinity of `curve`.
    pub fn identity(curve: &'c Curve) -> Self {
        Self::from_affine(AffinePoint::Identity, curve)
    }

    /// Bind an affine point to `curve`.
    pub fn from_affine(inner: AffinePoint, curve: &'c Curve) -> Self {
        Self { inner, curve }
    }

    /// Affine representation.
    pub fn to_affine(&self) -> AffinePoint {
        self.inner
    }

    /// Affine x-coordinate, if the point is finite.
    pub fn x(&self) -> Option<&BigInt> {
        self.inner.x()
    }

    /// Affine y-coordinate, if the point is finite.
    pub fn y(&self) -> Option<&BigInt> {
        self.inner.y()
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Does this point satisfy its curve's equation?
    pub fn is_on_curve(&self) -> bool {
        self.curve.contains(&self.inner)
    }

    /// `2·self`
    pub fn double(&self) -> Result<Self> {
        Ok(self.with(self.curve.double(&self.inner)?))
    }

    /// `-self`
    pub fn negate(&self) -> Result<Self> {
        Ok(self.with(self.curve.negate(&self.inner)?))
    }

    /// `k·self`
    pub fn mul(&self, k: &BigInt) -> Result<Self> {
        Ok(self.with(self.curve.mul(&self.inner, k)?))
    }

    /// `self + other`, for points on the same curve.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other)?;
        Ok(self.with(self.curve.add(&self.inner, &other.inner)?))
    }

    /// `self - other`, for points on the same curve.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other)?;
        Ok(self.with(self.curve.sub(&self.inner, &other.inner)?))
    }

    /// Coordinate equality, for points on the same curve.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_same_curve(other)?;
        Ok(self.inner == other.inner)
    }

    fn with(&self, inner: AffinePoint) -> Self {
        Self::from_affine(inner, self.curve)
    }

    fn check_same_curve(&self, other: &Self) -> Result<()> {
        if self.curve == other.curve {
            Ok(())
        } else {
            Err(Error::CurveMismatch)
        }
    }
}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("curve", &self.curve.name())
            .field("inner", &self.inner)
            .finish()
    }
}

/// Equal coordinates on equal curves.
impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl Eq for Point<'_> {}

impl From<Point<'_>> for AffinePoint {
    fn from(point: Point<'_>) -> AffinePoint {
        point.inner
    }
}

/// Coordinate equality, ignoring the curves the points are bound to.
pub fn point_equal(lhs: &Point<'_>, rhs: &Point<'_>) -> bool {
    lhs.inner == rhs.inner
}

/// Curve parameter equality.
pub fn curve_equal(lhs: &Curve, rhs: &Curve) -> bool {
    lhs == rhs
}

/// Does `point` satisfy the equation of `curve`?
pub fn point_in_curve(point: &Point<'_>, curve: &Curve) -> bool {
    curve.contains(&point.inner)
}

/// `2·point` on `curve`.
pub fn point_double<'c>(point: &Point<'_>, curve: &'c Curve) -> Result<Point<'c>> {
    Ok(Point::from_affine(curve.double(&point.inner)?, curve))
}

/// `lhs + rhs` on `curve`.
pub fn point_add<'c>(lhs: &Point<'_>, rhs: &Point<'_>, curve: &'c Curve) -> Result<Point<'c>> {
    Ok(Point::from_affine(curve.add(&lhs.inner, &rhs.inner)?, curve))
}

/// `lhs - rhs` on `curve`.
pub fn point_sub<'c>(lhs: &Point<'_>, rhs: &Point<'_>, curve: &'c Curve) -> Result<Point<'c>> {
    Ok(Point::from_affine(curve.sub(&lhs.inner, &rhs.inner)?, curve))
}

/// `k·point` on `curve`.
pub fn point_mul<'c>(point: &Point<'_>, k: &BigInt, curve: &'c Curve) -> Result<Point<'c>> {
    Ok(Point::from_affine(curve.mul(&point.inner, k)?, curve))
}

/// `-point` on `curve`.
pub fn point_negate<'c>(point: &Point<'_>, curve: &'c Curve) -> Result<Point<'c>> {
    Ok(Point::from_affine(curve.negate(&point.inner)?, curve))
}

/// `s1·p1 + s2·p2` on `curve`, by Shamir's trick.
pub fn shamirs_trick<'c>(
    p1: &Point<'_>,
    s1: &BigInt,
    p2: &Point<'_>,
    s2: &BigInt,
    curve: &'c Curve,
) -> Result<Point<'c>> {
    Ok(Point::from_affine(
        curve.shamirs_trick(&p1.inner, s1, &p2.inner, s2)?,
        curve,
    ))
}
