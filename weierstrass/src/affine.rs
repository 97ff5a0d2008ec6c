//! Affine curve points.

use bignum::BigInt;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// The curve itself is not part of the value; arithmetic is performed
/// through a [`Curve`](crate::Curve), or through a [`Point`](crate::Point)
/// that carries one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Point with coordinates `(x, y)`.
    Finite {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self::Identity;

    /// Point with the given coordinates; no curve membership check is made.
    pub const fn new(x: BigInt, y: BigInt) -> Self {
        Self::Finite { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Affine x-coordinate, if the point is finite.
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Finite { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, if the point is finite.
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Finite { y, .. } => Some(y),
        }
    }

    /// x-coordinate with the identity read as zero.
    pub(crate) fn x_or_zero(&self) -> BigInt {
        self.x().copied().unwrap_or(BigInt::ZERO)
    }
}
