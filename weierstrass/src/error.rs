//! Error types.

use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Underlying integer arithmetic failed.
    Arithmetic(bignum::Error),

    /// Operands belong to different curves.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// No named curve has the requested object identifier.
    CurveNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic(err) => write!(f, "arithmetic error: {err}"),
            Error::CurveMismatch => f.write_str("points are on different curves"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::CurveNotFound => f.write_str("unknown curve"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<bignum::Error> for Error {
    fn from(err: bignum::Error) -> Self {
        Error::Arithmetic(err)
    }
}
