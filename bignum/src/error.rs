//! Error types.

use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Malformed input: bad digit or radix, division by zero, or an
    /// out-of-range size request.
    InvalidArgument,

    /// Modulus not usable with the requested algorithm (for example an even
    /// modulus passed to Montgomery exponentiation).
    InvalidModulus,

    /// Modular inverse requested for a value sharing a factor with the modulus.
    NotInvertible,

    /// The prime search could not run with the given parameters.
    PrimeGenerationFailed,

    /// A generated prime does not have the requested bit length.
    BitLengthMismatch {
        /// Requested size in bits.
        expected: usize,
        /// Size of the produced value in bits.
        actual: usize,
    },

    /// The randomness source supplied fewer bytes than requested.
    RandomSourceExhausted,

    /// The result does not fit in [`FP_MAX_SIZE`](crate::FP_MAX_SIZE) bits.
    CapacityExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::InvalidModulus => f.write_str("invalid modulus"),
            Error::NotInvertible => f.write_str("value is not invertible"),
            Error::PrimeGenerationFailed => f.write_str("prime generation failed"),
            Error::BitLengthMismatch { expected, actual } => {
                write!(f, "prime is {actual} bits, not {expected} bits")
            }
            Error::RandomSourceExhausted => f.write_str("random source exhausted"),
            Error::CapacityExceeded => f.write_str("integer capacity exceeded"),
        }
    }
}

impl core::error::Error for Error {}
