//! ECDSA signature values.

use crate::Result;
use alloc::vec::Vec;
use bignum::BigInt;

/// ECDSA signature `(r, s)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Signature from its two components.
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    /// Signature from big-endian encodings of `r` and `s`.
    pub fn from_bytes(r: &[u8], s: &[u8]) -> Result<Self> {
        Ok(Self::new(
            BigInt::from_unsigned_bytes(r)?,
            BigInt::from_unsigned_bytes(s)?,
        ))
    }

    /// `r` component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// `s` component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Fixed-width `r ‖ s` encoding with each half padded to `len` bytes.
    pub fn to_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut out = self.r.to_unsigned_bytes_padded(len)?;
        out.extend(self.s.to_unsigned_bytes_padded(len)?);
        Ok(out)
    }

    /// Split into `(r, s)`.
    pub fn split(self) -> (BigInt, BigInt) {
        (self.r, self.s)
    }
}
