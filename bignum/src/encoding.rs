//! String and byte encodings.

use crate::{
    DIGIT_BIT, Digit, DoubleDigit, Error, FP_SIZE, Result,
    int::{BigInt, Sign},
    utils::trimmed_len,
};
use alloc::{string::String, vec, vec::Vec};
use core::{fmt, str::FromStr};

/// Digit alphabet for radix 2 to 64.
const RADIX_MAP: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

const BYTES_PER_DIGIT: usize = DIGIT_BIT / 8;

fn check_radix(radix: u32) -> Result<Digit> {
    match radix {
        2..=64 => Ok(radix.into()),
        _ => Err(Error::InvalidArgument),
    }
}

fn digit_value(c: u8, radix: Digit) -> Result<Digit> {
    let c = if radix <= 36 { c.to_ascii_uppercase() } else { c };
    RADIX_MAP
        .iter()
        .position(|&m| m == c)
        .map(|v| v as Digit)
        .filter(|&v| v < radix)
        .ok_or(Error::InvalidArgument)
}

impl BigInt {
    /// Parse a string in the given radix (2 to 64).
    ///
    /// A leading `-` marks a negative value. Letters are case-insensitive up
    /// to radix 36; above that the alphabet `0-9A-Za-z+/` is used verbatim.
    pub fn from_radix(s: &str, radix: u32) -> Result<Self> {
        let radix = check_radix(radix)?;
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if body.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let mut ret = Self::ZERO;
        for c in body.bytes() {
            ret = ret.mul_d(radix)?.add_d(digit_value(c, radix)?)?;
        }
        ret.sign = sign;
        ret.clamp_used();
        Ok(ret)
    }

    /// Format in the given radix (2 to 64), with a leading `-` when negative.
    ///
    /// Letters are upper case; use [`fmt::LowerHex`] for lower-case hex.
    pub fn to_radix(&self, radix: u32) -> Result<String> {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&self.magnitude_radix(check_radix(radix)?));
        Ok(s)
    }

    fn magnitude_radix(&self, radix: Digit) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut digits = Vec::new();
        let mut n = self.abs();
        while !n.is_zero() {
            let mut q = Self::ZERO;
            let mut rem: DoubleDigit = 0;
            for i in (0..n.used).rev() {
                let cur = (rem << DIGIT_BIT) | n.dp[i] as DoubleDigit;
                q.dp[i] = (cur / radix as DoubleDigit) as Digit;
                rem = cur % radix as DoubleDigit;
            }
            q.used = n.used;
            q.clamp_used();
            digits.push(RADIX_MAP[rem as usize]);
            n = q;
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }

    /// Decode an unsigned big-endian byte buffer.
    pub fn from_unsigned_bytes(bytes: &[u8]) -> Result<Self> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let bytes = &bytes[start..];
        if bytes.len() > FP_SIZE * BYTES_PER_DIGIT {
            return Err(Error::CapacityExceeded);
        }

        let mut ret = Self::ZERO;
        for (i, chunk) in bytes.rchunks(BYTES_PER_DIGIT).enumerate() {
            let mut word = [0u8; BYTES_PER_DIGIT];
            word[BYTES_PER_DIGIT - chunk.len()..].copy_from_slice(chunk);
            ret.dp[i] = Digit::from_be_bytes(word);
        }
        ret.used = trimmed_len(&ret.dp);
        Ok(ret)
    }

    /// Number of bytes in the unsigned encoding.
    pub fn unsigned_bin_size(&self) -> usize {
        self.count_bits().div_ceil(8)
    }

    /// Encode the magnitude as minimal big-endian bytes; zero is empty.
    pub fn to_unsigned_bytes(&self) -> Vec<u8> {
        let mut out = vec![0; self.unsigned_bin_size()];
        self.write_unsigned_bytes(&mut out);
        out
    }

    /// Encode the magnitude as big-endian bytes left-padded to `len`.
    pub fn to_unsigned_bytes_padded(&self, len: usize) -> Result<Vec<u8>> {
        if len < self.unsigned_bin_size() {
            return Err(Error::InvalidArgument);
        }
        let mut out = vec![0; len];
        self.write_unsigned_bytes(&mut out);
        Ok(out)
    }

    /// Writes the magnitude into the tail of `out`, which must be large enough.
    fn write_unsigned_bytes(&self, out: &mut [u8]) {
        let size = self.unsigned_bin_size();
        let offset = out.len() - size;
        for (i, byte) in out[offset..].iter_mut().rev().enumerate() {
            *byte = (self.dp[i / BYTES_PER_DIGIT] >> (8 * (i % BYTES_PER_DIGIT))) as u8;
        }
    }

    /// Decode the signed form: one sign byte (non-zero for negative)
    /// followed by the unsigned magnitude.
    pub fn from_signed_bytes(bytes: &[u8]) -> Result<Self> {
        let (&sign, magnitude) = bytes.split_first().ok_or(Error::InvalidArgument)?;
        let ret = Self::from_unsigned_bytes(magnitude)?;
        Ok(if sign != 0 { ret.neg() } else { ret })
    }

    /// Number of bytes in the signed encoding.
    pub fn signed_bin_size(&self) -> usize {
        1 + self.unsigned_bin_size()
    }

    /// Encode as a sign byte (`0` or `1`) followed by the magnitude.
    pub fn to_signed_bytes(&self) -> Vec<u8> {
        let mut out = vec![0; self.signed_bin_size()];
        out[0] = self.is_negative() as u8;
        self.write_unsigned_bytes(&mut out[1..]);
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_radix(10))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_radix(16).to_ascii_lowercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_radix(16))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_radix(s, 10)
    }
}
