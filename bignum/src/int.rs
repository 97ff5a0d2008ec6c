//! Fixed-capacity sign-magnitude integers.

use crate::{
    DIGIT_BIT, Digit, Error, FP_SIZE, Result,
    utils::{cmp_digits, trimmed_len},
};
use core::{cmp::Ordering, fmt};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Sign of a [`BigInt`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Sign {
    /// Zero or greater.
    #[default]
    Positive,
    /// Less than zero.
    Negative,
}

impl Sign {
    pub(crate) fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Sign-magnitude integer of at most [`FP_MAX_SIZE`](crate::FP_MAX_SIZE) bits.
///
/// Digits are stored little-endian. The value is always kept clamped: no
/// digit at or above `used` is non-zero, and zero is positive with
/// `used == 0`. This makes the derived equality and hashing exact.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct BigInt {
    pub(crate) dp: [Digit; FP_SIZE],
    pub(crate) used: usize,
    pub(crate) sign: Sign,
}

impl BigInt {
    /// Zero.
    pub const ZERO: Self = Self {
        dp: [0; FP_SIZE],
        used: 0,
        sign: Sign::Positive,
    };

    /// One.
    pub const ONE: Self = Self::from_u64(1);

    /// Two.
    pub const TWO: Self = Self::from_u64(2);

    /// Create a non-negative value from a single word.
    pub const fn from_u64(n: u64) -> Self {
        let mut dp = [0; FP_SIZE];
        dp[0] = n;
        Self {
            dp,
            used: (n != 0) as usize,
            sign: Sign::Positive,
        }
    }

    /// Decode a big-endian byte array at compile time.
    ///
    /// Intended for constants such as curve parameters; the array length is
    /// checked against the capacity when the function is instantiated.
    pub const fn from_be_array<const N: usize>(bytes: &[u8; N]) -> Self {
        const { assert!(N <= FP_SIZE * 8, "array exceeds BigInt capacity") };

        let mut dp = [0; FP_SIZE];
        let mut i = 0;
        while i < N {
            dp[i / 8] |= (bytes[N - 1 - i] as Digit) << ((i % 8) * 8);
            i += 1;
        }

        let mut used = N.div_ceil(8);
        while used > 0 && dp[used - 1] == 0 {
            used -= 1;
        }

        Self {
            dp,
            used,
            sign: Sign::Positive,
        }
    }

    /// Build a value from little-endian digits.
    pub fn from_digits(digits: &[Digit], sign: Sign) -> Result<Self> {
        let len = trimmed_len(digits);
        if len > FP_SIZE {
            return Err(Error::CapacityExceeded);
        }

        let mut ret = Self::ZERO;
        ret.dp[..len].copy_from_slice(&digits[..len]);
        ret.used = len;
        ret.sign = sign;
        ret.clamp_used();
        Ok(ret)
    }

    /// `2^b`.
    pub fn power_of_two(b: usize) -> Result<Self> {
        if b >= FP_SIZE * DIGIT_BIT {
            return Err(Error::CapacityExceeded);
        }
        let mut ret = Self::ZERO;
        ret.dp[b / DIGIT_BIT] = 1 << (b % DIGIT_BIT);
        ret.used = b / DIGIT_BIT + 1;
        Ok(ret)
    }

    /// Restore the clamped form after the digits were modified.
    pub(crate) fn clamp_used(&mut self) {
        while self.used > 0 && self.dp[self.used - 1] == 0 {
            self.used -= 1;
        }
        if self.used == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Significant digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.dp[..self.used]
    }

    /// Number of significant digits.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Sign of the value.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    /// Is this value less than zero?
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Is the magnitude even?
    pub fn is_even(&self) -> bool {
        self.used == 0 || self.dp[0] & 1 == 0
    }

    /// Is the magnitude odd?
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Number of bits in the magnitude; zero has no bits.
    pub fn count_bits(&self) -> usize {
        match self.used {
            0 => 0,
            n => n * DIGIT_BIT - self.dp[n - 1].leading_zeros() as usize,
        }
    }

    /// Number of trailing zero bits of the magnitude; zero for zero.
    pub fn cnt_lsb(&self) -> usize {
        self.digits()
            .iter()
            .position(|&d| d != 0)
            .map_or(0, |i| i * DIGIT_BIT + self.dp[i].trailing_zeros() as usize)
    }

    /// Value of bit `i` of the magnitude.
    pub fn test_bit(&self, i: usize) -> bool {
        let digit = i / DIGIT_BIT;
        digit < self.used && (self.dp[digit] >> (i % DIGIT_BIT)) & 1 == 1
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        let mut ret = *self;
        if !ret.is_zero() {
            ret.sign = ret.sign.flip();
        }
        ret
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut ret = *self;
        ret.sign = Sign::Positive;
        ret
    }

    /// Compare magnitudes, ignoring signs.
    pub fn cmp_mag(&self, other: &Self) -> Ordering {
        cmp_digits(self.digits(), other.digits())
    }

    /// Compare against a single digit.
    pub fn cmp_d(&self, d: Digit) -> Ordering {
        if self.is_negative() {
            return Ordering::Less;
        }
        match self.used {
            0 => 0.cmp(&d),
            1 => self.dp[0].cmp(&d),
            _ => Ordering::Greater,
        }
    }

    /// Multiply by `2^b`.
    pub fn mul_2d(&self, b: usize) -> Result<Self> {
        if self.is_zero() {
            return Ok(*self);
        }
        if self.count_bits() + b > FP_SIZE * DIGIT_BIT {
            return Err(Error::CapacityExceeded);
        }

        let (words, bits) = (b / DIGIT_BIT, b % DIGIT_BIT);
        let mut ret = Self::ZERO;
        for (i, &d) in self.digits().iter().enumerate() {
            ret.dp[i + words] |= d << bits;
            if bits != 0 && i + words + 1 < FP_SIZE {
                ret.dp[i + words + 1] = d >> (DIGIT_BIT - bits);
            }
        }
        ret.used = (self.used + words + 1).min(FP_SIZE);
        ret.sign = self.sign;
        ret.clamp_used();
        Ok(ret)
    }

    /// Divide by `2^b`, returning the truncated quotient and the remainder.
    ///
    /// Both results carry the sign of `self`.
    pub fn div_2d(&self, b: usize) -> (Self, Self) {
        (self.shr_mag(b), self.mod_2d(b))
    }

    /// `self mod 2^b`, keeping the sign of `self`.
    pub fn mod_2d(&self, b: usize) -> Self {
        if b >= self.used * DIGIT_BIT {
            return *self;
        }
        let mut ret = *self;
        let (words, bits) = (b / DIGIT_BIT, b % DIGIT_BIT);
        ret.dp[words] &= (1 << bits) - 1;
        for d in &mut ret.dp[words + 1..] {
            *d = 0;
        }
        ret.clamp_used();
        ret
    }

    /// Multiply by two.
    pub fn mul_2(&self) -> Result<Self> {
        self.mul_2d(1)
    }

    /// Divide by two, truncating toward zero.
    pub fn div_2(&self) -> Self {
        self.shr_mag(1)
    }

    /// Shift the magnitude right by `b` bits, keeping the sign.
    pub(crate) fn shr_mag(&self, b: usize) -> Self {
        let (words, bits) = (b / DIGIT_BIT, b % DIGIT_BIT);
        if words >= self.used {
            return Self::ZERO;
        }

        let mut ret = Self::ZERO;
        let len = self.used - words;
        for i in 0..len {
            let lo = self.dp[i + words] >> bits;
            let hi = match (bits, self.dp.get(i + words + 1)) {
                (0, _) | (_, None) => 0,
                (_, Some(&next)) => next << (DIGIT_BIT - bits),
            };
            ret.dp[i] = lo | hi;
        }
        ret.used = len;
        ret.sign = self.sign;
        ret.clamp_used();
        ret
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_mag(other),
            (Sign::Negative, Sign::Negative) => other.cmp_mag(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        let ret = Self::from_u64(n.unsigned_abs());
        if n < 0 { ret.neg() } else { ret }
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl ConditionallySelectable for BigInt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut dp = [0; FP_SIZE];
        for (i, d) in dp.iter_mut().enumerate() {
            *d = Digit::conditional_select(&a.dp[i], &b.dp[i], choice);
        }

        let used = u64::conditional_select(&(a.used as u64), &(b.used as u64), choice) as usize;
        let negative = u8::conditional_select(
            &(a.is_negative() as u8),
            &(b.is_negative() as u8),
            choice,
        );

        Self {
            dp,
            used,
            sign: if negative == 1 {
                Sign::Negative
            } else {
                Sign::Positive
            },
        }
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = (self.used as u64).ct_eq(&(other.used as u64))
            & (self.is_negative() as u8).ct_eq(&(other.is_negative() as u8));
        for (a, b) in self.dp.iter().zip(other.dp.iter()) {
            acc &= a.ct_eq(b);
        }
        acc
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.dp.zeroize();
        self.used.zeroize();
        self.sign = Sign::Positive;
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt(0x{self:x})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn zero_is_clamped_positive() {
        let z = BigInt::from(-5i64).add(&BigInt::from(5u64)).unwrap();
        assert_eq!(z, BigInt::ZERO);
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z.used(), 0);
        assert_eq!(BigInt::ZERO.neg(), BigInt::ZERO);
    }

    #[test]
    fn leading_zero_digits_are_trimmed() {
        let mut x = BigInt::from(7u64);
        x.used = 3;
        x.clamp_used();
        assert_eq!(x.used(), 1);
        assert_eq!(x.digits(), &[7]);

        let parsed = BigInt::from_radix("000000000000000000000000000000ff", 16).unwrap();
        assert_eq!(parsed.used(), 1);
        assert_eq!(parsed, BigInt::from(255u64));

        // `Ord::clamp` stays reachable on values
        let lo = BigInt::from(10u64);
        let hi = BigInt::from(20u64);
        assert_eq!(BigInt::from(25u64).clamp(lo, hi), hi);
        assert_eq!(BigInt::from(-3i64).clamp(lo, hi), lo);
    }

    #[test]
    fn bit_queries() {
        let x = BigInt::from_be_array(&hex!("0100000000000000000000000000000080"));
        assert_eq!(x.count_bits(), 129);
        assert_eq!(x.cnt_lsb(), 7);
        assert!(x.test_bit(128));
        assert!(!x.test_bit(127));
        assert!(!x.test_bit(10_000));
        assert_eq!(BigInt::ZERO.count_bits(), 0);
        assert_eq!(BigInt::ZERO.cnt_lsb(), 0);
    }

    #[test]
    fn ordering_respects_sign() {
        let a = BigInt::from(-10i64);
        let b = BigInt::from(-3i64);
        let c = BigInt::from(2u64);
        assert!(a < b && b < c);
        assert_eq!(a.cmp_mag(&c), Ordering::Greater);
        assert_eq!(c.cmp_d(2), Ordering::Equal);
        assert_eq!(a.cmp_d(0), Ordering::Less);
    }

    #[test]
    fn shifts() {
        let x = BigInt::from(0xdead_beefu64);
        let y = x.mul_2d(100).unwrap();
        assert_eq!(y.count_bits(), 132);
        let (q, r) = y.add(&BigInt::from(5u64)).unwrap().div_2d(100);
        assert_eq!(q, x);
        assert_eq!(r, BigInt::from(5u64));
        assert_eq!(BigInt::from(-7i64).div_2(), BigInt::from(-3i64));
        assert_eq!(
            BigInt::ONE.mul_2d(FP_SIZE * DIGIT_BIT),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(BigInt::power_of_two(64).unwrap(), BigInt::ONE.mul_2d(64).unwrap());
    }

    #[test]
    fn conditional_select() {
        let a = BigInt::from(-1234i64);
        let b = BigInt::from(u64::MAX).mul_2d(70).unwrap();
        assert_eq!(BigInt::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(BigInt::conditional_select(&a, &b, Choice::from(1)), b);
        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
    }
}
