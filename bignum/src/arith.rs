//! Signed arithmetic: addition, multiplication and long division.

use crate::{
    DIGIT_BIT, Digit, DoubleDigit, Error, FP_SIZE, Result,
    int::{BigInt, Sign},
    utils::{add_assign_digits, cmp_digits, mul_digits, sub_assign_digits, trimmed_len},
};
use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

impl BigInt {
    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if self.sign == rhs.sign {
            return add_mag(self, rhs, self.sign);
        }
        match self.cmp_mag(rhs) {
            Ordering::Less => Ok(sub_mag(rhs, self, rhs.sign)),
            _ => Ok(sub_mag(self, rhs, self.sign)),
        }
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.add(&rhs.neg())
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }
        let mut wide = [0; 2 * FP_SIZE];
        mul_digits(self.digits(), rhs.digits(), &mut wide);
        let sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Self::from_digits(&wide[..self.used + rhs.used], sign)
    }

    /// `self²`.
    pub fn sqr(&self) -> Result<Self> {
        self.mul(self)
    }

    /// Truncating division, returning `(quotient, remainder)` with
    /// `self = quotient * rhs + remainder`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`. Division by zero is [`Error::InvalidArgument`].
    pub fn div(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let (q, r) = divrem_digits(self.digits(), rhs.digits());
        let q_sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Ok((
            Self::from_digits(&q, q_sign)?,
            Self::from_digits(&r, self.sign)?,
        ))
    }

    /// `self mod rhs`, with the result taking the sign of `rhs`.
    ///
    /// For a positive modulus the result lies in `[0, rhs)`.
    pub fn modulo(&self, rhs: &Self) -> Result<Self> {
        let (_, r) = self.div(rhs)?;
        if !r.is_zero() && r.sign != rhs.sign {
            r.add(rhs)
        } else {
            Ok(r)
        }
    }

    /// `self + d`.
    pub fn add_d(&self, d: Digit) -> Result<Self> {
        self.add(&Self::from_u64(d))
    }

    /// `self - d`.
    pub fn sub_d(&self, d: Digit) -> Result<Self> {
        self.sub(&Self::from_u64(d))
    }

    /// `self * d`.
    pub fn mul_d(&self, d: Digit) -> Result<Self> {
        self.mul(&Self::from_u64(d))
    }

    /// Divide by a single digit, returning the truncated quotient and the
    /// remainder of the magnitude.
    pub fn div_d(&self, d: Digit) -> Result<(Self, Digit)> {
        if d == 0 {
            return Err(Error::InvalidArgument);
        }

        let mut q = Self::ZERO;
        let rem = div_digit(self.digits(), d, &mut q.dp);
        q.used = self.used;
        q.sign = self.sign;
        q.clamp_used();
        Ok((q, rem))
    }

    /// Remainder of the magnitude divided by `d`.
    pub fn mod_d(&self, d: Digit) -> Result<Digit> {
        if d == 0 {
            return Err(Error::InvalidArgument);
        }
        let mut rem: DoubleDigit = 0;
        for &x in self.digits().iter().rev() {
            rem = ((rem << DIGIT_BIT) | x as DoubleDigit) % d as DoubleDigit;
        }
        Ok(rem as Digit)
    }
}

/// `|a| + |b|` with the given sign.
fn add_mag(a: &BigInt, b: &BigInt, sign: Sign) -> Result<BigInt> {
    let (long, short) = if a.used >= b.used { (a, b) } else { (b, a) };
    let mut ret = *long;
    let len = (long.used + 1).min(FP_SIZE);
    let carry = add_assign_digits(&mut ret.dp[..len], short.digits());
    if carry != 0 {
        return Err(Error::CapacityExceeded);
    }
    ret.used = trimmed_len(&ret.dp);
    ret.sign = sign;
    ret.clamp_used();
    Ok(ret)
}

/// `|a| - |b|` with the given sign; requires `|a| >= |b|`.
fn sub_mag(a: &BigInt, b: &BigInt, sign: Sign) -> BigInt {
    let mut ret = *a;
    let borrow = sub_assign_digits(&mut ret.dp[..a.used], b.digits());
    debug_assert_eq!(borrow, 0);
    ret.sign = sign;
    ret.clamp_used();
    ret
}

/// Divide a magnitude by a single digit, writing the quotient to `q` and
/// returning the remainder.
fn div_digit(u: &[Digit], d: Digit, q: &mut [Digit]) -> Digit {
    let mut rem: DoubleDigit = 0;
    for (i, &x) in u.iter().enumerate().rev() {
        let cur = (rem << DIGIT_BIT) | x as DoubleDigit;
        q[i] = (cur / d as DoubleDigit) as Digit;
        rem = cur % d as DoubleDigit;
    }
    rem as Digit
}

/// Long division of magnitudes (Knuth, TAOCP vol. 2, 4.3.1 algorithm D).
///
/// Returns `(quotient, remainder)` as little-endian digit vectors; `v` must be
/// non-zero. Operands may be wider than a [`BigInt`].
pub(crate) fn divrem_digits(u: &[Digit], v: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let u = &u[..trimmed_len(u)];
    let v = &v[..trimmed_len(v)];
    debug_assert!(!v.is_empty());

    if cmp_digits(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }

    let n = v.len();
    if n == 1 {
        let mut q = vec![0; u.len()];
        let r = div_digit(u, v[0], &mut q);
        return (q, vec![r]);
    }

    let m = u.len() - n;
    let s = v[n - 1].leading_zeros();
    let vn = shl_digits(v, s, n);
    let mut un = shl_digits(u, s, u.len() + 1);
    let mut q = vec![0; m + 1];

    let base: DoubleDigit = 1 << DIGIT_BIT;
    let mask = Digit::MAX as DoubleDigit;
    let top = vn[n - 1] as DoubleDigit;

    for j in (0..=m).rev() {
        let num = ((un[j + n] as DoubleDigit) << DIGIT_BIT) | un[j + n - 1] as DoubleDigit;
        let mut qhat = num / top;
        let mut rhat = num % top;

        while qhat >= base
            || qhat * vn[n - 2] as DoubleDigit > ((rhat << DIGIT_BIT) | un[j + n - 2] as DoubleDigit)
        {
            qhat -= 1;
            rhat += top;
            if rhat >= base {
                break;
            }
        }

        // multiply and subtract
        let mut k: i128 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as DoubleDigit;
            let t = un[i + j] as i128 - k - (p & mask) as i128;
            un[i + j] = t as Digit;
            k = (p >> DIGIT_BIT) as i128 - (t >> DIGIT_BIT);
        }
        let t = un[j + n] as i128 - k;
        un[j + n] = t as Digit;

        q[j] = qhat as Digit;
        if t < 0 {
            // add back
            q[j] = q[j].wrapping_sub(1);
            let mut carry: DoubleDigit = 0;
            for i in 0..n {
                let t = un[i + j] as DoubleDigit + vn[i] as DoubleDigit + carry;
                un[i + j] = t as Digit;
                carry = t >> DIGIT_BIT;
            }
            un[j + n] = un[j + n].wrapping_add(carry as Digit);
        }
    }

    let r = shr_digits(&un[..n], s);
    (q, r)
}

/// Shift left by `s < DIGIT_BIT` bits into a buffer of `len` digits.
fn shl_digits(a: &[Digit], s: u32, len: usize) -> Vec<Digit> {
    let mut ret = vec![0; len];
    for (i, &d) in a.iter().enumerate() {
        ret[i] |= d << s;
        if s != 0 && i + 1 < len {
            ret[i + 1] = d >> (DIGIT_BIT as u32 - s);
        }
    }
    ret
}

/// Shift right by `s < DIGIT_BIT` bits.
fn shr_digits(a: &[Digit], s: u32) -> Vec<Digit> {
    let mut ret = a.to_vec();
    if s == 0 {
        return ret;
    }
    for i in 0..ret.len() {
        let hi = a.get(i + 1).map_or(0, |&d| d << (DIGIT_BIT as u32 - s));
        ret[i] = (a[i] >> s) | hi;
    }
    ret
}
