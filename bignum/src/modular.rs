//! Modular arithmetic over [`BigInt`].

use crate::{
    Digit, Error, Result,
    arith::divrem_digits,
    int::{BigInt, Sign},
    utils::mul_digits,
};
use alloc::vec;

/// How [`BigInt::pow_mod`] treats an even modulus.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EvenModulus {
    /// Fail with [`Error::InvalidModulus`].
    #[default]
    Reject,
    /// Fall back to [`BigInt::pow3`].
    Fallback,
}

impl BigInt {
    /// `(self + rhs) mod m`.
    pub fn addmod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        self.add(rhs)?.modulo(m)
    }

    /// `(self - rhs) mod m`.
    pub fn submod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        self.sub(rhs)?.modulo(m)
    }

    /// `(self * rhs) mod m`.
    ///
    /// The product is formed at double width, so only the reduced result
    /// has to fit.
    pub fn mulmod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        if m.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let mut wide = vec![0; self.used + rhs.used + 1];
        mul_digits(self.digits(), rhs.digits(), &mut wide);
        let sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        reduce_digits(&wide, sign, m)
    }

    /// `self² mod m`.
    pub fn sqrmod(&self, m: &Self) -> Result<Self> {
        self.mulmod(self, m)
    }

    /// Modular inverse by the extended Euclidean algorithm.
    ///
    /// Returns the unique `c` in `[0, m)` with `self * c ≡ 1 (mod m)`. The
    /// modulus must be positive; a value sharing a factor with `m` is
    /// [`Error::NotInvertible`].
    pub fn invmod(&self, m: &Self) -> Result<Self> {
        if m.is_negative() || m.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let (mut old_r, mut r) = (self.modulo(m)?, *m);
        let (mut old_s, mut s) = (Self::ONE, Self::ZERO);
        while !r.is_zero() {
            let (q, rem) = old_r.div(&r)?;
            (old_r, r) = (r, rem);
            let next = old_s.sub(&q.mul(&s)?)?;
            (old_s, s) = (s, next);
        }

        if old_r != Self::ONE {
            return Err(Error::NotInvertible);
        }
        old_s.modulo(m)
    }

    /// Greatest common divisor, always non-negative.
    pub fn gcd(&self, rhs: &Self) -> Result<Self> {
        let (mut a, mut b) = (self.abs(), rhs.abs());
        while !b.is_zero() {
            let (_, r) = a.div(&b)?;
            (a, b) = (b, r);
        }
        Ok(a)
    }

    /// Least common multiple, always non-negative; zero if either input is zero.
    pub fn lcm(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }
        let g = self.gcd(rhs)?;
        let (q, _) = self.abs().div(&g)?;
        q.mul(&rhs.abs())
    }

    /// `self^e mod m` by left-to-right square-and-multiply.
    ///
    /// Works for any non-zero modulus, odd or even. A negative exponent
    /// inverts the base first.
    pub fn pow3(&self, e: &Self, m: &Self) -> Result<Self> {
        if m.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let base = if e.is_negative() {
            self.invmod(m)?
        } else {
            self.modulo(m)?
        };

        let mut acc = Self::ONE.modulo(m)?;
        for i in (0..e.count_bits()).rev() {
            acc = acc.sqrmod(m)?;
            if e.test_bit(i) {
                acc = acc.mulmod(&base, m)?;
            }
        }
        Ok(acc)
    }

    /// `self^e mod m`, choosing [`BigInt::exptmod`] for odd moduli.
    ///
    /// Even moduli are handled by [`BigInt::pow3`] only when `even` is
    /// [`EvenModulus::Fallback`].
    pub fn pow_mod(&self, e: &Self, m: &Self, even: EvenModulus) -> Result<Self> {
        match (m.is_odd(), even) {
            (true, _) => self.exptmod(e, m),
            (false, EvenModulus::Fallback) if !m.is_zero() => self.pow3(e, m),
            _ => Err(Error::InvalidModulus),
        }
    }
}

/// Reduce a double-width signed magnitude modulo `m`, with the result taking
/// the sign of `m` as in [`BigInt::modulo`].
pub(crate) fn reduce_digits(wide: &[Digit], sign: Sign, m: &BigInt) -> Result<BigInt> {
    let (_, r) = divrem_digits(wide, m.digits());
    let r = BigInt::from_digits(&r, sign)?;
    if !r.is_zero() && r.sign != m.sign {
        r.add(m)
    } else {
        Ok(r)
    }
}
