//! Montgomery arithmetic and constant-sequence exponentiation.

use crate::{
    Digit, Error, Result,
    int::{BigInt, Sign},
    modular::reduce_digits,
    utils::{adc, cmp_digits, mac, mul_digits, sub_assign_digits},
};
use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use subtle::{Choice, ConditionallySelectable};

/// Precomputed values for Montgomery multiplication modulo an odd `m`.
///
/// With `n` the digit length of `m`, values are kept as `aR mod m` where
/// `R = 2^(64n)`.
pub(crate) struct MontyParams {
    modulus: BigInt,
    /// `-m⁻¹ mod 2^64`
    mp: Digit,
    /// `R mod m`
    one: BigInt,
}

impl MontyParams {
    pub(crate) fn new(modulus: &BigInt) -> Result<Self> {
        if modulus.is_negative() || modulus.is_even() {
            return Err(Error::InvalidModulus);
        }

        let mut one = vec![0; modulus.used + 1];
        one[modulus.used] = 1;

        Ok(Self {
            modulus: *modulus,
            mp: neg_inv(modulus.dp[0]),
            one: reduce_digits(&one, Sign::Positive, modulus)?,
        })
    }

    /// Convert a value in `[0, m)` into Montgomery form.
    pub(crate) fn to_monty(&self, a: &BigInt) -> Result<BigInt> {
        let n = self.modulus.used;
        let mut wide = vec![0; n + a.used];
        wide[n..].copy_from_slice(a.digits());
        reduce_digits(&wide, Sign::Positive, &self.modulus)
    }

    /// Convert out of Montgomery form.
    pub(crate) fn from_monty(&self, a: &BigInt) -> BigInt {
        let mut t = vec![0; 2 * self.modulus.used + 1];
        t[..a.used].copy_from_slice(a.digits());
        self.redc(t)
    }

    /// Montgomery product `a * b * R⁻¹ mod m`.
    pub(crate) fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        let mut t = vec![0; 2 * self.modulus.used + 1];
        mul_digits(a.digits(), b.digits(), &mut t);
        self.redc(t)
    }

    pub(crate) fn square(&self, a: &BigInt) -> BigInt {
        self.mul(a, a)
    }

    /// Montgomery reduction of `t < m * R`.
    fn redc(&self, mut t: Vec<Digit>) -> BigInt {
        let m = self.modulus.digits();
        let n = m.len();

        for i in 0..n {
            let u = t[i].wrapping_mul(self.mp);
            let mut carry = 0;
            for (j, &mj) in m.iter().enumerate() {
                (t[i + j], carry) = mac(t[i + j], u, mj, carry);
            }
            let mut k = i + n;
            while carry != 0 && k < t.len() {
                (t[k], carry) = adc(t[k], 0, carry);
                k += 1;
            }
        }

        let r = &mut t[n..];
        if cmp_digits(r, m) != Ordering::Less {
            sub_assign_digits(r, m);
        }

        let mut ret = BigInt::ZERO;
        ret.dp[..n].copy_from_slice(&r[..n]);
        ret.used = n;
        ret.clamp_used();
        ret
    }
}

/// `-a⁻¹ mod 2^64` for odd `a`, by Newton iteration.
fn neg_inv(a: Digit) -> Digit {
    // each step doubles the number of correct low bits: 1, 2, 4, ..., 64
    let mut inv: Digit = 1;
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(a.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}

impl BigInt {
    /// `self^e mod m` using Montgomery multiplication.
    ///
    /// The modulus must be positive and odd ([`Error::InvalidModulus`]
    /// otherwise). A negative exponent inverts the base first.
    ///
    /// Each exponent bit costs exactly one Montgomery multiplication and one
    /// squaring; the ladder registers are exchanged with conditional swaps
    /// rather than branches.
    pub fn exptmod(&self, e: &Self, m: &Self) -> Result<Self> {
        let params = MontyParams::new(m)?;

        let base = if e.is_negative() {
            self.invmod(m)?
        } else {
            self.modulo(m)?
        };

        if *m == Self::ONE {
            return Ok(Self::ZERO);
        }

        let mut r0 = params.one;
        let mut r1 = params.to_monty(&base)?;

        for i in (0..e.count_bits()).rev() {
            let bit = Choice::from(e.test_bit(i) as u8);
            Self::conditional_swap(&mut r0, &mut r1, bit);
            r1 = params.mul(&r0, &r1);
            r0 = params.square(&r0);
            Self::conditional_swap(&mut r0, &mut r1, bit);
        }

        Ok(params.from_monty(&r0))
    }
}
