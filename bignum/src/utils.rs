//! Digit-level helpers.

use crate::{DIGIT_BIT, Digit, DoubleDigit};

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Digit, b: Digit, carry: Digit) -> (Digit, Digit) {
    let ret = (a as DoubleDigit) + (b as DoubleDigit) + (carry as DoubleDigit);
    (ret as Digit, (ret >> DIGIT_BIT) as Digit)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `Digit::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: Digit, b: Digit, borrow: Digit) -> (Digit, Digit) {
    let (a, b) = (a as DoubleDigit, b as DoubleDigit);
    let t = (borrow >> (DIGIT_BIT - 1)) as DoubleDigit;
    let ret = a.wrapping_sub(b + t);
    (ret as Digit, (ret >> DIGIT_BIT) as Digit)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Digit, b: Digit, c: Digit, carry: Digit) -> (Digit, Digit) {
    let (a, b, c) = (a as DoubleDigit, b as DoubleDigit, c as DoubleDigit);
    let ret = a + b * c + (carry as DoubleDigit);
    (ret as Digit, (ret >> DIGIT_BIT) as Digit)
}

/// Length of `digits` once high zero digits are dropped.
#[inline]
pub(crate) fn trimmed_len(digits: &[Digit]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// Compares two little-endian magnitudes.
pub(crate) fn cmp_digits(a: &[Digit], b: &[Digit]) -> core::cmp::Ordering {
    let (a, b) = (&a[..trimmed_len(a)], &b[..trimmed_len(b)]);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a += b`, returning the carry out of the top of `a`.
pub(crate) fn add_assign_digits(a: &mut [Digit], b: &[Digit]) -> Digit {
    let mut carry = 0;
    for (i, ai) in a.iter_mut().enumerate() {
        if i >= b.len() && carry == 0 {
            break;
        }
        let bi = b.get(i).copied().unwrap_or(0);
        (*ai, carry) = adc(*ai, bi, carry);
    }
    carry
}

/// `a -= b`, returning the borrow out of the top of `a`.
pub(crate) fn sub_assign_digits(a: &mut [Digit], b: &[Digit]) -> Digit {
    let mut borrow = 0;
    for (i, ai) in a.iter_mut().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }
        let bi = b.get(i).copied().unwrap_or(0);
        (*ai, borrow) = sbb(*ai, bi, borrow);
    }
    borrow
}

/// Schoolbook multiplication; `out` must hold `a.len() + b.len()` zeroed digits.
pub(crate) fn mul_digits(a: &[Digit], b: &[Digit], out: &mut [Digit]) {
    debug_assert!(out.len() >= a.len() + b.len());
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            (out[i + j], carry) = mac(out[i + j], ai, bj, carry);
        }
        out[i + b.len()] = carry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_and_borrow() {
        assert_eq!(adc(Digit::MAX, 1, 0), (0, 1));
        assert_eq!(adc(Digit::MAX, Digit::MAX, 1), (Digit::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (Digit::MAX, Digit::MAX));
        assert_eq!(sbb(5, 3, Digit::MAX), (1, 0));
        assert_eq!(mac(0, Digit::MAX, Digit::MAX, Digit::MAX), (0, Digit::MAX));
    }

    #[test]
    fn digit_slices() {
        let mut a = [Digit::MAX, Digit::MAX, 0];
        assert_eq!(add_assign_digits(&mut a, &[1]), 0);
        assert_eq!(a, [0, 0, 1]);
        assert_eq!(sub_assign_digits(&mut a, &[1]), 0);
        assert_eq!(a, [Digit::MAX, Digit::MAX, 0]);
        assert_eq!(cmp_digits(&[1, 0, 0], &[1]), core::cmp::Ordering::Equal);

        let mut out = [0; 4];
        mul_digits(&[Digit::MAX, Digit::MAX], &[Digit::MAX, Digit::MAX], &mut out);
        assert_eq!(out, [1, 0, Digit::MAX - 1, Digit::MAX]);
    }
}
