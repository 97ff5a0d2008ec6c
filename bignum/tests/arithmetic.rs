//! Arithmetic checked against `num-bigint`.

use bignum::{BigInt, Error, FP_SIZE};
use num_bigint::BigInt as Reference;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

fn to_ref(x: &BigInt) -> Reference {
    Reference::parse_bytes(x.to_radix(16).unwrap().as_bytes(), 16).unwrap()
}

fn from_ref(x: &Reference) -> BigInt {
    BigInt::from_radix(&x.to_str_radix(16), 16).unwrap()
}

prop_compose! {
    /// Signed values of up to `max_bytes` bytes.
    fn bigint(max_bytes: usize)(
        bytes in proptest::collection::vec(any::<u8>(), 0..=max_bytes),
        negative in any::<bool>(),
    ) -> BigInt {
        let x = BigInt::from_unsigned_bytes(&bytes).unwrap();
        if negative { x.neg() } else { x }
    }
}

proptest! {
    #[test]
    fn add_sub(a in bigint(300), b in bigint(300)) {
        prop_assert_eq!(to_ref(&a.add(&b).unwrap()), to_ref(&a) + to_ref(&b));
        prop_assert_eq!(to_ref(&a.sub(&b).unwrap()), to_ref(&a) - to_ref(&b));
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn mul_sqr(a in bigint(280), b in bigint(280)) {
        prop_assert_eq!(to_ref(&a.mul(&b).unwrap()), to_ref(&a) * to_ref(&b));
        prop_assert_eq!(to_ref(&a.sqr().unwrap()), to_ref(&a) * to_ref(&a));
    }

    #[test]
    fn div_identity(a in bigint(500), b in bigint(250)) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div(&b).unwrap();
        // truncating division, as num-bigint does for `/` and `%`
        prop_assert_eq!(to_ref(&q), to_ref(&a) / to_ref(&b));
        prop_assert_eq!(to_ref(&r), to_ref(&a) % to_ref(&b));
        prop_assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
        prop_assert!(r.cmp_mag(&b).is_lt());
    }

    #[test]
    fn modulo_in_range(a in bigint(300), b in bigint(100)) {
        prop_assume!(!b.is_zero());
        let m = b.abs();
        let r = a.modulo(&m).unwrap();
        prop_assert!(!r.is_negative() && r < m);
        let expected = ((to_ref(&a) % to_ref(&m)) + to_ref(&m)) % to_ref(&m);
        prop_assert_eq!(to_ref(&r), expected);
    }

    #[test]
    fn shifts(a in bigint(200), b in 0usize..700) {
        let shifted = a.mul_2d(b).unwrap();
        prop_assert_eq!(to_ref(&shifted), to_ref(&a) << b);
        let (q, r) = shifted.div_2d(b);
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
    }

    #[test]
    fn gcd_lcm(a in bigint(64), b in bigint(64)) {
        let g = a.gcd(&b).unwrap();
        prop_assert!(!g.is_negative());
        if !g.is_zero() {
            prop_assert!(a.modulo(&g).unwrap().is_zero());
            prop_assert!(b.modulo(&g).unwrap().is_zero());
            let l = a.lcm(&b).unwrap();
            prop_assert_eq!(to_ref(&l), (to_ref(&a) * to_ref(&b)).abs() / to_ref(&g));
        }
    }

    #[test]
    fn radix_round_trip(a in bigint(128), radix in 2u32..=64) {
        let s = a.to_radix(radix).unwrap();
        prop_assert_eq!(BigInt::from_radix(&s, radix).unwrap(), a);
    }

    #[test]
    fn byte_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..200)) {
        // canonical buffers have no leading zero byte
        let canonical = match bytes.iter().position(|&b| b != 0) {
            Some(i) => &bytes[i..],
            None => &[][..],
        };
        let x = BigInt::from_unsigned_bytes(canonical).unwrap();
        prop_assert_eq!(x.to_unsigned_bytes(), canonical);
        let y = x.neg();
        prop_assert_eq!(BigInt::from_signed_bytes(&y.to_signed_bytes()).unwrap(), y);
    }

    #[test]
    fn decimal_display(a in bigint(64)) {
        prop_assert_eq!(a.to_string(), to_ref(&a).to_string());
        prop_assert_eq!(from_ref(&to_ref(&a)), a);
    }
}

#[test]
fn capacity_boundary() {
    let top = BigInt::power_of_two(FP_SIZE * 64 - 1).unwrap();
    assert_eq!(top.count_bits(), FP_SIZE * 64);
    assert_eq!(top.mul_2(), Err(Error::CapacityExceeded));
    assert_eq!(top.add(&top), Err(Error::CapacityExceeded));
    assert!(top.sub(&top).unwrap().is_zero());

    let half = BigInt::power_of_two(FP_SIZE * 32 - 1).unwrap();
    assert!(half.mul(&half).is_ok());
    assert!(Reference::zero() == to_ref(&BigInt::ZERO));
}
