#![no_main]
// Division, modular reduction and inversion consistency
use bignum::{BigInt, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let split = 2 + usize::from(data[0]) % (data.len() - 2);
    let (a, b) = data[2..].split_at(split - 2);
    let Ok(a) = BigInt::from_signed_bytes(&[&[data[1] & 1][..], a].concat()) else {
        return;
    };
    let Ok(b) = BigInt::from_unsigned_bytes(b) else {
        return;
    };
    if b.is_zero() {
        assert_eq!(a.div(&b), Err(Error::InvalidArgument));
        return;
    }

    // a = q·b + r with |r| < |b| and r carrying the sign of a
    let (q, r) = a.div(&b).unwrap();
    assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
    assert!(r.cmp_mag(&b).is_lt());
    assert!(r.is_zero() || r.is_negative() == a.is_negative());

    let m = a.modulo(&b).unwrap();
    assert!(!m.is_negative() && m < b);

    match a.invmod(&b) {
        Ok(inv) => assert_eq!(a.mulmod(&inv, &b).unwrap(), BigInt::ONE.modulo(&b).unwrap()),
        Err(err) => {
            assert_eq!(err, Error::NotInvertible);
            assert_ne!(a.gcd(&b).unwrap(), BigInt::ONE);
        }
    }

    let round_trip = BigInt::from_radix(&a.to_radix(36).unwrap(), 36).unwrap();
    assert_eq!(round_trip, a);
});
