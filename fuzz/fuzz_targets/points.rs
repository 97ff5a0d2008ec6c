#![no_main]
// Targets: NIST P-256, NIST P-384, secp256k1
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use weierstrass::{
    BigInt, Curve,
    curve::NAMED_CURVES,
    ecdsa::{sign_prehashed, verify_prehashed},
    keys,
};

fn test_curve(curve: &Curve, s1: &BigInt, s2: &BigInt, rng: &mut ChaCha8Rng) {
    let g = curve.generator_affine();
    let (_, h) = keys::generate_keypair(curve, rng).unwrap();

    // Shamir's trick agrees with separate multiplications
    let combined = curve.shamirs_trick(g, s1, &h, s2).unwrap();
    let separate = curve
        .add(&curve.mul(g, s1).unwrap(), &curve.mul(&h, s2).unwrap())
        .unwrap();
    assert_eq!(combined, separate);
    assert!(curve.contains(&combined));

    // negation and doubling are consistent with addition
    let sum = curve.add(g, &h).unwrap();
    assert!(curve.add(&sum, &curve.negate(&sum).unwrap()).unwrap().is_identity());
    assert_eq!(curve.double(&h).unwrap(), curve.mul(&h, &BigInt::TWO).unwrap());
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 72 {
        return;
    }

    let mut rng = ChaCha8Rng::from_seed(data[0..32].try_into().unwrap());
    let s1 = BigInt::from_signed_bytes(&data[32..52]).unwrap();
    let s2 = BigInt::from_signed_bytes(&data[52..72]).unwrap();
    let curve = NAMED_CURVES[usize::from(data[0]) % NAMED_CURVES.len()];

    test_curve(curve, &s1, &s2, &mut rng);

    // any hex digest signs and verifies
    let digest: String = data[72..].iter().map(|b| format!("{b:02x}")).collect();
    if digest.is_empty() {
        return;
    }
    let (d, public) = keys::generate_keypair(curve, &mut rng).unwrap();
    let k = keys::random_scalar(curve, &mut rng).unwrap();
    let sig = sign_prehashed(digest.as_bytes(), &d, &k, curve).unwrap();
    assert!(verify_prehashed(&sig, digest.as_bytes(), &public, curve));
});
