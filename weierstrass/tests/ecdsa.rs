//! ECDSA test vectors.

use hex_literal::hex;
use proptest::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use weierstrass::{
    AffinePoint, BigInt, Signature,
    curve::{NIST_P256, NIST_P384, SECP256K1},
    ecdsa::{sign_prehashed, verify_prehashed},
    keys,
};

const MSG: &[u8] = b"a message to sign via ECDSA";

mod p256 {
    use super::*;

    pub const D: [u8; 32] = hex!("f3fccc0d00d8031954f90864d43c247f4bf5f0665c6b50cc17749a27d1cf7664");
    pub const K: [u8; 32] = hex!("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
    pub const DIGEST: &[u8] = b"75a01ec50ef173e6fa6a0de424893d1fc63c80681cedcd0f4bb9c1a676df2098";

    pub fn public() -> AffinePoint {
        AffinePoint::new(
            BigInt::from_be_array(&hex!(
                "8d617e65c9508e64bcc5673ac82a6799da3c1446682c258c463fffdf58dfd2fa"
            )),
            BigInt::from_be_array(&hex!(
                "3e6c378b53d795c4a4dffb4199edd7862f23abaf0203b4b8911ba0569994e101"
            )),
        )
    }

    pub fn signature() -> Signature {
        Signature::from_bytes(
            &hex!("e4ddc8a2931382772a49847a4b0d7d60e008580f68718af907f15c45ce0dc934"),
            &hex!("1e64753422a2366fc2ba5aec77e72221f2bc3f5f50bfafd222f9a56736caaa1a"),
        )
        .unwrap()
    }
}

#[test]
fn p256_known_answer() {
    let d = BigInt::from_be_array(&p256::D);
    let k = BigInt::from_be_array(&p256::K);
    assert_eq!(keys::public_key(&d, &NIST_P256).unwrap(), p256::public());

    let sig = sign_prehashed(p256::DIGEST, &d, &k, &NIST_P256).unwrap();
    assert_eq!(sig, p256::signature());
    assert!(verify_prehashed(&sig, p256::DIGEST, &p256::public(), &NIST_P256));
}

#[test]
fn p256_rejects_tampering() {
    let sig = p256::signature();
    let public = p256::public();

    let mut digest = p256::DIGEST.to_vec();
    digest[0] = b'8';
    assert!(!verify_prehashed(&sig, &digest, &public, &NIST_P256));

    let bumped = Signature::new(*sig.r(), sig.s().add_d(1).unwrap());
    assert!(!verify_prehashed(&bumped, p256::DIGEST, &public, &NIST_P256));

    let other_key = NIST_P256.double(NIST_P256.generator_affine()).unwrap();
    assert!(!verify_prehashed(&sig, p256::DIGEST, &other_key, &NIST_P256));

    let off_curve = AffinePoint::new(*public.x().unwrap(), public.y().unwrap().add_d(1).unwrap());
    assert!(!verify_prehashed(&sig, p256::DIGEST, &off_curve, &NIST_P256));
}

/// Flip bit `i` of a big-endian encoding padded to `len` bytes.
fn flip_bit(v: &BigInt, i: usize, len: usize) -> BigInt {
    let mut bytes = v.to_unsigned_bytes_padded(len).unwrap();
    bytes[len - 1 - i / 8] ^= 1 << (i % 8);
    BigInt::from_unsigned_bytes(&bytes).unwrap()
}

#[test]
fn p256_single_bit_flips() {
    let sig = p256::signature();
    let public = p256::public();
    let (r, s) = sig.split();

    for i in 0..256 {
        let flipped_r = Signature::new(flip_bit(&r, i, 32), s);
        assert!(!verify_prehashed(&flipped_r, p256::DIGEST, &public, &NIST_P256), "r bit {i}");
        let flipped_s = Signature::new(r, flip_bit(&s, i, 32));
        assert!(!verify_prehashed(&flipped_s, p256::DIGEST, &public, &NIST_P256), "s bit {i}");
    }

    // each bit of the first and last digest nibbles
    for pos in [0, p256::DIGEST.len() - 1] {
        for bit in 0..4 {
            let mut digest = p256::DIGEST.to_vec();
            let nibble = (digest[pos] as char).to_digit(16).unwrap() ^ (1 << bit);
            digest[pos] = char::from_digit(nibble, 16).unwrap() as u8;
            assert!(!verify_prehashed(&sig, &digest, &public, &NIST_P256), "digest {pos}/{bit}");
        }
    }
}

#[test]
fn p384_truncated_digest() {
    // SHA-512 of MSG, truncated to the 384-bit order
    let digest = b"1ee2e5eee549248cc3d560cfff3817a9a5f6092f06ea1318dae66d8758cdee07\
                   d84c995873aa1dbc355cf20bd16ddb98d1da33438c5194911f9b5676806fc297";
    let d = BigInt::from_be_array(&hex!(
        "1d9ec7a9a4ef4c0a4ef8c0cd3d8cf4c3b0a7a1d7c2c9b1e0c5f6a7b8c9d0e1f2a3b4c5d6e7f8091a2b3c4d5e6f708192"
    ));
    let k = BigInt::from_be_array(&hex!(
        "2e8e4ad2f8c9a0b1c2d3e4f5061728394a5b6c7d8e9fa0b1c2d3e4f5061728394a5b6c7d8e9fa0b1c2d3e4f506172839"
    ));
    let public = AffinePoint::new(
        BigInt::from_be_array(&hex!(
            "426d98ca430572abf81391b9ad575ce5ae1c0057fa31577de1228c3b52feea9d2e9b7bbe623cb94d31822d6d83708aaa"
        )),
        BigInt::from_be_array(&hex!(
            "d9bb2fbc1530061d64aa746f9fe551232a5c18469858b5dc98b877026aa8935dae6b13dccab7df3321b06214172104d9"
        )),
    );

    assert_eq!(keys::public_key(&d, &NIST_P384).unwrap(), public);
    let sig = sign_prehashed(digest, &d, &k, &NIST_P384).unwrap();
    assert_eq!(
        sig,
        Signature::from_bytes(
            &hex!("da3a96a2bade82a4abb3b0738237eb696e47b80dd363ec731dfa5827bfa9e8c14ca49a1a739463f9e2186ee93c014871"),
            &hex!("a9a93819558422b4c401ca250b3c32e4c152cd20f7b553ef6cb2d58c8bca18d37db88ed38c2bd40dd19fba41c9c0454f"),
        )
        .unwrap()
    );
    assert!(verify_prehashed(&sig, digest, &public, &NIST_P384));
}

#[cfg(feature = "sha256")]
mod keys_with_hashing {
    use super::*;
    use weierstrass::{
        Error,
        ecdsa::{SigningKey, VerifyingKey},
    };

    #[test]
    fn sha256_signing_matches_vector() {
        let key = SigningKey::new(BigInt::from_be_array(&p256::D), &NIST_P256).unwrap();
        assert_eq!(key.verifying_key().as_point().to_affine(), p256::public());

        let sig = key
            .sign_with_nonce(MSG, &BigInt::from_be_array(&p256::K))
            .unwrap();
        assert_eq!(sig, p256::signature());

        let vk = VerifyingKey::from_affine(p256::public(), &NIST_P256).unwrap();
        assert!(vk.verify(MSG, &sig));
        assert!(!vk.verify(b"a different message", &sig));
    }

    #[test]
    fn sha512_on_p384_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(384);
        let key = SigningKey::random(&NIST_P384, &mut rng).unwrap();
        let k = keys::random_scalar(&NIST_P384, &mut rng).unwrap();
        let sig = key.sign_digest_with_nonce::<sha2::Sha512>(MSG, &k).unwrap();
        assert!(key.verifying_key().verify_digest::<sha2::Sha512>(MSG, &sig));
        assert!(!key.verifying_key().verify(MSG, &sig));
    }

    #[test]
    fn verifying_key_checks_point() {
        assert_eq!(
            VerifyingKey::from_affine(AffinePoint::Identity, &SECP256K1),
            Err(Error::PointNotOnCurve)
        );
        assert_eq!(
            VerifyingKey::from_affine(p256::public(), &SECP256K1),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn randomized_signatures_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let key = SigningKey::random(&SECP256K1, &mut rng).unwrap();
        let first = key.sign_with_rng(MSG, &mut rng).unwrap();
        let second = key.sign_with_rng(MSG, &mut rng).unwrap();
        assert_ne!(first, second);
        assert!(key.verifying_key().verify(MSG, &first));
        assert!(key.verifying_key().verify(MSG, &second));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn sign_then_verify(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for curve in [&NIST_P256, &SECP256K1] {
            let (d, public) = keys::generate_keypair(curve, &mut rng).unwrap();
            let k = keys::random_scalar(curve, &mut rng).unwrap();
            let sig = sign_prehashed(p256::DIGEST, &d, &k, curve).unwrap();
            prop_assert!(verify_prehashed(&sig, p256::DIGEST, &public, curve));

            let (_, other) = keys::generate_keypair(curve, &mut rng).unwrap();
            prop_assert!(!verify_prehashed(&sig, p256::DIGEST, &other, curve));
        }
    }
}
