//! bignum exponentiation and prime generation benchmarks

use bignum::{BigInt, DEFAULT_MR_ROUNDS};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

/// NIST P-256 field prime.
fn modulus() -> BigInt {
    BigInt::from_be_array(&hex!(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
    ))
}

fn base() -> BigInt {
    BigInt::from_be_array(&hex!(
        "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464"
    ))
}

fn exponent() -> BigInt {
    BigInt::from_be_array(&hex!(
        "0f56db78ca460b055c500064824bed999a25aaf48ebb519ac201537b85479813"
    ))
}

fn bench_exptmod<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (a, e, m) = (base(), exponent(), modulus());
    group.bench_function("exptmod", |b| b.iter(|| a.exptmod(&e, &m)));
}

fn bench_pow3<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (a, e, m) = (base(), exponent(), modulus());
    group.bench_function("pow3", |b| b.iter(|| a.pow3(&e, &m)));
}

fn bench_invmod<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (a, m) = (base(), modulus());
    group.bench_function("invmod", |b| b.iter(|| a.invmod(&m)));
}

fn bench_mulmod<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (a, e, m) = (base(), exponent(), modulus());
    group.bench_function("mulmod", |b| b.iter(|| a.mulmod(&e, &m)));
}

fn bench_is_prime<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let m = modulus();
    group.bench_function("is_prime", |b| b.iter(|| m.is_prime(DEFAULT_MR_ROUNDS)));
}

fn bench_generate_prime<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    group.bench_function("generate_prime 256", |b| {
        b.iter(|| BigInt::generate_prime(256, DEFAULT_MR_ROUNDS, false, &mut rng))
    });
}

fn bench_modular(c: &mut Criterion) {
    let mut group = c.benchmark_group("modular arithmetic");
    bench_exptmod(&mut group);
    bench_pow3(&mut group);
    bench_invmod(&mut group);
    bench_mulmod(&mut group);
    group.finish();
}

fn bench_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes");
    group.sample_size(10);
    bench_is_prime(&mut group);
    bench_generate_prime(&mut group);
    group.finish();
}

criterion_group!(benches, bench_modular, bench_primes);
criterion_main!(benches);
