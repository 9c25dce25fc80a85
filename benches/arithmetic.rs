//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate oorandom;
extern crate zint;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zint::{BigInt, RoundingMode};

use std::str::FromStr;

criterion_main!(arithmetic);

criterion_group!(
    name = arithmetic;
    config = Criterion::default().sample_size(300);
    targets =
        bench_addition,
        bench_multiplication,
        bench_squaring,
        bench_division,
        bench_powmod,
);


/// Random positive decimal value with the requested digit count
fn random_value(rng: &mut oorandom::Rand64, decimal_digits: usize) -> BigInt {
    let mut s = String::with_capacity(decimal_digits);
    s.push(('1' as u8 + (rng.rand_u64() % 9) as u8) as char);
    for _ in 1..decimal_digits {
        s.push(('0' as u8 + (rng.rand_u64() % 10) as u8) as char);
    }
    BigInt::from_str(&s).unwrap()
}

fn random_pairs(rng: &mut oorandom::Rand64, decimal_digits: usize, count: usize) -> Vec<(BigInt, BigInt)> {
    (0..count)
        .map(|_| (random_value(rng, decimal_digits), random_value(rng, decimal_digits)))
        .collect()
}

fn bench_addition(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(801);
    for size in [20usize, 200, 2000].iter().copied() {
        let pairs = random_pairs(&mut rng, size, 32);
        c.bench_function(&format!("addition-{}digit", size), |b| {
            let mut pair_iter = pairs.iter().cycle();
            b.iter(|| {
                let (x, y) = pair_iter.next().unwrap();
                black_box(x + y)
            });
        });
    }
}

fn bench_multiplication(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(802);
    // 2000-digit operands are far past the Karatsuba cutover
    for size in [20usize, 200, 2000].iter().copied() {
        let pairs = random_pairs(&mut rng, size, 8);
        c.bench_function(&format!("multiplication-{}digit", size), |b| {
            let mut pair_iter = pairs.iter().cycle();
            b.iter(|| {
                let (x, y) = pair_iter.next().unwrap();
                black_box(x * y)
            });
        });
    }
}

fn bench_squaring(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(803);
    for size in [20usize, 200, 2000].iter().copied() {
        let values: Vec<BigInt> = (0..8).map(|_| random_value(&mut rng, size)).collect();
        c.bench_function(&format!("square-{}digit", size), |b| {
            let mut value_iter = values.iter().cycle();
            b.iter(|| black_box(value_iter.next().unwrap().square()));
        });
    }
}

fn bench_division(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(804);
    let dividends: Vec<BigInt> = (0..8).map(|_| random_value(&mut rng, 400)).collect();
    let divisors: Vec<BigInt> = (0..8).map(|_| random_value(&mut rng, 40)).collect();

    c.bench_function("divmod-400digit-by-40digit", |b| {
        let mut pair_iter = dividends.iter().zip(divisors.iter()).cycle();
        b.iter(|| {
            let (x, y) = pair_iter.next().unwrap();
            black_box(x.divmod(y, RoundingMode::Truncate).unwrap())
        });
    });

    let small = BigInt::from(1000003u64);
    c.bench_function("divmod-400digit-by-single-digit", |b| {
        let mut value_iter = dividends.iter().cycle();
        b.iter(|| black_box(value_iter.next().unwrap().divmod(&small, RoundingMode::Truncate).unwrap()));
    });
}

fn bench_powmod(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(805);
    let base = random_value(&mut rng, 40);
    let exponent = random_value(&mut rng, 30);
    let modulus = random_value(&mut rng, 40);

    c.bench_function("powmod-30digit-exponent", |b| {
        b.iter(|| black_box(base.powmod(&exponent, &modulus).unwrap()));
    });

    let single_digit_modulus = BigInt::from(33554393u64);
    c.bench_function("powmod-native-modulus", |b| {
        b.iter(|| black_box(base.powmod(&exponent, &single_digit_modulus).unwrap()));
    });
}
