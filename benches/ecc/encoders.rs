use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkcode::ecc::{crc32_compute_pure, hamming_encode};
use rand::Rng;

fn random_bits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}

fn bench_hamming(c: &mut Criterion) {
    for len in [64_usize, 1024, 8192] {
        let data = random_bits(len);
        c.bench_function(&format!("hamming_encode/n=7/{len} bits"), |b| {
            b.iter(|| hamming_encode(black_box(&data), 7).unwrap())
        });
        c.bench_function(&format!("hamming_encode/n=15/{len} bits"), |b| {
            b.iter(|| hamming_encode(black_box(&data), 15).unwrap())
        });
    }
}

fn bench_crc32(c: &mut Criterion) {
    for len in [64_usize, 1024, 8192] {
        let data = random_bits(len);
        c.bench_function(&format!("crc32_pure/{len} bits"), |b| {
            b.iter(|| crc32_compute_pure(black_box(&data)).unwrap())
        });
    }
}

criterion_group!(benches, bench_hamming, bench_crc32);
criterion_main!(benches);
