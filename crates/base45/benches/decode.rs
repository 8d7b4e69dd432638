use base45::{decode, encode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

const SIZES: [usize; 5] = [1, 128, 512, 1024, 8192];

fn benchmark_decode(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("decode");

    for size in SIZES {
        let data: Vec<u8> = (0..size).map(|_| rng.gen::<u8>()).collect();
        let encoded = encode(&data);
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode);
criterion_main!(benches);
