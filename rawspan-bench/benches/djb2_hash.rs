use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};
use rawspan_array::Array2D;
use rawspan_compute::djb2_hash;

fn bench_djb2(c: &mut Criterion) {
    const N: usize = 65536;
    let mut thd_rng = thread_rng();
    let vs: Vec<u32> = (0..N).map(|_| thd_rng.gen()).collect();
    let arr = Array2D::from_vec(vs.clone(), 256, 256).unwrap();
    c.bench_function("djb2_vec_u32_65536", |b| {
        b.iter(|| black_box(djb2_hash(&vs)))
    });
    c.bench_function("djb2_array2d_u32_65536", |b| {
        b.iter(|| black_box(djb2_hash(&arr)))
    });
}

criterion_group!(bench_djb2_group, bench_djb2);
criterion_main!(bench_djb2_group);
