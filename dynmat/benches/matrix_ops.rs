use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dynmat::{DenseMatrix, SparseConfig, SparseMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_dense(rng: &mut StdRng, n: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_values(n, n, (0..n * n).map(|_| rng.gen_range(-1.0..1.0)))
        .expect("value count matches shape")
}

fn bench_sparse_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse-mutation");
    let mut rng = StdRng::seed_from_u64(0xd1a9);
    let writes: Vec<(usize, usize, f64)> = (0..10_000)
        .map(|_| {
            let value = if rng.gen_bool(0.5) { 0.0 } else { 1.0 };
            (rng.gen_range(0..1000), rng.gen_range(0..1000), value)
        })
        .collect();

    for percent in [1, 5, 25] {
        let config = SparseConfig::with_eviction_percent(percent);
        group.bench_function(format!("set-10k-evict-{percent}pct"), |b| {
            b.iter_batched(
                || SparseMatrix::<f64>::with_config(1000, 1000, &config),
                |mut m| {
                    for &(row, col, value) in &writes {
                        m.set(row, col, value).expect("index in bounds");
                    }
                    black_box(m.stored_len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);
    let a = random_dense(&mut rng, 64);
    let b = random_dense(&mut rng, 64);
    let sparse_id = SparseMatrix::<f64>::identity(64, 64);

    group.bench_function("dense-64", |f| f.iter(|| black_box(a.matmul(&b))));
    group.bench_function("dense-64-widened", |f| {
        f.iter(|| black_box(a.matmul_widened(&b)))
    });
    group.bench_function("dense-by-sparse-64", |f| {
        f.iter(|| black_box(a.matmul(&sparse_id)))
    });
    group.finish();
}

fn bench_slice_fill(c: &mut Criterion) {
    let mut m = DenseMatrix::<f64>::new(512, 512);
    c.bench_function("slice-fill-256x256-step2", |b| {
        b.iter(|| {
            let mut view = m
                .slice_stepped(0..=511, 0..=511, 2, 2)
                .expect("slice in bounds");
            view.fill(black_box(1.0));
        })
    });
}

criterion_group!(benches, bench_sparse_mutation, bench_matmul, bench_slice_fill);
criterion_main!(benches);
