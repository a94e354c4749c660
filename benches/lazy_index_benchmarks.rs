use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lazytree::compute::hilbert::xy_to_index;
use lazytree::{BoundingBox2D, Config, LazyIndex, Point, downsample, write_chunks};
use tempfile::TempDir;

fn scattered(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = ((i * 7919) % 10_007) as f64 / 100.0;
            let y = ((i * 104_729) % 10_009) as f64 / 100.0;
            let mut p = Point::new(x, y);
            p.set_property("Cell_ID", format!("cell-{}", i));
            p.set_property("n_genes", (i % 3000) as i64);
            p
        })
        .collect()
}

fn benchmark_hilbert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hilbert");

    for order in [8u32, 16, 32] {
        group.bench_with_input(BenchmarkId::new("xy_to_index", order), &order, |b, &order| {
            let mut counter = 0u64;
            b.iter(|| {
                counter = counter.wrapping_add(0x9E37_79B9);
                let mask = if order == 32 { u32::MAX as u64 } else { (1 << order) - 1 };
                xy_to_index(
                    black_box(order),
                    black_box(counter & mask),
                    black_box((counter >> 7) & mask),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_downsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("downsample");

    for size in [1_000usize, 10_000, 50_000] {
        let points = scattered(size);
        group.bench_with_input(BenchmarkId::new("threshold_1000", size), &points, |b, points| {
            b.iter(|| downsample(black_box(points.clone()), 1000, 16).unwrap())
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_search");

    let dir = TempDir::new().unwrap();
    write_chunks(&scattered(40_000), 4_096, dir.path()).unwrap();
    let index = LazyIndex::open(
        dir.path().join("metadata.json"),
        Config::default().with_downsample_threshold(500),
    )
    .unwrap();

    // Wide views are answered from summaries.
    group.bench_function("summary_tier", |b| {
        let query = BoundingBox2D::new(0.0, 0.0, 100.0, 100.0);
        b.iter(|| index.search(black_box(&query)).unwrap())
    });

    // Narrow views re-read candidate chunks.
    group.bench_function("full_resolution_tier", |b| {
        let query = BoundingBox2D::new(40.0, 40.0, 42.0, 42.0);
        b.iter(|| index.search(black_box(&query)).unwrap())
    });

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    let dir = TempDir::new().unwrap();
    write_chunks(&scattered(20_000), 2_048, dir.path()).unwrap();
    let metadata = dir.path().join("metadata.json");

    group.bench_function("open_10_chunks", |b| {
        b.iter(|| LazyIndex::open(black_box(&metadata), Config::default()).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_hilbert,
    benchmark_downsample,
    benchmark_search,
    benchmark_build
);
criterion_main!(benches);
