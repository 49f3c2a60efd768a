use cadena::{CharSequence, PatternMatcher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_text(size: usize) -> Vec<u8> {
    let words = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ",
        "cadena ", "node ", "chain ", "pattern ", "prefix ", "suffix ", "table ",
        "insert ", "append ", "search ", "count ", "match ",
    ];
    let mut text = Vec::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        let word = words[i % words.len()].as_bytes();
        text.extend_from_slice(word);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_build_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sequence");

    for size in [1_000, 10_000, 50_000] {
        let text = generate_text(size);
        group.bench_with_input(BenchmarkId::new("from_bytes", size), &text, |b, text| {
            b.iter(|| CharSequence::from_bytes(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("append_byte", size), &text, |b, text| {
            b.iter(|| black_box(text).iter().copied().collect::<CharSequence>())
        });
    }
    group.finish();
}

fn bench_insert_middle(c: &mut Criterion) {
    let base = CharSequence::from_bytes(generate_text(10_000));

    c.bench_function("insert_middle_10k", |b| {
        b.iter_batched(
            || base.clone(),
            |mut seq| {
                seq.insert(black_box("needle"), 5_000);
                seq
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_count(c: &mut Criterion) {
    let seq = CharSequence::from_bytes(generate_text(100_000));

    let mut group = c.benchmark_group("count");

    for pattern in ["fox", "the quick", "pattern prefix suffix"] {
        group.bench_with_input(
            BenchmarkId::new("pattern", pattern),
            pattern.as_bytes(),
            |b, pat| b.iter(|| seq.search(black_box(pat))),
        );
    }
    group.finish();
}

fn bench_adversarial(c: &mut Criterion) {
    let seq = CharSequence::from_bytes(vec![b'a'; 100_000]);
    let mut group = c.benchmark_group("adversarial");

    for m in [10, 100, 1_000] {
        let mut pattern = vec![b'a'; m - 1];
        pattern.push(b'b');
        let matcher = PatternMatcher::new(&pattern);
        group.bench_with_input(BenchmarkId::new("near_miss", m), &matcher, |b, matcher| {
            b.iter(|| matcher.count(black_box(&seq)))
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let seq = CharSequence::from_bytes(generate_text(100_000));

    c.bench_function("contains_hit", |b| {
        b.iter(|| seq.contains(black_box(b"fox")))
    });

    c.bench_function("contains_miss", |b| {
        b.iter(|| seq.contains(black_box(b"zzzzz")))
    });
}

criterion_group!(
    benches,
    bench_build_sequence,
    bench_insert_middle,
    bench_count,
    bench_adversarial,
    bench_contains,
);
criterion_main!(benches);
