use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::perf_fixtures::{fixture_table, make_blocks, make_nested};
use markup::{RunBuilder, build, parse_markup, tokenize};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;
const DEEP_NESTING: usize = 512;

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| {
            let stream = tokenize(black_box(&input)).expect("fixture tokenizes");
            black_box(stream.len());
        });
    });
}

fn bench_tokenize_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_tokenize_large", |b| {
        b.iter(|| {
            let stream = tokenize(black_box(&input)).expect("fixture tokenizes");
            black_box(stream.len());
        });
    });
}

fn bench_build_runs_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let stream = tokenize(&input).expect("fixture tokenizes");
    let table = fixture_table();
    c.bench_function("bench_build_runs_large", |b| {
        b.iter(|| {
            let text = build(black_box(&stream), &table).expect("fixture builds");
            black_box(text.runs().len());
        });
    });
}

fn bench_build_runs_deep_nesting(c: &mut Criterion) {
    let input = make_nested(DEEP_NESTING);
    let stream = tokenize(&input).expect("fixture tokenizes");
    let table = fixture_table();
    c.bench_function("bench_build_runs_deep_nesting", |b| {
        b.iter(|| {
            let mut builder = RunBuilder::with_capacity(&table, Default::default(), stream.len());
            for (token, span) in stream.iter_spanned() {
                builder.push_token(token, span).expect("balanced fixture");
            }
            let outcome = builder.finish().expect("balanced fixture");
            black_box(outcome.text.runs().len());
        });
    });
}

fn bench_parse_large_end_to_end(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let table = fixture_table();
    c.bench_function("bench_parse_large_end_to_end", |b| {
        b.iter(|| {
            let text = parse_markup(black_box(&input), &table).expect("fixture parses");
            black_box(text.len());
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_tokenize_large,
    bench_build_runs_large,
    bench_build_runs_deep_nesting,
    bench_parse_large_end_to_end
);
criterion_main!(benches);
