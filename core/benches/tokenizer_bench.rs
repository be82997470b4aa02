use criterion::{criterion_group, criterion_main, Criterion};
use search_core::document::split_tokens;
use search_core::tokenizer::normalize;
use search_core::{build_index, NoiseWords};

const TEXT: &str = "Alice was beginning to get very tired of sitting by her sister on the bank, \
and of having nothing to do: once or twice she had peeped into the book her sister was reading, \
but it had no pictures or conversations in it, 'and what is the use of a book,' thought Alice, \
'without pictures or conversations?'";

fn bench_normalize(c: &mut Criterion) {
    let noise: NoiseWords = ["the", "of", "and", "a", "to", "in", "it", "or"].into_iter().collect();
    let tokens = split_tokens(TEXT);
    c.bench_function("normalize_paragraph", |b| {
        b.iter(|| tokens.iter().filter_map(|t| normalize(t, &noise)).count())
    });
}

fn bench_build(c: &mut Criterion) {
    let tokens = split_tokens(&TEXT.repeat(20));
    c.bench_function("build_index_100_docs", |b| {
        b.iter(|| {
            let docs = (0..100).map(|i| Ok((format!("doc{i}"), tokens[..tokens.len() - i].to_vec())));
            build_index(docs, NoiseWords::new())
        })
    });
}

criterion_group!(benches, bench_normalize, bench_build);
criterion_main!(benches);
