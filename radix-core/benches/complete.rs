use criterion::{Criterion, criterion_group, criterion_main};
use radix_core::Trie;
use std::hint::black_box;

/// Deterministic pseudo-words over a small alphabet, so prefixes share a lot.
fn corpus(count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| char::from(b'a' + ((state >> (i * 3)) % 6) as u8))
                .collect()
        })
        .collect()
}

fn bench_build(words: &[String]) -> anyhow::Result<()> {
    Trie::build(words)?;
    Ok(())
}

fn bench_complete(trie: &Trie<'_, String>, prefix: &str) -> anyhow::Result<usize> {
    Ok(trie.complete(prefix).map_or(0, |leaves| leaves.len()))
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = corpus(10_000);

    c.bench_function("build 10k words", |b| {
        b.iter(|| bench_build(black_box(&words)))
    });

    let Ok(trie) = Trie::build(&words) else {
        return;
    };
    c.bench_function("complete short prefix", |b| {
        b.iter(|| bench_complete(&trie, black_box("ab")))
    });
    c.bench_function("complete long prefix", |b| {
        b.iter(|| bench_complete(&trie, black_box("abcdef")))
    });
    c.bench_function("complete empty prefix", |b| {
        b.iter(|| bench_complete(&trie, black_box("")))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
