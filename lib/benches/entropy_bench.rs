use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wordle_entropy_solver::*;

fn bench_entropy(c: &mut Criterion) {
    let language = Language::from_code("EN").unwrap();
    let bank = language.bank();

    c.bench_function("entropy_single_word_full_bank", |b| {
        b.iter(|| entropy(black_box("tares"), bank))
    });

    c.bench_function("rank_guesses_full_bank", |b| {
        b.iter(|| rank_guesses(bank, bank))
    });
}

fn bench_best_guess(c: &mut Criterion) {
    let language = Language::from_code("EN").unwrap();
    let steps = vec![GuessStep::parse("tares", "00010").unwrap()];

    c.bench_function("best_guess_after_one_step", |b| {
        b.iter(|| best_guess(black_box(&steps), &language).unwrap())
    });
}

criterion_group!(benches, bench_entropy, bench_best_guess);
criterion_main!(benches);
