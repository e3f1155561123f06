use std::sync::Arc;
use wordle_entropy_solver::*;

fn pool(words: &[&str]) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn entropy_of_singleton_pool_is_zero() {
    let pool = pool(&["lemon"]);

    assert_eq!(entropy("tares", &pool), 0.0);
    assert_eq!(entropy("lemon", &pool), 0.0);
}

#[test]
fn entropy_of_an_even_two_way_split_is_one_bit() {
    // "tares" buckets these as 00010 and 00121.
    let pool = pool(&["lemon", "sober"]);

    assert!((entropy("tares", &pool) - 1.0).abs() < 1e-12);
}

#[test]
fn entropy_of_an_even_four_way_split_is_two_bits() {
    // Four distinct patterns: 00010, 00121, 22222 and 00000.
    let pool = pool(&["lemon", "sober", "tares", "chill"]);

    assert!((entropy("tares", &pool) - 2.0).abs() < 1e-12);
}

#[test]
fn entropy_is_zero_when_no_candidate_is_distinguished() {
    // Every pooled word shares no letter with the guess.
    let pool = pool(&["lemon", "melon"]);

    assert_eq!(entropy("chick", &pool), 0.0);
}

#[test]
fn entropy_is_bounded_by_pool_size() {
    let bank = WordBank::from_iterator(vec![
        "lemon", "tares", "pasta", "sober", "chill", "melon", "crane", "money",
    ])
    .unwrap();
    let limit = (bank.len() as f64).log2();

    for candidate in bank.iter() {
        let value = entropy(candidate, &bank);
        assert!(value >= 0.0, "candidate: {}", candidate);
        assert!(value <= limit + 1e-12, "candidate: {}", candidate);
    }
}

#[test]
fn rank_guesses_marks_pool_membership() {
    let bank = WordBank::from_iterator(vec!["lemon", "tares", "sober"]).unwrap();
    let remaining = pool(&["lemon"]);

    let ranked = rank_guesses(&bank, &remaining);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].word.as_ref(), "lemon");
    assert!(ranked[0].in_pool);
    assert!(!ranked[1].in_pool);
    assert!(!ranked[2].in_pool);
    for analysis in &ranked {
        assert_eq!(analysis.entropy, 0.0);
    }
}
