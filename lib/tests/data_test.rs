#[macro_use]
extern crate assert_matches;

use std::io::Cursor;
use wordle_entropy_solver::*;

#[test]
fn word_bank_from_reader_normalizes_lines() -> Result<(), SolverError> {
    let mut cursor = Cursor::new(String::from("\n\nlemon\n Sober\nlemon\n"));

    let bank = WordBank::from_reader(&mut cursor)?;

    assert_eq!(bank.len(), 2);
    assert_eq!(bank[0].as_ref(), "lemon");
    assert_eq!(bank[1].as_ref(), "sober");
    Ok(())
}

#[test]
fn word_bank_from_reader_rejects_malformed_words() {
    let mut cursor = Cursor::new(String::from("lemon\nwordle\n"));

    assert_matches!(
        WordBank::from_reader(&mut cursor),
        Err(SolverError::InvalidWord(_))
    );
}

#[test]
fn word_bank_contains_checks_membership() -> Result<(), SolverError> {
    let bank = WordBank::from_iterator(vec!["lemon", "sober"])?;

    assert!(bank.contains("lemon"));
    assert!(!bank.contains("tares"));
    Ok(())
}

#[test]
fn built_in_languages_keep_their_opener_in_the_bank() -> Result<(), SolverError> {
    for code in ["EN", "ES"] {
        let language = Language::from_code(code)?;
        assert_eq!(language.code(), code);
        assert!(!language.bank().is_empty(), "language: {}", code);
        assert!(
            language.bank().contains(&language.opening_guess()),
            "language: {}",
            code
        );
    }
    Ok(())
}

#[test]
fn built_in_word_lists_are_well_formed() -> Result<(), SolverError> {
    for code in ["EN", "ES"] {
        let language = Language::from_code(code)?;
        for word in language.bank().iter() {
            assert!(is_valid_word(word), "language: {}, word: {}", code, word);
        }
    }
    Ok(())
}

#[test]
fn language_codes_are_case_insensitive() -> Result<(), SolverError> {
    let upper = Language::from_code("EN")?;
    let lower = Language::from_code("en")?;

    assert_eq!(upper.opening_guess(), lower.opening_guess());
    assert_eq!(upper.bank().len(), lower.bank().len());
    Ok(())
}

#[test]
fn unknown_language_codes_are_rejected() {
    assert_matches!(
        Language::from_code("FR"),
        Err(SolverError::UnknownLanguage(_))
    );
    assert_matches!(Language::from_code(""), Err(SolverError::UnknownLanguage(_)));
}
