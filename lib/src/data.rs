use crate::results::SolverError;
use crate::WORD_LENGTH;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

const EN_WORDS: &str = include_str!("../data/en.txt");
const ES_WORDS: &str = include_str!("../data/es.txt");

const EN_OPENING_GUESS: &str = "tares";
const ES_OPENING_GUESS: &str = "careo";

/// Returns `true` iff the word is exactly [`WORD_LENGTH`] lowercase ASCII
/// letters.
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

pub(crate) fn validate_word(word: &str) -> Result<(), SolverError> {
    if is_valid_word(word) {
        Ok(())
    } else {
        Err(SolverError::InvalidWord(word.to_string()))
    }
}

/// An ordered, deduplicated list of the words a game can use.
///
/// Construction normalizes every entry (trimmed, lowercased, blank lines
/// skipped) and rejects anything that is not a valid 5-letter word, so the
/// rest of the crate can assume every banked word is well formed. The bank
/// dereferences to `[Arc<str>]` for direct slicing and iteration.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<Arc<str>>,
}

impl WordBank {
    /// Reads a bank from the given reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordBank, SolverError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            push_word(&mut words, &line?)?;
        }
        Ok(WordBank::deduped(words))
    }

    /// Builds a bank from any iterator of words.
    pub fn from_iterator<S, I>(iter: I) -> Result<WordBank, SolverError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut words = Vec::new();
        for word in iter {
            push_word(&mut words, word.as_ref())?;
        }
        Ok(WordBank::deduped(words))
    }

    // Embedded lists are authored alongside the crate; lines that fail
    // validation are dropped rather than reported.
    fn from_embedded(raw: &str) -> WordBank {
        WordBank::deduped(
            raw.lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|word| is_valid_word(word))
                .map(|word| Arc::from(word.as_str()))
                .collect(),
        )
    }

    fn deduped(words: Vec<Arc<str>>) -> WordBank {
        let mut seen: HashSet<Arc<str>> = HashSet::with_capacity(words.len());
        WordBank {
            words: words
                .into_iter()
                .filter(|word| seen.insert(Arc::clone(word)))
                .collect(),
        }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` iff the given word is in the bank.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.as_ref() == word)
    }
}

fn push_word(words: &mut Vec<Arc<str>>, raw: &str) -> Result<(), SolverError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Ok(());
    }
    validate_word(&word)?;
    words.push(Arc::from(word.as_str()));
    Ok(())
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.words
    }
}

/// A language's word list together with its precomputed opening guess.
///
/// The built-in registry covers `"EN"` and `"ES"`; custom languages can be
/// assembled from any [`WordBank`], which is how tests inject small fixture
/// dictionaries.
#[derive(Clone, Debug)]
pub struct Language {
    code: String,
    bank: WordBank,
    opening_guess: Arc<str>,
}

impl Language {
    /// Creates a language from a bank and an opening guess.
    ///
    /// The opening guess must be a member of the bank; the first guess a
    /// caller receives is always playable.
    pub fn new(
        code: impl Into<String>,
        bank: WordBank,
        opening_guess: &str,
    ) -> Result<Language, SolverError> {
        let opening_guess = bank
            .iter()
            .find(|word| word.as_ref() == opening_guess)
            .map(Arc::clone)
            .ok_or_else(|| SolverError::InvalidWord(opening_guess.to_string()))?;
        Ok(Language {
            code: code.into(),
            bank,
            opening_guess,
        })
    }

    /// Looks up a built-in language by its code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Language, SolverError> {
        let language = match code.to_ascii_uppercase().as_str() {
            "EN" => Language::new("EN", WordBank::from_embedded(EN_WORDS), EN_OPENING_GUESS)?,
            "ES" => Language::new("ES", WordBank::from_embedded(ES_WORDS), ES_OPENING_GUESS)?,
            _ => return Err(SolverError::UnknownLanguage(code.to_string())),
        };
        log::debug!(
            "loaded {} words for language {}",
            language.bank.len(),
            language.code
        );
        Ok(language)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// The precomputed opening guess for this language.
    pub fn opening_guess(&self) -> Arc<str> {
        Arc::clone(&self.opening_guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bank_normalizes_input() {
        let bank = WordBank::from_iterator(vec!["", "Money ", "sober", "money"]).unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].as_ref(), "money");
        assert_eq!(bank[1].as_ref(), "sober");
    }

    #[test]
    fn word_bank_rejects_malformed_words() {
        assert!(WordBank::from_iterator(vec!["tare"]).is_err());
        assert!(WordBank::from_iterator(vec!["tarest"]).is_err());
        assert!(WordBank::from_iterator(vec!["tar3s"]).is_err());
    }

    #[test]
    fn language_requires_opener_in_bank() {
        let bank = WordBank::from_iterator(vec!["money", "sober"]).unwrap();

        assert!(Language::new("XX", bank.clone(), "money").is_ok());
        assert!(Language::new("XX", bank, "tares").is_err());
    }
}
