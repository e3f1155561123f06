use crate::data::is_valid_word;
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// The letter does not appear in the answer, or every occurrence of it is
    /// already accounted for by another slot.
    Absent,
    /// The letter appears in the answer, but somewhere else.
    Present,
    /// The letter appears in the answer at this position.
    Correct,
}

impl LetterFeedback {
    /// The number of possible feedback values per letter.
    pub const NUM: usize = 3;

    /// Converts this feedback to its canonical digit ('0', '1' or '2').
    pub fn to_digit(self) -> char {
        match self {
            LetterFeedback::Absent => '0',
            LetterFeedback::Present => '1',
            LetterFeedback::Correct => '2',
        }
    }

    /// Parses a canonical digit back to a feedback value.
    pub fn from_digit(digit: char) -> Option<LetterFeedback> {
        match digit {
            '0' => Some(LetterFeedback::Absent),
            '1' => Some(LetterFeedback::Present),
            '2' => Some(LetterFeedback::Correct),
            _ => None,
        }
    }

    fn ordinal(self) -> u8 {
        match self {
            LetterFeedback::Absent => 0,
            LetterFeedback::Present => 1,
            LetterFeedback::Correct => 2,
        }
    }

    fn from_ordinal(ordinal: u8) -> Option<LetterFeedback> {
        match ordinal {
            0 => Some(LetterFeedback::Absent),
            1 => Some(LetterFeedback::Present),
            2 => Some(LetterFeedback::Correct),
            _ => None,
        }
    }
}

/// The full feedback signal for one guess: one [`LetterFeedback`] per letter.
///
/// The canonical string form is one digit per slot (`'0'` = absent, `'1'` =
/// present, `'2'` = correct), so the pattern for a guess that shares only its
/// fourth letter with the answer reads `"00010"`. The same digits, read as a
/// base-3 number with the leftmost slot as the lowest digit, give the compact
/// [`code`](FeedbackPattern::code) used for histogram bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([LetterFeedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// The number of distinct patterns (3^5).
    pub const NUM_CODES: usize = LetterFeedback::NUM.pow(WORD_LENGTH as u32);

    /// The winning pattern: every letter correct.
    pub const ALL_CORRECT: FeedbackPattern =
        FeedbackPattern([LetterFeedback::Correct; WORD_LENGTH]);

    /// Computes the pattern Wordle would show for `guess` against `answer`.
    ///
    /// Correct letters are resolved first and consume their occurrence in the
    /// answer; the second pass then marks a letter present only while
    /// unmatched occurrences remain. A guess with more repeats of a letter
    /// than the answer therefore receives at most as many non-absent marks
    /// for that letter as the answer contains.
    ///
    /// Both arguments must satisfy [`is_valid_word`].
    pub fn compute(guess: &str, answer: &str) -> FeedbackPattern {
        debug_assert!(is_valid_word(guess), "invalid guess: {guess}");
        debug_assert!(is_valid_word(answer), "invalid answer: {answer}");

        let guess = guess.as_bytes();
        let answer = answer.as_bytes();
        let mut slots = [LetterFeedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                slots[i] = LetterFeedback::Correct;
            } else {
                remaining[(answer[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if slots[i] != LetterFeedback::Correct {
                let count = &mut remaining[(guess[i] - b'a') as usize];
                if *count > 0 {
                    *count -= 1;
                    slots[i] = LetterFeedback::Present;
                }
            }
        }

        FeedbackPattern(slots)
    }

    /// The per-letter feedback values, in guess order.
    pub fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` iff this is the winning pattern.
    pub fn is_all_correct(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Converts the pattern to its unique code in `[0, 243)`.
    pub fn code(&self) -> u8 {
        let mut code = 0;
        let mut multiplier = 1;
        for feedback in self.0 {
            code += feedback.ordinal() * multiplier;
            multiplier *= LetterFeedback::NUM as u8;
        }
        code
    }

    /// Converts a code produced by [`code`](FeedbackPattern::code) back to a
    /// pattern. Returns `None` for codes outside `[0, 243)`.
    pub fn from_code(mut code: u8) -> Option<FeedbackPattern> {
        if code as usize >= Self::NUM_CODES {
            return None;
        }
        let mut slots = [LetterFeedback::Absent; WORD_LENGTH];
        for slot in slots.iter_mut() {
            *slot = LetterFeedback::from_ordinal(code % LetterFeedback::NUM as u8)?;
            code /= LetterFeedback::NUM as u8;
        }
        Some(FeedbackPattern(slots))
    }
}

impl From<[LetterFeedback; WORD_LENGTH]> for FeedbackPattern {
    fn from(slots: [LetterFeedback; WORD_LENGTH]) -> FeedbackPattern {
        FeedbackPattern(slots)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.0 {
            write!(f, "{}", feedback.to_digit())?;
        }
        Ok(())
    }
}

impl FromStr for FeedbackPattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<FeedbackPattern, SolverError> {
        let mut slots = [LetterFeedback::Absent; WORD_LENGTH];
        let mut len = 0;
        for digit in s.chars() {
            if len == WORD_LENGTH {
                return Err(SolverError::InvalidPattern(s.to_string()));
            }
            slots[len] = LetterFeedback::from_digit(digit)
                .ok_or_else(|| SolverError::InvalidPattern(s.to_string()))?;
            len += 1;
        }
        if len != WORD_LENGTH {
            return Err(SolverError::InvalidPattern(s.to_string()));
        }
        Ok(FeedbackPattern(slots))
    }
}

/// One observed round of play: a guessed word and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: String,
    pub pattern: FeedbackPattern,
}

impl GuessStep {
    pub fn new(guess: impl Into<String>, pattern: FeedbackPattern) -> GuessStep {
        GuessStep {
            guess: guess.into(),
            pattern,
        }
    }

    /// Parses a step from a guessed word and a digit-encoded pattern string.
    ///
    /// Fails with [`SolverError::InvalidWord`] or
    /// [`SolverError::InvalidPattern`] before any solving work happens.
    pub fn parse(guess: &str, pattern: &str) -> Result<GuessStep, SolverError> {
        if !is_valid_word(guess) {
            return Err(SolverError::InvalidWord(guess.to_string()));
        }
        Ok(GuessStep {
            guess: guess.to_string(),
            pattern: pattern.parse()?,
        })
    }
}

/// Whether a simulated game was won or lost.
#[derive(Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The answer was found; holds the guesses that were played.
    Success(Vec<Box<str>>),
    /// The round limit was reached without finding the answer.
    Failure(Vec<Box<str>>),
    /// The objective word is not in the language's word list.
    UnknownWord,
}

/// Indicates that an error occurred while computing a guess.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The given word is not exactly five lowercase ASCII letters.
    #[error("'{0}' is not a valid 5-letter word")]
    InvalidWord(String),
    /// The given feedback string is not five digits in `0..=2`.
    #[error("'{0}' is not a valid feedback pattern")]
    InvalidPattern(String),
    /// The given language code is not registered.
    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),
    /// The applied steps are inconsistent with every word in the list.
    #[error("no candidate words remain")]
    EmptyPool,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
