use crate::data::{validate_word, Language};
use crate::entropy::{rank_guesses, GuessAnalysis};
use crate::filter::filter_words;
use crate::results::{FeedbackPattern, GameResult, GuessStep, SolverError};
use std::sync::Arc;

/// Computes the best next guess for a language given the rounds played so
/// far.
///
/// With no steps played this returns the language's precomputed opening guess
/// directly; the opening ranking never changes, so recomputing it would be
/// wasted work. Otherwise the candidate pool is rebuilt by filtering the full
/// word list through every step in order, and the whole word list is then
/// scored against that pool. Ties on entropy prefer a word that is still a
/// possible answer, then the earliest word in list order, which keeps the
/// result deterministic.
///
/// Fails with [`SolverError::EmptyPool`] when the steps are inconsistent with
/// every word in the list, and with a validation error when a step carries a
/// malformed word.
pub fn best_guess(steps: &[GuessStep], language: &Language) -> Result<Arc<str>, SolverError> {
    for step in steps {
        validate_word(&step.guess)?;
    }
    if steps.is_empty() {
        return Ok(language.opening_guess());
    }

    let mut pool: Vec<Arc<str>> = language.bank().to_vec();
    for step in steps {
        pool = filter_words(&pool, &step.guess, step.pattern);
    }
    log::debug!(
        "{} candidates remain after {} steps",
        pool.len(),
        steps.len()
    );
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }

    let best = rank_guesses(language.bank(), &pool)
        .into_iter()
        .reduce(|best, next| if beats(&next, &best) { next } else { best })
        .ok_or(SolverError::EmptyPool)?;
    log::debug!("best guess '{}' gains {:.3} bits", best.word, best.entropy);
    Ok(best.word)
}

// Strict comparison so that the first candidate in list order wins ties.
fn beats(next: &GuessAnalysis, best: &GuessAnalysis) -> bool {
    next.entropy > best.entropy || (next.entropy == best.entropy && next.in_pool && !best.in_pool)
}

/// Plays a full game against a known objective word, guessing with
/// [`best_guess`] for up to `max_rounds` rounds.
///
/// Returns [`GameResult::UnknownWord`] when the objective is not in the
/// language's word list, and [`GameResult::Failure`] with the played guesses
/// when the round cap is reached first.
pub fn play_game(objective: &str, max_rounds: usize, language: &Language) -> GameResult {
    if !language.bank().contains(objective) {
        return GameResult::UnknownWord;
    }

    let mut steps: Vec<GuessStep> = Vec::new();
    let mut guesses: Vec<Box<str>> = Vec::new();
    for _ in 0..max_rounds {
        let guess = match best_guess(&steps, language) {
            Ok(guess) => guess,
            Err(_) => return GameResult::Failure(guesses),
        };
        guesses.push(Box::from(guess.as_ref()));

        let pattern = FeedbackPattern::compute(&guess, objective);
        if pattern.is_all_correct() {
            return GameResult::Success(guesses);
        }
        steps.push(GuessStep::new(guess.as_ref(), pattern));
    }
    GameResult::Failure(guesses)
}
