//! Main Wordle solver interface

use super::strategy::Strategy;
use crate::core::{Pattern, Word};

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    all_words: &'a [Word],
    answer_words: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word lists
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `all_words`: All valid guessable words
    /// - `answer_words`: Subset of words that can be answers
    pub const fn new(strategy: S, all_words: &'a [Word], answer_words: &'a [Word]) -> Self {
        Self {
            strategy,
            all_words,
            answer_words,
        }
    }

    /// Get the best first guess for a new game
    ///
    /// Returns SALET if available (MIT-proven optimal), otherwise uses strategy.
    /// SALET achieves 3.421 average guesses (proven optimal via dynamic programming).
    ///
    /// Note: SALET has 5.835 bits entropy, which is not the maximum, but it's
    /// optimal for minimizing expected guesses across all possible answers.
    pub fn first_guess(&self) -> Option<&'a Word> {
        // Try to use SALET as the hardcoded optimal first guess
        self.all_words
            .iter()
            .find(|w| w.text() == "salet")
            .or_else(|| {
                // SALET not available (e.g., answers-only mode), use strategy
                self.strategy
                    .select_guess(self.all_words, self.answer_words)
            })
    }

    /// Get the next best guess given previous guesses and patterns
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, pattern) pairs from previous turns
    ///
    /// Returns the best next guess, or None if no candidates remain.
    pub fn next_guess(&self, history: &[(Word, Pattern)]) -> Option<&'a Word> {
        // If this is the first guess, use the hardcoded optimal
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        if candidates.is_empty() {
            return None;
        }

        // If only one candidate remains, just guess it
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        // Convert candidates to owned Vec<Word> to avoid lifetime issues
        let candidate_words: Vec<Word> = candidates.into_iter().cloned().collect();

        self.strategy.select_guess(self.all_words, &candidate_words)
    }

    /// Filter answer words to those consistent with the guess history
    ///
    /// Returns candidates that would produce the observed patterns for all guesses.
    fn filter_candidates(&self, history: &[(Word, Pattern)]) -> Vec<&'a Word> {
        self.answer_words
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed_pattern)| {
                    let pattern = Pattern::calculate(guess, candidate);
                    pattern == *observed_pattern
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Word, Pattern)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Word, Pattern)]) -> Vec<&'a Word> {
        self.filter_candidates(history)
    }
}
