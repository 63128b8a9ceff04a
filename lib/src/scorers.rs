//! Scoring strategies for picking the next guess.
//!
//! Each scorer is built from the current candidate set and gives every
//! eligible word a score, where the maximum score indicates the best guess.
//! Scores are comparable within one scorer only; fractional scores are
//! scaled by 1000 into the shared `i64` scale.

use crate::data::WordCounter;
use crate::results::{score_letters, word_bytes, ResultPattern, SolverError, WORD_LENGTH};

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the
    /// better the guess. Words are canonical five-letter byte arrays.
    fn score_word(&self, word: &[u8; WORD_LENGTH]) -> i64;
}

/// Scores a word by summing, per position, how many candidates have the
/// word's letter in that same position. A letter that already appeared
/// earlier in the word contributes nothing for its later occurrences, so
/// repeated letters don't inflate a guess.
#[derive(Clone, Debug)]
pub struct MostLikelyScorer {
    counter: WordCounter,
}

impl MostLikelyScorer {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> MostLikelyScorer {
        MostLikelyScorer {
            counter: WordCounter::new(candidates),
        }
    }
}

impl WordScorer for MostLikelyScorer {
    fn score_word(&self, word: &[u8; WORD_LENGTH]) -> i64 {
        let mut sum = 0;
        for (index, &letter) in word.iter().enumerate() {
            if word[..index].contains(&letter) {
                continue;
            }
            sum += self.counter.num_words_with_letter_at(letter, index) as i64;
        }
        sum
    }
}

/// Scores a word by how many of its distinct letters occur anywhere in any
/// candidate. Ignores positions entirely; good for early exploration, not
/// for closing out a game.
#[derive(Clone, Debug)]
pub struct CoverageScorer {
    covered: [bool; 26],
}

impl CoverageScorer {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> CoverageScorer {
        let mut covered = [false; 26];
        for word in candidates {
            for &letter in word.as_ref().as_bytes() {
                covered[(letter - b'a') as usize] = true;
            }
        }
        CoverageScorer { covered }
    }
}

impl WordScorer for CoverageScorer {
    fn score_word(&self, word: &[u8; WORD_LENGTH]) -> i64 {
        let mut sum = 0;
        for (index, &letter) in word.iter().enumerate() {
            if word[..index].contains(&letter) {
                continue;
            }
            if self.covered[(letter - b'a') as usize] {
                sum += 1;
            }
        }
        sum
    }
}

/// Scores a word by the number of candidates it is expected to eliminate.
///
/// The candidates are partitioned into buckets by the result pattern the
/// word would produce against each of them; a guess then eliminates every
/// bucket except the one the real secret falls into. The expectation over
/// buckets is `sum(bucket * (n - bucket)) / n`, which is maximal exactly
/// when the expected remaining candidate count `sum(bucket^2) / n` is
/// minimal. Scores are the expectation scaled by 1000.
///
/// This is the most effective strategy here, at a cost of
/// O(|eligible| * |candidates|) pattern computations per ranking.
#[derive(Clone, Debug)]
pub struct EntropyScorer {
    candidates: Vec<[u8; WORD_LENGTH]>,
}

impl EntropyScorer {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Result<EntropyScorer, SolverError> {
        Ok(EntropyScorer {
            candidates: candidate_bytes(candidates)?,
        })
    }
}

impl WordScorer for EntropyScorer {
    fn score_word(&self, word: &[u8; WORD_LENGTH]) -> i64 {
        (expected_eliminations(word, &self.candidates) * 1000.0) as i64
    }
}

/// Scores a word by the Shannon entropy of its result-pattern distribution
/// over the candidates: `-sum(p * log2(p))` for bucket probabilities `p`.
/// Maximizing this maximizes the expected information gained per guess.
/// Scores are bits scaled by 1000.
#[derive(Clone, Debug)]
pub struct ShannonScorer {
    candidates: Vec<[u8; WORD_LENGTH]>,
}

impl ShannonScorer {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Result<ShannonScorer, SolverError> {
        Ok(ShannonScorer {
            candidates: candidate_bytes(candidates)?,
        })
    }
}

impl WordScorer for ShannonScorer {
    fn score_word(&self, word: &[u8; WORD_LENGTH]) -> i64 {
        let num_candidates = self.candidates.len() as f64;
        let mut entropy = 0.0;
        for &bucket in pattern_buckets(word, &self.candidates).iter() {
            if bucket > 0 {
                let p = bucket as f64 / num_candidates;
                entropy -= p * p.log2();
            }
        }
        (entropy * 1000.0) as i64
    }
}

fn candidate_bytes<S: AsRef<str>>(
    candidates: &[S],
) -> Result<Vec<[u8; WORD_LENGTH]>, SolverError> {
    candidates
        .iter()
        .map(|word| word_bytes(word.as_ref()).copied())
        .collect()
}

fn pattern_buckets(
    guess: &[u8; WORD_LENGTH],
    candidates: &[[u8; WORD_LENGTH]],
) -> [u32; ResultPattern::NUM_PATTERNS] {
    let mut buckets = [0u32; ResultPattern::NUM_PATTERNS];
    for secret in candidates {
        buckets[score_letters(secret, guess).index()] += 1;
    }
    buckets
}

fn expected_eliminations(guess: &[u8; WORD_LENGTH], candidates: &[[u8; WORD_LENGTH]]) -> f64 {
    let num_candidates = candidates.len();
    let eliminated: u64 = pattern_buckets(guess, candidates)
        .iter()
        .map(|&bucket| bucket as u64 * (num_candidates as u64 - bucket as u64))
        .sum();
    eliminated as f64 / num_candidates as f64
}
