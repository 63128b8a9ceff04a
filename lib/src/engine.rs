use crate::data::WordBank;
use crate::results::{
    result_for_guess, word_bytes, GameResult, GuessRecord, SolverError,
};
use crate::scorers::{
    CoverageScorer, EntropyScorer, MostLikelyScorer, ShannonScorer, WordScorer,
};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Which words are eligible as the next guess, independent of which words
/// remain possible answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFrom {
    /// Guess only words that can still be the secret.
    Candidates,
    /// Guess from the whole vocabulary, including words that have been ruled
    /// out. Lets a guess probe for information it can't win with.
    AllWords,
}

/// The guess-ranking algorithm to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Positional letter frequency across the candidates.
    MostLikely,
    /// Expected eliminations over result-pattern buckets.
    Entropy,
    /// Shannon entropy of the result-pattern distribution.
    Shannon,
    /// Distinct-letter coverage of the candidate set.
    Coverage,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Strategy::MostLikely => "most-likely",
            Strategy::Entropy => "entropy",
            Strategy::Shannon => "shannon",
            Strategy::Coverage => "coverage",
        })
    }
}

/// A word together with the score the selected strategy gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Arc<str>,
    pub score: i64,
}

impl Strategy {
    /// Scores every word in `eligible` against the current `candidates` and
    /// returns them best-first. Ties keep the `eligible` order, so results
    /// are reproducible for a given word list.
    ///
    /// With a single candidate left there is nothing to learn, so the
    /// candidate itself is returned without consulting the scorer.
    pub fn rank(
        self,
        eligible: &[Arc<str>],
        candidates: &[Arc<str>],
    ) -> Result<Vec<ScoredGuess>, SolverError> {
        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }
        if eligible.is_empty() {
            return Err(SolverError::NoEligibleGuess);
        }
        if let [only] = candidates {
            if let Some(word) = eligible.iter().find(|word| word.as_ref() == only.as_ref()) {
                return Ok(vec![ScoredGuess {
                    word: Arc::clone(word),
                    score: 0,
                }]);
            }
        }
        match self {
            Strategy::MostLikely => {
                rank_with(eligible, &MostLikelyScorer::new(candidates), false)
            }
            Strategy::Coverage => rank_with(eligible, &CoverageScorer::new(candidates), false),
            Strategy::Entropy => rank_with(eligible, &EntropyScorer::new(candidates)?, true),
            Strategy::Shannon => rank_with(eligible, &ShannonScorer::new(candidates)?, true),
        }
    }
}

fn rank_with<S: WordScorer + Sync>(
    eligible: &[Arc<str>],
    scorer: &S,
    parallel: bool,
) -> Result<Vec<ScoredGuess>, SolverError> {
    let score_one = |word: &Arc<str>| -> Result<ScoredGuess, SolverError> {
        Ok(ScoredGuess {
            word: Arc::clone(word),
            score: scorer.score_word(word_bytes(word)?),
        })
    };
    let mut scored: Vec<ScoredGuess> = if parallel {
        eligible.par_iter().map(score_one).collect::<Result<_, _>>()?
    } else {
        eligible.iter().map(score_one).collect::<Result<_, _>>()?
    };
    // Stable sort: equal scores keep their eligible-list order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(scored)
}

/// Returns whether `candidate`, were it the secret, would have produced
/// exactly the recorded result for the recorded guess.
pub fn is_consistent(candidate: &str, record: &GuessRecord) -> bool {
    matches!(
        result_for_guess(candidate, &record.guess),
        Ok(pattern) if pattern == record.result
    )
}

/// Filters `words` down to the candidates consistent with every record in
/// `history`, preserving the input order. An empty history returns all of
/// `words`; an empty result is valid and signals an inconsistent history.
pub fn filter_candidates(words: &[Arc<str>], history: &[GuessRecord]) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| history.iter().all(|record| is_consistent(word, record)))
        .cloned()
        .collect()
}

/// Selects the pool of eligible next guesses for the given scope.
///
/// `candidate_only_after` delays a `Candidates` scope: while fewer than that
/// many guesses have been made, the full vocabulary is used instead, so the
/// opening guesses can probe broadly before converging.
pub fn select_guess_pool<'a>(
    guess_from: GuessFrom,
    bank: &'a WordBank,
    candidates: &'a [Arc<str>],
    guess_index: usize,
    candidate_only_after: usize,
) -> &'a [Arc<str>] {
    match guess_from {
        GuessFrom::AllWords => bank.all_words(),
        GuessFrom::Candidates if guess_index < candidate_only_after => bank.all_words(),
        GuessFrom::Candidates => candidates,
    }
}

/// Attempts to guess the given secret within `max_num_guesses`, replaying
/// the accumulating feedback through the selected strategy each round.
pub fn play_game(
    secret: &str,
    bank: &WordBank,
    strategy: Strategy,
    guess_from: GuessFrom,
    candidate_only_after: usize,
    max_num_guesses: usize,
) -> Result<GameResult, SolverError> {
    let secret = match bank.validate_guess(secret) {
        Ok(word) => word,
        Err(SolverError::InvalidWord(_)) | Err(SolverError::UnknownWord(_)) => {
            return Ok(GameResult::UnknownWord);
        }
        Err(err) => return Err(err),
    };

    let mut history: Vec<GuessRecord> = Vec::new();
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for guess_index in 0..max_num_guesses {
        let candidates = filter_candidates(bank.all_words(), &history);
        let pool = select_guess_pool(
            guess_from,
            bank,
            &candidates,
            guess_index,
            candidate_only_after,
        );
        // Re-guessing a word can't add information.
        let pool: Vec<Arc<str>> = pool
            .iter()
            .filter(|word| !guesses.iter().any(|prev| prev.as_ref() == word.as_ref()))
            .cloned()
            .collect();
        let ranked = strategy.rank(&pool, &candidates)?;
        let Some(top) = ranked.into_iter().next() else {
            return Err(SolverError::NoEligibleGuess);
        };
        guesses.push(Arc::clone(&top.word));
        let result = result_for_guess(&secret, &top.word)?;
        if result.is_solved() {
            return Ok(GameResult::Solved(guesses));
        }
        history.push(GuessRecord::new(top.word, result));
    }
    Ok(GameResult::OutOfGuesses(guesses))
}

#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_entropy_game(b: &mut Bencher) -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec![
            "paste", "bdiff", "crash", "touch", "xargs", "chmod", "chown", "mount", "split",
            "uname", "which", "write", "umask", "quota", "clear",
        ])?;

        b.iter(|| {
            play_game(
                "touch",
                &bank,
                Strategy::Entropy,
                GuessFrom::Candidates,
                0,
                128,
            )
        });

        Ok(())
    }

    #[bench]
    fn bench_filter_candidates(b: &mut Bencher) -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec![
            "paste", "bdiff", "crash", "touch", "xargs", "chmod", "chown", "mount", "split",
            "uname", "which", "write", "umask", "quota", "clear",
        ])?;
        let history = vec![GuessRecord::new(
            Arc::from("paste"),
            result_for_guess("touch", "paste")?,
        )];

        b.iter(|| filter_candidates(bank.all_words(), &history));

        Ok(())
    }
}
