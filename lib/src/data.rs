use crate::results::{word_bytes, SolverError, WORD_LENGTH};
use std::io::BufRead;
use std::sync::Arc;

const ALPHABET: usize = 26;

/// Contains all the possible words for this game: the allowed-guess
/// vocabulary of five-letter command names.
///
/// Every stored word is canonical (trimmed, lowercased, exactly
/// [`WORD_LENGTH`] ASCII letters); the rest of the crate relies on that.
#[derive(Clone, Debug)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a `WordBank` by reading words from the given reader, one
    /// word per line. Blank lines are skipped; any other line that is not a
    /// well-formed word is an error.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<WordBank, SolverError> {
        let mut all_words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() {
                continue;
            }
            all_words.push(canonical_word(&line)?);
        }
        Ok(WordBank { all_words })
    }

    /// Constructs a `WordBank` from the given words. Empty entries are
    /// skipped; malformed entries are an error.
    pub fn from_iterator<I, S>(words: I) -> Result<WordBank, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all_words = Vec::new();
        for word in words {
            if word.as_ref().trim().is_empty() {
                continue;
            }
            all_words.push(canonical_word(word.as_ref())?);
        }
        Ok(WordBank { all_words })
    }

    /// The full vocabulary, in file order.
    pub fn all_words(&self) -> &[Arc<str>] {
        &self.all_words
    }

    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|known| known.as_ref() == word)
    }

    /// Canonicalizes raw user input (trim + lowercase) and returns the
    /// bank-owned handle for it, so callers share the vocabulary's storage.
    ///
    /// Fails with [`SolverError::InvalidWord`] if the input is not five
    /// letters, or [`SolverError::UnknownWord`] if it is not in the bank.
    pub fn validate_guess(&self, raw: &str) -> Result<Arc<str>, SolverError> {
        let normalized = raw.trim().to_lowercase();
        word_bytes(&normalized)?;
        self.all_words
            .iter()
            .find(|known| known.as_ref() == normalized)
            .map(Arc::clone)
            .ok_or_else(|| SolverError::UnknownWord(normalized.into()))
    }
}

fn canonical_word(raw: &str) -> Result<Arc<str>, SolverError> {
    let word = raw.trim().to_lowercase();
    word_bytes(&word)?;
    Ok(Arc::from(word.as_str()))
}

/// Counts how many words have each letter at each position. Words must be
/// canonical.
#[derive(Clone, Debug)]
pub struct WordCounter {
    num_words_by_position: [[u32; ALPHABET]; WORD_LENGTH],
}

impl WordCounter {
    pub fn new<S: AsRef<str>>(words: &[S]) -> WordCounter {
        let mut num_words_by_position = [[0u32; ALPHABET]; WORD_LENGTH];
        for word in words {
            let bytes = word.as_ref().as_bytes();
            debug_assert_eq!(bytes.len(), WORD_LENGTH);
            for (index, &letter) in bytes.iter().enumerate() {
                num_words_by_position[index][(letter - b'a') as usize] += 1;
            }
        }
        WordCounter {
            num_words_by_position,
        }
    }

    /// The count of words with the given letter at the given position.
    pub fn num_words_with_letter_at(&self, letter: u8, position: usize) -> u32 {
        self.num_words_by_position[position][(letter - b'a') as usize]
    }
}
