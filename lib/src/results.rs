use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::Arc;

/// Every word in the game, guess or secret, is exactly this long.
pub const WORD_LENGTH: usize = 5;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// The letter is in the word at this location ("green").
    Correct,
    /// The letter is in the word, but not at this location ("yellow").
    PresentNotHere,
    /// The letter is not in the word ("black").
    NotPresent,
}

impl LetterResult {
    /// The single-character encoding used at the boundary: `g`, `y`, or `b`.
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::PresentNotHere => 'y',
            LetterResult::NotPresent => 'b',
        }
    }

    fn from_char(encoded: char) -> Option<LetterResult> {
        match encoded.to_ascii_lowercase() {
            'g' => Some(LetterResult::Correct),
            'y' => Some(LetterResult::PresentNotHere),
            'b' => Some(LetterResult::NotPresent),
            _ => None,
        }
    }
}

/// Indicates that an error occurred while validating input or ranking guesses.
#[derive(Debug)]
pub enum SolverError {
    /// The word is not `WORD_LENGTH` lowercase ASCII letters.
    InvalidWord(Box<str>),
    /// The word is well-formed but not in the vocabulary.
    UnknownWord(Box<str>),
    /// The pattern is not `WORD_LENGTH` characters over `b`, `y`, and `g`.
    InvalidResultPattern(Box<str>),
    /// Filtering the word list against the recorded history left nothing.
    EmptyCandidateSet,
    /// Ranking was requested with no eligible guess words.
    NoEligibleGuess,
    /// The word list could not be read.
    WordListIo(io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::InvalidWord(word) => {
                write!(f, "'{}' must be exactly five lowercase letters", word)
            }
            SolverError::UnknownWord(word) => {
                write!(f, "'{}' is not a command in the word list", word)
            }
            SolverError::InvalidResultPattern(pattern) => {
                write!(f, "'{}' must be five characters of only b, y, or g", pattern)
            }
            SolverError::EmptyCandidateSet => write!(
                f,
                "no candidates remain; check the recorded results or reset the session"
            ),
            SolverError::NoEligibleGuess => write!(f, "there are no eligible words to guess from"),
            SolverError::WordListIo(err) => write!(f, "failed to read the word list: {}", err),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::WordListIo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> SolverError {
        SolverError::WordListIo(err)
    }
}

/// The per-position feedback for one guess.
///
/// Parses from and displays as the five-character `b`/`y`/`g` boundary
/// encoding (e.g. `bbygg`), case-insensitive on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultPattern([LetterResult; WORD_LENGTH]);

impl ResultPattern {
    /// The number of distinct patterns (3^WORD_LENGTH), for dense bucketing.
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(letters: [LetterResult; WORD_LENGTH]) -> ResultPattern {
        ResultPattern(letters)
    }

    pub fn letters(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` iff every position is `Correct`.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|lr| *lr == LetterResult::Correct)
    }

    /// A dense base-3 index in `0..NUM_PATTERNS`, usable as a bucket key.
    pub fn index(&self) -> usize {
        self.0.iter().fold(0, |acc, lr| {
            acc * 3
                + match lr {
                    LetterResult::NotPresent => 0,
                    LetterResult::PresentNotHere => 1,
                    LetterResult::Correct => 2,
                }
        })
    }

    /// Renders the pattern as colored squares (⬛🟨🟩).
    pub fn emoji(&self) -> String {
        self.0
            .iter()
            .map(|lr| match lr {
                LetterResult::Correct => '🟩',
                LetterResult::PresentNotHere => '🟨',
                LetterResult::NotPresent => '⬛',
            })
            .collect()
    }
}

impl fmt::Display for ResultPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for lr in &self.0 {
            write!(f, "{}", lr.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for ResultPattern {
    type Err = SolverError;

    fn from_str(encoded: &str) -> Result<ResultPattern, SolverError> {
        let trimmed = encoded.trim();
        let mut letters = [LetterResult::NotPresent; WORD_LENGTH];
        let mut count = 0;
        for encoded_char in trimmed.chars() {
            let Some(lr) = LetterResult::from_char(encoded_char) else {
                return Err(SolverError::InvalidResultPattern(trimmed.into()));
            };
            if count == WORD_LENGTH {
                return Err(SolverError::InvalidResultPattern(trimmed.into()));
            }
            letters[count] = lr;
            count += 1;
        }
        if count != WORD_LENGTH {
            return Err(SolverError::InvalidResultPattern(trimmed.into()));
        }
        Ok(ResultPattern(letters))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResultPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResultPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = <String as serde::Deserialize>::deserialize(deserializer)?;
        encoded.parse().map_err(serde::de::Error::custom)
    }
}

/// One recorded guess and the feedback it received. The ordered sequence of
/// these records is the whole session state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessRecord {
    pub guess: Arc<str>,
    pub result: ResultPattern,
}

impl GuessRecord {
    pub fn new(guess: Arc<str>, result: ResultPattern) -> GuessRecord {
        GuessRecord { guess, result }
    }
}

/// Whether one full game against a known secret was won.
#[derive(Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The secret was guessed; provides the guesses in order.
    Solved(Vec<Arc<str>>),
    /// The guess budget ran out first.
    OutOfGuesses(Vec<Arc<str>>),
    /// The secret is not in the word bank.
    UnknownWord,
}

/// Determines the result of `guess` when the hidden word is `secret`.
///
/// Correct-position matches consume the secret's letters first; remaining
/// guess letters are then matched left-to-right against the secret's leftover
/// letter budget, so a letter is never reported present more times than it
/// occurs in the secret.
pub fn result_for_guess(secret: &str, guess: &str) -> Result<ResultPattern, SolverError> {
    Ok(score_letters(word_bytes(secret)?, word_bytes(guess)?))
}

pub(crate) fn word_bytes(word: &str) -> Result<&[u8; WORD_LENGTH], SolverError> {
    match <&[u8; WORD_LENGTH]>::try_from(word.as_bytes()) {
        Ok(bytes) if bytes.iter().all(|b| b.is_ascii_lowercase()) => Ok(bytes),
        _ => Err(SolverError::InvalidWord(word.into())),
    }
}

pub(crate) fn score_letters(
    secret: &[u8; WORD_LENGTH],
    guess: &[u8; WORD_LENGTH],
) -> ResultPattern {
    let mut letters = [LetterResult::NotPresent; WORD_LENGTH];
    let mut secret_remaining = [0u8; 26];

    for index in 0..WORD_LENGTH {
        if guess[index] == secret[index] {
            letters[index] = LetterResult::Correct;
        } else {
            secret_remaining[(secret[index] - b'a') as usize] += 1;
        }
    }

    for index in 0..WORD_LENGTH {
        if letters[index] == LetterResult::Correct {
            continue;
        }
        let remaining = &mut secret_remaining[(guess[index] - b'a') as usize];
        if *remaining > 0 {
            letters[index] = LetterResult::PresentNotHere;
            *remaining -= 1;
        }
    }

    ResultPattern(letters)
}
