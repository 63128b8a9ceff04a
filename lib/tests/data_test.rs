#[macro_use]
extern crate assert_matches;

use cmdle_solver::*;

use std::io::Cursor;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_slice:expr, $str_slice:expr) => {
        assert_eq!(
            $arc_slice.to_vec(),
            $str_slice
                .iter()
                .map(|word| Arc::from(*word))
                .collect::<Vec<Arc<str>>>()
        );
    };
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), SolverError> {
    let cursor = Cursor::new(String::from("\n\npaste\n TOUCH \nbdiff\n"));

    let word_bank = WordBank::from_reader(cursor)?;

    assert_eq!(word_bank.len(), 3);
    assert_arc_eq!(word_bank.all_words(), &["paste", "touch", "bdiff"]);
    Ok(())
}

#[test]
fn word_bank_from_reader_rejects_malformed_words() {
    let cursor = Cursor::new(String::from("paste\nlongword\ntouch\n"));

    assert_matches!(
        WordBank::from_reader(cursor),
        Err(SolverError::InvalidWord(word)) if word.as_ref() == "longword"
    );
}

#[test]
fn word_bank_from_iterator_succeeds() -> Result<(), SolverError> {
    let word_bank = WordBank::from_iterator(vec!["", "paste", "Touch "])?;

    assert_eq!(word_bank.len(), 2);
    assert_arc_eq!(word_bank.all_words(), &["paste", "touch"]);
    Ok(())
}

#[test]
fn word_bank_from_iterator_rejects_malformed_words() {
    assert_matches!(
        WordBank::from_iterator(vec!["paste", "pa5te"]),
        Err(SolverError::InvalidWord(_))
    );
}

#[test]
fn word_bank_contains() -> Result<(), SolverError> {
    let word_bank = WordBank::from_iterator(vec!["paste", "touch"])?;

    assert!(word_bank.contains("paste"));
    assert!(!word_bank.contains("bdiff"));
    Ok(())
}

#[test]
fn validate_guess_returns_the_bank_owned_word() -> Result<(), SolverError> {
    let word_bank = WordBank::from_iterator(vec!["paste", "touch"])?;

    let guess = word_bank.validate_guess("  PASTE ")?;

    assert_eq!(guess.as_ref(), "paste");
    assert!(Arc::ptr_eq(&guess, &word_bank.all_words()[0]));
    Ok(())
}

#[test]
fn validate_guess_rejects_malformed_input() -> Result<(), SolverError> {
    let word_bank = WordBank::from_iterator(vec!["paste", "touch"])?;

    assert_matches!(
        word_bank.validate_guess("past"),
        Err(SolverError::InvalidWord(_))
    );
    assert_matches!(
        word_bank.validate_guess("pa5te"),
        Err(SolverError::InvalidWord(_))
    );
    Ok(())
}

#[test]
fn validate_guess_rejects_words_outside_the_vocabulary() -> Result<(), SolverError> {
    let word_bank = WordBank::from_iterator(vec!["paste", "touch"])?;

    assert_matches!(
        word_bank.validate_guess("crash"),
        Err(SolverError::UnknownWord(word)) if word.as_ref() == "crash"
    );
    Ok(())
}

#[test]
fn word_counter_counts_positions() {
    let counter = WordCounter::new(&["paste", "patch", "pgrep"]);

    assert_eq!(counter.num_words_with_letter_at(b'p', 0), 3);
    assert_eq!(counter.num_words_with_letter_at(b'a', 1), 2);
    assert_eq!(counter.num_words_with_letter_at(b'p', 4), 1);
    assert_eq!(counter.num_words_with_letter_at(b'z', 2), 0);
}
