#[macro_use]
extern crate assert_matches;

use cmdle_solver::*;

#[test]
fn result_for_guess_correct() {
    let result = result_for_guess("paste", "paste");

    assert_eq!(
        *result.unwrap().letters(),
        [LetterResult::Correct; WORD_LENGTH]
    );
}

#[test]
fn result_for_guess_none_match() {
    let result = result_for_guess("bdiff", "mount");

    assert_eq!(
        *result.unwrap().letters(),
        [LetterResult::NotPresent; WORD_LENGTH]
    );
}

#[test]
fn result_for_guess_partial() {
    let result = result_for_guess("touch", "chown").unwrap();

    assert_eq!(
        *result.letters(),
        [
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
        ]
    );
}

#[test]
fn result_for_guess_duplicate_letters_consume_the_secret() {
    // "apple" has one 'l' and one 'e': the guess's second 'l' and first 'e'
    // must come back absent rather than double-counting.
    let result = result_for_guess("apple", "allee").unwrap();

    assert_eq!(
        *result.letters(),
        [
            LetterResult::Correct,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );
}

#[test]
fn result_for_guess_correct_positions_claim_first() {
    // Both 'e's in "sheep" line up with "speed", so the budget for 'e' is
    // used up by the green squares.
    let result = result_for_guess("speed", "sheep").unwrap();

    assert_eq!(
        *result.letters(),
        [
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::PresentNotHere,
        ]
    );
}

#[test]
fn result_for_guess_green_count_matches_positional_equality() {
    for (secret, guess) in [("paste", "patch"), ("touch", "torch"), ("which", "while")] {
        let expected_greens = secret
            .bytes()
            .zip(guess.bytes())
            .filter(|(s, g)| s == g)
            .count();
        let result = result_for_guess(secret, guess).unwrap();
        let greens = result
            .letters()
            .iter()
            .filter(|lr| **lr == LetterResult::Correct)
            .count();

        assert_eq!(greens, expected_greens, "secret={} guess={}", secret, guess);
    }
}

#[test]
fn result_for_guess_never_exceeds_letter_multiplicity() {
    for (secret, guess) in [("apple", "allee"), ("speed", "sheep"), ("mount", "mummy")] {
        let result = result_for_guess(secret, guess).unwrap();
        for letter in b'a'..=b'z' {
            let multiplicity = secret.bytes().filter(|b| *b == letter).count();
            let non_absent = guess
                .bytes()
                .zip(result.letters().iter())
                .filter(|(b, lr)| *b == letter && **lr != LetterResult::NotPresent)
                .count();

            assert!(
                non_absent <= multiplicity,
                "secret={} guess={} letter={}",
                secret,
                guess,
                letter as char
            );
        }
    }
}

#[test]
fn result_for_guess_rejects_malformed_words() {
    assert_matches!(
        result_for_guess("paste", "pastes"),
        Err(SolverError::InvalidWord(_))
    );
    assert_matches!(
        result_for_guess("abc", "paste"),
        Err(SolverError::InvalidWord(_))
    );
    assert_matches!(
        result_for_guess("paste", "PASTE"),
        Err(SolverError::InvalidWord(_))
    );
}

#[test]
fn result_pattern_parses_boundary_encoding() {
    let pattern: ResultPattern = "bYgBg".parse().unwrap();

    assert_eq!(
        *pattern.letters(),
        [
            LetterResult::NotPresent,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );
    assert_eq!(pattern.to_string(), "bygbg");
}

#[test]
fn result_pattern_rejects_malformed_encodings() {
    assert_matches!(
        "bygg".parse::<ResultPattern>(),
        Err(SolverError::InvalidResultPattern(_))
    );
    assert_matches!(
        "byggbb".parse::<ResultPattern>(),
        Err(SolverError::InvalidResultPattern(_))
    );
    assert_matches!(
        "bxggb".parse::<ResultPattern>(),
        Err(SolverError::InvalidResultPattern(_))
    );
}

#[test]
fn result_pattern_solved_only_when_all_green() {
    assert!("ggggg".parse::<ResultPattern>().unwrap().is_solved());
    assert!(!"ggggy".parse::<ResultPattern>().unwrap().is_solved());
}

#[test]
fn result_pattern_emoji_rendering() {
    let pattern: ResultPattern = "bygbg".parse().unwrap();

    assert_eq!(pattern.emoji(), "⬛🟨🟩⬛🟩");
}
