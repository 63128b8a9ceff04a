use clap::{Parser, Subcommand, ValueEnum};
use cmdle_solver::*;
use colored::Colorize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write as _;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;

mod session;

use session::SessionStore;

/// Helper for guessing a hidden five-letter Unix command: records feedback,
/// narrows the candidates, and suggests what to try next.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the word list, one five-letter command per line.
    #[arg(short = 'f', long, global = true, default_value = "data/commands.txt")]
    words_file: PathBuf,

    /// Strategy for ordering next-guess suggestions.
    #[arg(long, global = true, value_enum, default_value = "most-likely")]
    strategy: StrategyArg,

    /// Whether guesses come from the remaining candidates or the whole list.
    #[arg(long, global = true, value_enum, default_value = "candidate")]
    scope: ScopeArg,

    /// Number of suggestions to show.
    #[arg(long, global = true, default_value_t = 10)]
    limit: usize,

    /// Session file to record guesses in.
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Show result patterns as b/y/g letters instead of tiles or emoji.
    #[arg(long, global = true)]
    letters: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a guess with its observed or simulated result, then suggest.
    Guess {
        /// The five-letter command that was guessed.
        word: String,

        /// The observed result as five b/y/g characters (e.g. bbygg).
        #[arg(long, conflicts_with = "secret")]
        result: Option<String>,

        /// A known secret to compute the result from, instead of --result.
        #[arg(long)]
        secret: Option<String>,
    },
    /// Show the session state and suggestions without recording anything.
    Show,
    /// Start a new session.
    Reset,
    /// Solve every word in the list and write a report log.
    Selftest,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Positional letter frequency (fast).
    MostLikely,
    /// Expected remaining candidates.
    Entropy,
    /// Expected information gain.
    Shannon,
    /// Distinct-letter coverage (exploration only).
    Coverage,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::MostLikely => Strategy::MostLikely,
            StrategyArg::Entropy => Strategy::Entropy,
            StrategyArg::Shannon => Strategy::Shannon,
            StrategyArg::Coverage => Strategy::Coverage,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// Guess only words that can still be the secret.
    Candidate,
    /// Guess from the full word list.
    Words,
}

impl From<ScopeArg> for GuessFrom {
    fn from(arg: ScopeArg) -> GuessFrom {
        match arg {
            ScopeArg::Candidate => GuessFrom::Candidates,
            ScopeArg::Words => GuessFrom::AllWords,
        }
    }
}

fn main() {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let bank = WordBank::from_reader(words_reader)?;
    let store = SessionStore::new(
        args.session_file
            .clone()
            .unwrap_or_else(SessionStore::default_path),
    );

    match &args.command {
        Command::Reset => {
            store.clear()?;
            println!("New session started.");
            Ok(())
        }
        Command::Show => {
            let history = store.load()?;
            report_session(args, &bank, &history)
        }
        Command::Guess {
            word,
            result,
            secret,
        } => {
            let guess = bank.validate_guess(word)?;
            let result = match (result, secret) {
                (Some(encoded), None) => encoded.parse::<ResultPattern>()?,
                (None, Some(raw_secret)) => {
                    let secret = bank.validate_guess(raw_secret)?;
                    result_for_guess(&secret, &guess)?
                }
                _ => return Err("provide exactly one of --result or --secret".into()),
            };
            let history = store.append(GuessRecord::new(guess, result))?;
            report_session(args, &bank, &history)
        }
        Command::Selftest => run_selftest(args, &bank),
    }
}

fn report_session(
    args: &Args,
    bank: &WordBank,
    history: &[GuessRecord],
) -> Result<(), Box<dyn Error>> {
    let candidates = filter_candidates(bank.all_words(), history);
    if candidates.is_empty() {
        return Err(Box::new(SolverError::EmptyCandidateSet));
    }

    print_history(args, history);
    println!("Candidates remaining: {}", candidates.len());

    let strategy: Strategy = args.strategy.into();
    let pool = select_guess_pool(args.scope.into(), bank, &candidates, 0, 0);
    let ranked = strategy.rank(pool, &candidates)?;

    println!("{}", suggestion_label(strategy));
    for suggestion in ranked.iter().take(args.limit) {
        println!(
            "{} {}",
            format_score(strategy, suggestion.score, candidates.len()),
            suggestion.word
        );
    }
    Ok(())
}

fn suggestion_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::MostLikely => "Next guesses:",
        Strategy::Entropy => "Next guesses (expected remaining):",
        Strategy::Shannon => "Next guesses (shannon entropy):",
        Strategy::Coverage => "Next guesses (letters covered):",
    }
}

fn format_score(strategy: Strategy, score: i64, num_candidates: usize) -> String {
    match strategy {
        Strategy::MostLikely | Strategy::Coverage => format!("{:>8}", score),
        // The entropy score is expected eliminations scaled by 1000; show it
        // as the expected number of candidates that would remain.
        Strategy::Entropy => {
            format!("{:>8.2}", num_candidates as f64 - score as f64 / 1000.0)
        }
        Strategy::Shannon => format!("{:>8.3}", score as f64 / 1000.0),
    }
}

fn print_history(args: &Args, history: &[GuessRecord]) {
    if history.is_empty() {
        return;
    }
    if args.letters || args.no_color {
        println!("guess  result");
        for record in history {
            let rendered = if args.letters {
                record.result.to_string()
            } else {
                record.result.emoji()
            };
            println!("{}  {}", record.guess, rendered);
        }
    } else {
        println!("guess/result");
        for record in history {
            println!("{}", tile_row(record));
        }
    }
}

fn tile_row(record: &GuessRecord) -> String {
    record
        .guess
        .chars()
        .zip(record.result.letters().iter())
        .map(|(letter, lr)| {
            let cell = format!(" {} ", letter);
            let styled = match lr {
                LetterResult::Correct => cell.as_str().black().on_green(),
                LetterResult::PresentNotHere => cell.as_str().black().on_yellow(),
                LetterResult::NotPresent => cell.as_str().white().on_bright_black(),
            };
            styled.to_string()
        })
        .collect()
}

fn run_selftest(args: &Args, bank: &WordBank) -> Result<(), Box<dyn Error>> {
    let strategy: Strategy = args.strategy.into();
    let guess_from: GuessFrom = args.scope.into();
    // With candidate scope the opening two guesses still probe the full
    // list, which is how the solver is meant to be driven by hand.
    let (log_suffix, candidate_only_after) = match guess_from {
        GuessFrom::Candidates => ("-candidate", 2),
        GuessFrom::AllWords => ("", 0),
    };
    let log_path = format!("cmdle-{}{}.log", strategy, log_suffix);
    let mut log = File::create(&log_path)?;

    let start_time = Instant::now();
    let mut guess_counts: Vec<usize> = Vec::new();
    let mut unsolved = 0usize;
    for secret in bank.all_words() {
        match play_game(secret, bank, strategy, guess_from, candidate_only_after, 128)? {
            GameResult::Solved(guesses) => {
                emit(
                    &mut log,
                    &format!(
                        "secret={} guesses={} path={}",
                        secret,
                        guesses.len(),
                        join_words(&guesses)
                    ),
                )?;
                guess_counts.push(guesses.len());
            }
            GameResult::OutOfGuesses(guesses) => {
                emit(
                    &mut log,
                    &format!("secret={} unsolved path={}", secret, join_words(&guesses)),
                )?;
                unsolved += 1;
            }
            GameResult::UnknownWord => {
                return Err(Box::new(SolverError::UnknownWord(secret.as_ref().into())));
            }
        }
    }
    let elapsed = start_time.elapsed().as_secs_f64();

    let best = guess_counts.iter().min().copied().unwrap_or(0);
    let worst = guess_counts.iter().max().copied().unwrap_or(0);
    let total: usize = guess_counts.iter().sum();
    let average = if guess_counts.is_empty() {
        0.0
    } else {
        total as f64 / guess_counts.len() as f64
    };

    emit(&mut log, "")?;
    emit(&mut log, "Summary")?;
    emit(&mut log, &format!("Strategy: {}", strategy))?;
    emit(&mut log, &format!("Games: {}", bank.len()))?;
    if unsolved > 0 {
        emit(&mut log, &format!("Unsolved: {}", unsolved))?;
    }
    emit(&mut log, &format!("Best: {} guesses", best))?;
    emit(&mut log, &format!("Worst: {} guesses", worst))?;
    emit(&mut log, &format!("Average: {:.2} guesses", average))?;
    emit(&mut log, &format!("Total time: {:.2} seconds", elapsed))?;
    emit(
        &mut log,
        &format!(
            "Time per game: {:.2} ms",
            elapsed / bank.len() as f64 * 1000.0
        ),
    )?;
    emit(&mut log, "Histogram (guesses -> games):")?;
    for (guesses, games) in histogram(&guess_counts) {
        emit(&mut log, &format!("  {} -> {}", guesses, games))?;
    }
    println!("Report written to {}", log_path);
    Ok(())
}

fn histogram(guess_counts: &[usize]) -> BTreeMap<usize, usize> {
    let mut games_per_count = BTreeMap::new();
    for &count in guess_counts {
        *games_per_count.entry(count).or_insert(0) += 1;
    }
    games_per_count
}

fn join_words(words: &[Arc<str>]) -> String {
    words
        .iter()
        .map(|word| word.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn emit(log: &mut File, line: &str) -> io::Result<()> {
    println!("{}", line);
    writeln!(log, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_games_per_guess_count() {
        let games_per_count = histogram(&[1, 2, 2, 3]);

        assert_eq!(
            games_per_count.into_iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn score_formatting_per_strategy() {
        assert_eq!(format_score(Strategy::MostLikely, 42, 10), "      42");
        assert_eq!(format_score(Strategy::Entropy, 8500, 10), "    1.50");
        assert_eq!(format_score(Strategy::Shannon, 1585, 10), "   1.585");
    }
}
