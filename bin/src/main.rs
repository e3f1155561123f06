use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::io;
use std::io::Write;
use std::process;
use std::time::Instant;
use wordle_entropy_solver::*;

/// Entropy-based solver for Wordle-style puzzles, using the built-in
/// per-language word lists.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Language code of the word list to use (e.g. EN or ES).
    #[clap(short, long, default_value = "EN")]
    language: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the worst-case candidate count after the opening guess.
    WorstCase,
    /// Compute the best next guess for the steps played so far.
    Suggest {
        /// Comma-separated steps in guess:feedback form, e.g. "tares:00010".
        #[clap(short, long, default_value = "")]
        steps: String,
    },
    /// Play a single game against a known answer.
    Single { word: String },
    /// Solve every word in the list and report the round distribution.
    Benchmark,
    /// Recommend guesses interactively while you play a real game.
    Interactive,
}

fn main() {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let language = match Language::from_code(&args.language) {
        Ok(language) => language,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };
    println!(
        "Language {}: {} possible words.",
        language.code(),
        language.bank().len()
    );

    let outcome = match args.command {
        Command::WorstCase => run_worst_case(&language),
        Command::Suggest { steps } => run_suggest(&steps, &language),
        Command::Single { word } => run_single(&word, &language),
        Command::Benchmark => run_benchmark(&language),
        Command::Interactive => run_interactive(&language),
    };
    if let Err(err) = outcome {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
}

fn run_worst_case(language: &Language) -> Result<(), SolverError> {
    let opener = language.opening_guess();
    let threshold = (0..FeedbackPattern::NUM_CODES)
        .filter_map(|code| FeedbackPattern::from_code(code as u8))
        .map(|pattern| filter_words(language.bank(), &opener, pattern).len())
        .max()
        .unwrap_or(0);

    println!(
        "Opening with '{}' leaves at most {} candidates.",
        opener, threshold
    );
    Ok(())
}

fn run_suggest(raw_steps: &str, language: &Language) -> Result<(), SolverError> {
    let steps = parse_steps(raw_steps)?;
    let guess = best_guess(&steps, language)?;
    let remaining = filter_accumulative(&steps, language.bank());

    println!("Best guess: {}", guess);
    if !steps.is_empty() {
        println!("{} candidates remain.", remaining.len());
        println!(
            "Expected information: {:.3} bits.",
            entropy(&guess, &remaining)
        );
    }
    Ok(())
}

fn parse_steps(raw: &str) -> Result<Vec<GuessStep>, SolverError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (guess, pattern) = part
                .split_once(':')
                .ok_or_else(|| SolverError::InvalidPattern(part.to_string()))?;
            GuessStep::parse(guess, pattern)
        })
        .collect()
}

fn run_single(word: &str, language: &Language) -> Result<(), SolverError> {
    let word = word.trim().to_lowercase();
    match play_game(&word, 6, language) {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            process::exit(1);
        }
    }
    Ok(())
}

fn run_benchmark(language: &Language) -> Result<(), SolverError> {
    let mut num_games_per_round: HashMap<usize, u32> = HashMap::new();
    let mut num_failures = 0;
    for word in language.bank().iter() {
        match play_game(word, 6, language) {
            GameResult::Success(guesses) => {
                *num_games_per_round.entry(guesses.len()).or_insert(0) += 1;
            }
            _ => num_failures += 1,
        }
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<usize> = num_games_per_round.keys().copied().collect();
    num_rounds.sort_unstable();
    for num_round in num_rounds {
        println!("|{}|{}|", num_round, num_games_per_round[&num_round]);
    }
    if num_failures > 0 {
        println!("\nWords not solved within 6 guesses: {}", num_failures);
    }

    let num_games: u32 = num_games_per_round.values().sum();
    if num_games > 0 {
        let average: f64 = num_games_per_round
            .iter()
            .map(|(num_guesses, count)| num_guesses * *count as usize)
            .sum::<usize>() as f64
            / num_games as f64;
        println!("\n**Average number of guesses:** {:.2}", average);
    }
    Ok(())
}

fn run_interactive(language: &Language) -> Result<(), SolverError> {
    println!(
        "After each recommendation, enter the word you played (or press enter\n\
         to play the recommendation) and then the feedback you saw, with one\n\
         digit per letter: 0 = absent, 1 = present, 2 = correct."
    );

    let mut steps: Vec<GuessStep> = Vec::new();
    for round in 1..=6 {
        let recommendation = best_guess(&steps, language)?;
        println!("\nRound {}: I suggest '{}'.", round, recommendation);

        let guess = match read_line("Played word: ")? {
            input if input.is_empty() => recommendation.to_string(),
            input => input,
        };
        let pattern: FeedbackPattern = read_line("Feedback: ")?.parse()?;
        if pattern.is_all_correct() {
            println!("Solved it in {} rounds!", round);
            return Ok(());
        }
        steps.push(GuessStep::parse(&guess, &pattern.to_string())?);

        let remaining = filter_accumulative(&steps, language.bank());
        println!("{} candidates remain.", remaining.len());
        if (1..=10).contains(&remaining.len()) {
            for word in remaining.iter() {
                println!("\t{}", word);
            }
        }
    }

    println!("Out of rounds, sorry!");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, SolverError> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_lowercase())
}
