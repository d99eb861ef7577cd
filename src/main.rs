//! Wordle Game - CLI
//!
//! Terminal word-guessing game with TUI and simple line modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use wordle_game::{
    commands::{PromptGuessSource, run_simple, score_words},
    error::GameError,
    interactive::{App, run_tui},
    output::{ConsoleReporter, print_score_result, print_statistics},
    pool::WordPool,
    wordlists::{WORDS, loader::read_lines},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum attempts per round
    #[arg(short = 'a', long, global = true, default_value = "6")]
    max_attempts: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible secret selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Plain text output in simple mode
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Score one guess against a given secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Build the secret pool from the -w flag
fn load_pool(wordlist: &str) -> Result<WordPool> {
    let pool = match wordlist {
        "embedded" => WordPool::load(WORDS),
        path => {
            let lines = read_lines(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            WordPool::load(lines)
        }
    };
    log::info!("word pool ready with {} words", pool.len());
    Ok(pool)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

/// Turn a setup failure into a user-facing message
fn setup_error(error: GameError, wordlist: &str) -> anyhow::Error {
    match error {
        GameError::PoolExhausted => anyhow!(
            "No words available to play. Check that '{wordlist}' contains 5-letter words."
        ),
        other => other.into(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed, cli.max_attempts),
        Commands::Simple => run_simple_command(
            &cli.wordlist,
            cli.seed,
            cli.max_attempts,
            !cli.no_color && io::stdout().is_terminal(),
        ),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
    }
}

fn run_play_command(wordlist: &str, seed: Option<u64>, max_attempts: usize) -> Result<()> {
    let pool = load_pool(wordlist)?;
    let app = App::new(pool, make_rng(seed), max_attempts)
        .map_err(|e| setup_error(e, wordlist))?;

    let stats = run_tui(app)?;
    if stats.rounds_played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(
    wordlist: &str,
    seed: Option<u64>,
    max_attempts: usize,
    color: bool,
) -> Result<()> {
    let mut pool = load_pool(wordlist)?;
    let mut rng = make_rng(seed);

    println!("Welcome to Wordle (simple CLI). You have {max_attempts} attempts per round.");

    let mut source = PromptGuessSource::new(io::stdin().lock(), io::stdout());
    let mut reporter = ConsoleReporter::new(io::stdout(), color);
    let stats = run_simple(&mut pool, &mut rng, max_attempts, &mut source, &mut reporter)
        .map_err(|e| setup_error(e, wordlist))?;

    if stats.rounds_played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_words(guess, secret)?;
    print_score_result(&result.guess, &result.verdict);
    Ok(())
}
