// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This binary plays a batch of Hangman games against the bundled
//! `FrequencyStrategy`/`LocalReferee` pair and reports a score summary. It
//! loads a corpus (and optionally supplementary word lists), builds the
//! bitset index in parallel, then runs `--games` simulated games.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hangman_solver::{
    CoreError, FrequencyStrategy, Guess, Index, LocalReferee, Referee, Status, Strategy,
    StrategyConfig,
};

/// Plays simulated games of Hangman using a bitset-indexed, frequency-based
/// guessing strategy.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the primary corpus file: one upper-cased word per line.
    corpus: PathBuf,
    /// Additional word-list files, appended to the primary corpus.
    wordlists: Vec<PathBuf>,
    /// Number of games to simulate.
    #[clap(short = 'n', long, default_value = "10")]
    games: usize,
    /// Maximum number of wrong guesses a game tolerates before it is lost.
    #[clap(short, long, default_value = "5")]
    tries: usize,
    /// Capacity of the least-used frequency cache.
    #[clap(short, long, default_value = "512")]
    cache: usize,
    /// Maximum number of candidate words inspected per guess.
    #[clap(short, long, default_value = "65536")]
    samples: usize,
    /// Target fraction of the sampled candidates the chosen letter should
    /// occur in.
    #[clap(short = 'p', long = "target-p", default_value = "0.7")]
    target_p: f64,
}

/// Errors that can occur while loading a corpus or word-list file.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// An I/O error occurred while reading the file.
    #[error("could not read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file contained no usable words after trimming blank lines.
    #[error("{path} contains no words")]
    Empty {
        /// The file that turned out to be empty.
        path: PathBuf,
    },
}

/// Top-level error type for the binary: wraps corpus loading and core
/// configuration/index-build failures behind a single `run()` boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Loading the corpus or a word list failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    /// The strategy configuration or the index build failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Reads a newline-delimited word file, trimming, discarding blank lines,
/// and upper-casing every word. Fails with [`CorpusError::Empty`] if the
/// file turns out to hold no usable words.
fn load_corpus(path: &Path) -> Result<Vec<String>, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| CorpusError::Io { path: path.to_path_buf(), source })?;
    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_uppercase())
        .collect();
    if words.is_empty() {
        return Err(CorpusError::Empty { path: path.to_path_buf() });
    }
    Ok(words)
}

/// Loads the primary corpus, then appends every supplementary word list in
/// order.
fn load_words(corpus: &Path, wordlists: &[PathBuf]) -> Result<Vec<String>, CorpusError> {
    let mut words = load_corpus(corpus)?;
    for path in wordlists {
        words.extend(load_corpus(path)?);
    }
    Ok(words)
}

/// Plays a single game to completion, returning the referee's final score
/// and whether it was won.
fn play_one_game(strategy: &dyn Strategy, secret: &str, tries: usize) -> (i64, bool) {
    let mut referee = LocalReferee::new(secret, tries);
    loop {
        match referee.status() {
            Status::Won => return (referee.current_score(), true),
            Status::Lost => return (referee.current_score(), false),
            Status::KeepGuessing => {
                let guess = strategy.next_guess(&referee);
                referee.make_guess(guess);
            }
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    let config = StrategyConfig { sample_size: args.samples, cache_size: args.cache, target_char_p: args.target_p };
    config.validate()?;

    let words = load_words(&args.corpus, &args.wordlists)?;
    let threads = num_cpus::get();
    let index = Index::build(&words, threads)?;
    log::info!("built index over {} words using {} thread(s)", words.len(), threads);

    let strategy = FrequencyStrategy::new(&index, &words, config);

    let mut wins = 0usize;
    let mut total_score = 0i64;
    for game in 0..args.games {
        let secret = &words[game % words.len()];
        let (score, won) = play_one_game(&strategy, secret, args.tries);
        total_score += score;
        if won {
            wins += 1;
        }
        println!("game {:>4}: {:<8} {:>5} points ({})", game + 1, secret, score, if won { "won" } else { "lost" });
    }

    let average = if args.games == 0 { 0.0 } else { total_score as f64 / args.games as f64 };
    println!("---");
    println!("played:  {}", args.games);
    println!("won:     {} ({:.1}%)", wins, if args.games == 0 { 0.0 } else { 100.0 * wins as f64 / args.games as f64 });
    println!("average score: {average:.2}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
