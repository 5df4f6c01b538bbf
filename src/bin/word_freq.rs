use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordfreq::cs::string::word_frequency::{
    count_file, frequencies, WordFrequencyConfig, DEFAULT_CORPUS_CAPACITY,
};

/// Print how often each word occurs in a text file, most frequent first.
#[derive(Parser, Debug)]
struct Args {
    /// Text file to analyze.
    corpus: PathBuf,

    /// Requested initial capacity of the counting table.
    #[arg(short = 'c', long = "capacity", default_value_t = DEFAULT_CORPUS_CAPACITY)]
    capacity: usize,

    /// Only print the first N words.
    #[arg(short = 'n', long = "top")]
    top: Option<usize>,
}

fn run(args: &Args) -> wordfreq::Result<()> {
    let config = WordFrequencyConfig::default().with_initial_capacity(args.capacity);
    let counts = count_file(&args.corpus, &config)?;
    let result = frequencies(&counts);

    let shown = args.top.unwrap_or(result.len());
    for entry in result.iter().take(shown) {
        println!("{} {}", entry.word, entry.count);
    }

    println!();
    println!("Distinct words: {}", result.len());
    println!("Table capacity: {}", counts.capacity());
    println!("Collisions: {}", counts.collision_count());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
