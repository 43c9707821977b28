use clap::Parser;
use letterbox_core::{solve_puzzle, Dictionary, Layout, SolveConfig, SolveOutcome};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Solve a letter-chain puzzle: find the shortest sequences of chained
/// dictionary words that use every puzzle letter.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle groups, comma-separated (e.g. "IRY,OWS,KAM,JDE")
    groups: String,

    /// Word-list file, one word per line
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Longest word the generator may build
    #[arg(long, default_value_t = 8)]
    max_word_length: usize,

    /// Stop after this many solutions
    #[arg(long, default_value_t = 10)]
    max_solutions: usize,

    /// Emit the outcome as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Parse a group spec like "IRY,OWS,KAM,JDE" into letter groups. Layout
/// validation proper (empty groups, non-alphabetic letters) happens in the
/// core; this only splits.
fn parse_groups(spec: &str) -> Vec<Vec<char>> {
    spec.split(',').map(|group| group.chars().collect()).collect()
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let layout = Layout::from_groups(&parse_groups(&cli.groups))?;

    let contents = fs::read_to_string(&cli.words)?;
    let dictionary = Dictionary::from_words(contents.lines(), cli.max_word_length)?;
    info!(
        "loaded {} usable words from {}",
        dictionary.word_count(),
        cli.words.display()
    );

    let config = SolveConfig {
        max_word_length: cli.max_word_length,
        max_solutions: cli.max_solutions,
    };
    let outcome = solve_puzzle(&layout, &dictionary, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        SolveOutcome::Solved(solutions) => {
            println!("Found {} optimal solution(s):", solutions.len());
            println!();
            for (index, solution) in solutions.iter().enumerate() {
                println!(
                    "Solution {} ({} words): {}",
                    index + 1,
                    solution.word_count(),
                    solution
                );
            }
        }
        SolveOutcome::NoCandidateWords => {
            println!("No valid words found with the given letters and dictionary.");
        }
        SolveOutcome::NoCoveringSolution => {
            println!("No full solution found.");
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
