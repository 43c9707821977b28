//! Engine for "word-chain" letter puzzles: a square (or any grouping) of
//! letters where valid words alternate between groups, consecutive words
//! chain tail-letter to head-letter, and a solution must use every distinct
//! puzzle letter.
//!
//! The pipeline is linear, leaf-first:
//!
//! 1. [`Dictionary`] — a prefix trie over the word list, giving O(len)
//!    prefix and word queries for pruning.
//! 2. [`Generator`] — pruned depth-first enumeration of all letter
//!    sequences the layout allows, emitting those the trie confirms as
//!    words.
//! 3. [`ChainSolver`] — breadth-first shortest-chain search over the word
//!    graph, deduplicating (word, letters-used) states.
//!
//! Everything is single-threaded and per-invocation; a built [`Dictionary`]
//! and [`Layout`] are immutable and may be shared read-only across
//! independent solves.
//!
//! ```
//! use letterbox_core::{solve_puzzle, Dictionary, Layout, SolveConfig, SolveOutcome};
//!
//! let layout = Layout::from_groups(&[
//!     vec!['I', 'R', 'Y'],
//!     vec!['O', 'W', 'S'],
//!     vec!['K', 'A', 'M'],
//!     vec!['J', 'D', 'E'],
//! ])?;
//! let dictionary = Dictionary::from_words(["mysado", "okiwerj"], 12)?;
//!
//! let config = SolveConfig { max_word_length: 12, max_solutions: 10 };
//! match solve_puzzle(&layout, &dictionary, &config) {
//!     SolveOutcome::Solved(solutions) => {
//!         assert_eq!(solutions[0].word_count(), 2);
//!     }
//!     other => panic!("no solution: {:?}", other),
//! }
//! # Ok::<(), letterbox_core::PuzzleError>(())
//! ```

mod dictionary;
mod error;
mod generator;
mod layout;
mod letters;
mod solver;

pub use dictionary::Dictionary;
pub use error::PuzzleError;
pub use generator::{Generator, Word};
pub use layout::Layout;
pub use letters::{GroupSet, LetterSet};
pub use solver::{ChainSolver, Solution, SolveOutcome};

use log::info;

/// Minimum legal word length for this puzzle family.
pub const MIN_WORD_LENGTH: usize = 3;

/// Bounds for a solve: how long generated words may be and how many
/// solutions to collect before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub max_word_length: usize,
    pub max_solutions: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_word_length: 8,
            max_solutions: 10,
        }
    }
}

/// Run the full pipeline: generate layout-legal candidate words, then
/// search for the shortest chains covering the layout's letters.
pub fn solve_puzzle(layout: &Layout, dictionary: &Dictionary, config: &SolveConfig) -> SolveOutcome {
    let generator = Generator::new(config.max_word_length);
    let words = generator.generate(layout, dictionary);
    info!(
        "{} candidate words for {} target letters",
        words.len(),
        layout.target_letters().len()
    );

    let solver = ChainSolver::new(config.max_solutions);
    let outcome = solver.solve(&words, layout.target_letters());
    match &outcome {
        SolveOutcome::Solved(solutions) => info!("solved with {} solution(s)", solutions.len()),
        SolveOutcome::NoCandidateWords => info!("no candidate words for this layout"),
        SolveOutcome::NoCoveringSolution => info!("candidates exist but none cover the target"),
    }
    outcome
}
