use std::fmt;

/// Boundary violations detected before the pipeline runs.
///
/// The three "no result" outcomes (no candidates, no covering chain) are not
/// errors; they are reported through `SolveOutcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The filtered word list yielded zero insertable words.
    EmptyDictionary,

    /// The layout has no groups.
    EmptyLayout,

    /// A layout group contains no letters.
    EmptyGroup { index: usize },

    /// The layout has more groups than a `GroupSet` can encode.
    TooManyGroups { count: usize },

    /// A layout letter is not ASCII-alphabetic.
    NonAlphabetic { letter: char },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::EmptyDictionary => {
                write!(f, "no words survived the dictionary filter")
            }
            PuzzleError::EmptyLayout => write!(f, "puzzle layout has no groups"),
            PuzzleError::EmptyGroup { index } => {
                write!(f, "puzzle group {} contains no letters", index)
            }
            PuzzleError::TooManyGroups { count } => {
                write!(f, "puzzle has {} groups (maximum is 16)", count)
            }
            PuzzleError::NonAlphabetic { letter } => {
                write!(f, "puzzle letter {:?} is not ASCII-alphabetic", letter)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
