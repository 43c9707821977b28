use crate::generator::Word;
use crate::letters::LetterSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// An ordered sequence of chained words whose combined letters cover the
/// puzzle's full letter set. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    words: Vec<Word>,
}

impl Solution {
    /// The words of the solution, in chain order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the solution.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The union of distinct letters across all words.
    pub fn coverage(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::empty(), |acc, word| acc | word.letters())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// Result of a chain search.
///
/// The two empty outcomes are distinct on purpose: "the generator found no
/// words at all" and "words exist but no chain covers every letter" call for
/// different fixes (bigger dictionary vs. longer chains).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// Solutions ordered shortest first, discovery order within ties.
    Solved(Vec<Solution>),
    /// The candidate set was empty.
    NoCandidateWords,
    /// Candidates exist but no path covers the full letter set.
    NoCoveringSolution,
}

/// A partial chain during the breadth-first sweep: the word indices walked
/// so far and the union of letters they consume. The current word is the
/// last index.
struct Path {
    words: Vec<usize>,
    current: usize,
    used: LetterSet,
}

/// Finds shortest word chains covering a target letter set.
///
/// Builds a directed graph over candidates (edge A -> B when A's last letter
/// equals B's first) and runs a multi-source breadth-first search over paths
/// through it. The (current word, letters-used) visited table is the
/// correctness-critical piece: it collapses exponentially many equivalent
/// continuations into the first path that reaches each state.
#[derive(Debug, Clone)]
pub struct ChainSolver {
    max_solutions: usize,
}

impl ChainSolver {
    /// Create a solver that stops after `max_solutions` complete solutions.
    pub fn new(max_solutions: usize) -> Self {
        Self { max_solutions }
    }

    /// Successor lists over word indices: i -> j when words[i] chains into
    /// words[j]. Quadratic in candidate count, which is small after
    /// generator pruning.
    fn build_graph(words: &[Word]) -> Vec<Vec<usize>> {
        let mut graph = vec![Vec::new(); words.len()];
        for (i, source) in words.iter().enumerate() {
            for (j, target) in words.iter().enumerate() {
                if i != j && source.last() == target.first() {
                    graph[i].push(j);
                }
            }
        }
        graph
    }

    /// Search for the shortest chains whose letter union equals `target`.
    pub fn solve(&self, words: &[Word], target: LetterSet) -> SolveOutcome {
        if words.is_empty() {
            return SolveOutcome::NoCandidateWords;
        }

        let graph = Self::build_graph(words);
        debug!(
            "chain graph: {} words, {} edges",
            words.len(),
            graph.iter().map(Vec::len).sum::<usize>()
        );

        // Every word is a legal starting point.
        let mut frontier: VecDeque<Path> = words
            .iter()
            .enumerate()
            .map(|(index, word)| Path {
                words: vec![index],
                current: index,
                used: word.letters(),
            })
            .collect();

        // (current word, letters used) -> shortest path length that reached
        // it. Later paths arriving no shorter are redundant and dropped.
        let mut visited: HashMap<(usize, LetterSet), usize> = HashMap::new();
        let mut min_word_count: Option<usize> = None;
        let mut solutions: Vec<Solution> = Vec::new();

        while let Some(path) = frontier.pop_front() {
            // A known solution length bounds every in-progress path.
            if min_word_count.is_some_and(|m| path.words.len() > m) {
                continue;
            }

            if path.used == target {
                min_word_count = Some(path.words.len());
                solutions.push(Solution {
                    words: path.words.iter().map(|&i| words[i].clone()).collect(),
                });
                if solutions.len() >= self.max_solutions {
                    break;
                }
                continue;
            }

            for &next in &graph[path.current] {
                let used = path.used | words[next].letters();
                let length = path.words.len() + 1;
                let state = (next, used);
                let shorter = match visited.get(&state) {
                    Some(&recorded) => length < recorded,
                    None => true,
                };
                if shorter {
                    visited.insert(state, length);
                    let mut extended = path.words.clone();
                    extended.push(next);
                    frontier.push_back(Path {
                        words: extended,
                        current: next,
                        used,
                    });
                }
            }
        }

        if solutions.is_empty() {
            debug!("no chain covers the target letters {}", target);
            return SolveOutcome::NoCoveringSolution;
        }

        // Stable sort by word count. Breadth-first order already guarantees
        // this, so it is an idempotent pass kept for output-order
        // compatibility with the length-sorting puzzle variant.
        solutions.sort_by_key(Solution::word_count);
        debug!("found {} solution(s)", solutions.len());
        SolveOutcome::Solved(solutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t)).collect()
    }

    fn target(letters: &str) -> LetterSet {
        LetterSet::from_word(letters)
    }

    #[test]
    fn test_two_word_chain() {
        // MYSADO ends in O, OKIWERJ starts with O; together they cover the
        // twelve square-puzzle letters.
        let candidates = words(&["MYSADO", "OKIWERJ"]);
        let outcome = ChainSolver::new(10).solve(&candidates, target("IRYOWSKAMJDE"));

        match outcome {
            SolveOutcome::Solved(solutions) => {
                assert_eq!(solutions.len(), 1);
                assert_eq!(solutions[0].word_count(), 2);
                assert_eq!(solutions[0].words()[0].text(), "MYSADO");
                assert_eq!(solutions[0].words()[1].text(), "OKIWERJ");
                assert_eq!(solutions[0].coverage(), target("IRYOWSKAMJDE"));
            }
            other => panic!("expected solutions, got {:?}", other),
        }
    }

    #[test]
    fn test_single_word_solution() {
        let candidates = words(&["FEDCBA", "ABC"]);
        let outcome = ChainSolver::new(10).solve(&candidates, target("ABCDEF"));

        match outcome {
            SolveOutcome::Solved(solutions) => {
                assert_eq!(solutions[0].word_count(), 1);
                assert_eq!(solutions[0].words()[0].text(), "FEDCBA");
            }
            other => panic!("expected solutions, got {:?}", other),
        }
    }

    #[test]
    fn test_solutions_are_shortest_first_and_chained() {
        // One three-word cover and one two-word cover of ABCDEF.
        let candidates = words(&["ABC", "CDE", "EFA", "CDEF"]);
        let outcome = ChainSolver::new(10).solve(&candidates, target("ABCDEF"));

        match outcome {
            SolveOutcome::Solved(solutions) => {
                assert!(!solutions.is_empty());
                let mut last_count = 0;
                for solution in &solutions {
                    assert!(solution.word_count() >= last_count);
                    last_count = solution.word_count();
                    for pair in solution.words().windows(2) {
                        assert_eq!(pair[0].last(), pair[1].first());
                    }
                    assert_eq!(solution.coverage(), target("ABCDEF"));
                }
                assert_eq!(solutions[0].word_count(), 2);
            }
            other => panic!("expected solutions, got {:?}", other),
        }
    }

    #[test]
    fn test_no_candidates() {
        let outcome = ChainSolver::new(10).solve(&[], target("ABC"));
        assert_eq!(outcome, SolveOutcome::NoCandidateWords);
    }

    #[test]
    fn test_no_covering_solution_when_words_do_not_chain() {
        // Both words exist but neither chains into the other, and neither
        // alone covers the target.
        let candidates = words(&["ABC", "DEF"]);
        let outcome = ChainSolver::new(10).solve(&candidates, target("ABCDEF"));

        assert_eq!(outcome, SolveOutcome::NoCoveringSolution);
    }

    #[test]
    fn test_max_solutions_is_monotonic() {
        let candidates = words(&["MYSADO", "OKIWERAJ", "OKIWERJ"]);
        let full = target("IRYOWSKAMJDE");

        let first = match ChainSolver::new(1).solve(&candidates, full) {
            SolveOutcome::Solved(solutions) => solutions,
            other => panic!("expected solutions, got {:?}", other),
        };
        let all = match ChainSolver::new(10).solve(&candidates, full) {
            SolveOutcome::Solved(solutions) => solutions,
            other => panic!("expected solutions, got {:?}", other),
        };

        assert_eq!(first.len(), 1);
        assert_eq!(all.len(), 2);
        // Raising the bound only appends; it never removes or reorders.
        assert_eq!(all[..first.len()], first[..]);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let candidates = words(&["ABC", "CDE", "EFA", "CDEF"]);
        let full = target("ABCDEF");
        let solver = ChainSolver::new(10);

        assert_eq!(solver.solve(&candidates, full), solver.solve(&candidates, full));
    }

    #[test]
    fn test_display_chains_with_arrows() {
        let solution = Solution {
            words: words(&["ABC", "CDE"]),
        };
        assert_eq!(format!("{}", solution), "ABC -> CDE");
    }
}
