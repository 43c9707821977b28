use crate::error::PuzzleError;
use crate::MIN_WORD_LENGTH;
use log::debug;

const ALPHABET: usize = 26;

/// Sentinel for "no child" in a node's child table. Slot 0 of the arena is
/// the root, which is never anyone's child.
const NO_CHILD: u32 = 0;

/// One trie node: a fixed 26-slot child table of arena indices plus a flag
/// marking the end of an inserted word.
#[derive(Debug, Clone)]
struct Node {
    children: [u32; ALPHABET],
    is_word: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET],
            is_word: false,
        }
    }
}

/// Prefix-indexed word dictionary.
///
/// An arena-of-nodes trie: nodes live in a flat `Vec` and refer to children
/// by index, so there is no shared ownership and the built structure can be
/// shared read-only across threads. Insert-only; prefixes are never removed.
///
/// `contains_prefix` is the generator's pruning lever: it lets a partial
/// letter sequence be abandoned the instant no dictionary word can extend it.
/// Both queries run in time proportional to the query length, independent of
/// dictionary size.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary (root node only).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            word_count: 0,
        }
    }

    /// Build a dictionary from a word list, applying the standard filter
    /// policy: ASCII-alphabetic words only, normalized to uppercase, length
    /// within `[3, max_word_length]`.
    ///
    /// Returns `PuzzleError::EmptyDictionary` if nothing survives the filter.
    pub fn from_words<I, S>(words: I, max_word_length: usize) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.len() < MIN_WORD_LENGTH || word.len() > max_word_length {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            dictionary.insert(word);
        }
        if dictionary.word_count == 0 {
            return Err(PuzzleError::EmptyDictionary);
        }
        debug!(
            "dictionary built: {} words, {} trie nodes",
            dictionary.word_count,
            dictionary.nodes.len()
        );
        Ok(dictionary)
    }

    fn slot(letter: char) -> usize {
        debug_assert!(letter.is_ascii_alphabetic());
        (letter.to_ascii_uppercase() as u8 - b'A') as usize
    }

    /// Insert a word (normalized to uppercase). Inserting a word that is
    /// already present is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut current = 0usize;
        for letter in word.chars() {
            let slot = Self::slot(letter);
            let child = self.nodes[current].children[slot];
            current = if child == NO_CHILD {
                let index = self.nodes.len() as u32;
                self.nodes.push(Node::new());
                self.nodes[current].children[slot] = index;
                index as usize
            } else {
                child as usize
            };
        }
        if !self.nodes[current].is_word {
            self.nodes[current].is_word = true;
            self.word_count += 1;
        }
    }

    /// Walk the trie along `sequence`, returning the arena index of the node
    /// it ends at, if the path exists.
    fn walk(&self, sequence: &str) -> Option<usize> {
        let mut current = 0usize;
        for letter in sequence.chars() {
            if !letter.is_ascii_alphabetic() {
                return None;
            }
            let child = self.nodes[current].children[Self::slot(letter)];
            if child == NO_CHILD {
                return None;
            }
            current = child as usize;
        }
        Some(current)
    }

    /// Check whether some inserted word begins with `sequence` (including
    /// `sequence` itself being a full word).
    pub fn contains_prefix(&self, sequence: &str) -> bool {
        self.walk(sequence).is_some()
    }

    /// Check whether `sequence` is exactly an inserted word.
    pub fn contains_word(&self, sequence: &str) -> bool {
        match self.walk(sequence) {
            Some(index) => self.nodes[index].is_word,
            None => false,
        }
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
