use crate::dictionary::Dictionary;
use crate::layout::Layout;
use crate::letters::{GroupSet, LetterSet};
use crate::MIN_WORD_LENGTH;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An immutable candidate word: its uppercase text plus the set of distinct
/// letters it contains.
///
/// Candidates are canonical by text; the same letter sequence reached through
/// different search paths is one `Word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

impl Word {
    /// Create a word from its text, normalizing to uppercase.
    pub fn new(text: &str) -> Self {
        debug_assert!(!text.is_empty());
        let text = text.to_ascii_uppercase();
        let letters = LetterSet::from_word(&text);
        Self { text, letters }
    }

    /// The word's uppercase text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The set of distinct letters in the word.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The first letter of the word.
    pub fn first(&self) -> char {
        self.text.as_bytes()[0] as char
    }

    /// The last letter of the word.
    pub fn last(&self) -> char {
        self.text.as_bytes()[self.text.len() - 1] as char
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Generates every dictionary word spellable under the layout's adjacency
/// rule: no two consecutive letters may come from the same group.
///
/// The exploration is a depth-first expansion from each distinct layout
/// letter, pruned by `Dictionary::contains_prefix` so only
/// dictionary-consistent sequences are ever extended.
#[derive(Debug, Clone)]
pub struct Generator {
    max_word_length: usize,
}

impl Generator {
    /// Create a generator bounded by `max_word_length`.
    pub fn new(max_word_length: usize) -> Self {
        Self { max_word_length }
    }

    /// Generate all candidate words for the layout, deduplicated by text,
    /// in discovery order (deterministic: start letters and extensions are
    /// tried in alphabetic order).
    ///
    /// A `max_word_length` below 3 yields no candidates, since 3 is the
    /// minimum legal word length for this puzzle family.
    pub fn generate(&self, layout: &Layout, dictionary: &Dictionary) -> Vec<Word> {
        let mut words = Vec::new();
        if self.max_word_length < MIN_WORD_LENGTH {
            return words;
        }

        let letters: Vec<char> = layout.letters().collect();
        let mut seen = HashSet::new();
        let mut sequence = String::with_capacity(self.max_word_length);

        for &letter in &letters {
            sequence.push(letter);
            self.extend(
                layout,
                dictionary,
                &letters,
                &mut sequence,
                layout.groups_of(letter),
                &mut seen,
                &mut words,
            );
            sequence.pop();
        }

        debug!(
            "generated {} candidate words (max length {})",
            words.len(),
            self.max_word_length
        );
        words
    }

    #[allow(clippy::too_many_arguments)]
    fn extend(
        &self,
        layout: &Layout,
        dictionary: &Dictionary,
        letters: &[char],
        sequence: &mut String,
        last_groups: GroupSet,
        seen: &mut HashSet<String>,
        words: &mut Vec<Word>,
    ) {
        // Prefix pruning: abandon the branch the instant no dictionary word
        // can extend it.
        if !dictionary.contains_prefix(sequence) {
            return;
        }
        if sequence.len() >= MIN_WORD_LENGTH
            && dictionary.contains_word(sequence)
            && seen.insert(sequence.clone())
        {
            words.push(Word::new(sequence));
        }
        if sequence.len() >= self.max_word_length {
            return;
        }
        for &letter in letters {
            let groups = layout.groups_of(letter);
            if groups.intersects(last_groups) {
                continue;
            }
            sequence.push(letter);
            self.extend(layout, dictionary, letters, sequence, groups, seen, words);
            sequence.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Layout {
        Layout::from_groups(&[
            vec!['I', 'R', 'Y'],
            vec!['O', 'W', 'S'],
            vec!['K', 'A', 'M'],
            vec!['J', 'D', 'E'],
        ])
        .unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words, 12).unwrap()
    }

    #[test]
    fn test_emits_only_layout_legal_words() {
        let layout = square();
        // JOKER alternates groups; WARY has R and Y in the same group;
        // ROOKIE repeats O against itself.
        let dictionary = dictionary(&["JOKER", "WARY", "ROOKIE"]);

        let words = Generator::new(12).generate(&layout, &dictionary);
        let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();

        assert_eq!(texts, vec!["JOKER"]);
    }

    #[test]
    fn test_adjacency_rule_holds_for_every_word() {
        let layout = square();
        let dictionary = dictionary(&["JOKER", "MYSADO", "OKIWERJ", "DIM", "MID"]);

        let words = Generator::new(12).generate(&layout, &dictionary);
        assert!(!words.is_empty());

        for word in &words {
            let chars: Vec<char> = word.text().chars().collect();
            assert!(chars.len() >= MIN_WORD_LENGTH);
            assert!(chars.len() <= 12);
            for pair in chars.windows(2) {
                assert!(
                    !layout.groups_of(pair[0]).intersects(layout.groups_of(pair[1])),
                    "consecutive letters {:?} share a group in {}",
                    pair,
                    word
                );
            }
        }
    }

    #[test]
    fn test_max_length_bounds() {
        let layout = square();
        let dictionary = dictionary(&["DIM", "MYSADO"]);

        let words = Generator::new(3).generate(&layout, &dictionary);
        let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["DIM"]);

        // Below the minimum word length nothing can be emitted.
        assert!(Generator::new(2).generate(&layout, &dictionary).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let layout = square();
        let dictionary = dictionary(&["JOKER", "MYSADO", "OKIWERJ", "DIM", "MID"]);
        let generator = Generator::new(12);

        let first = generator.generate(&layout, &dictionary);
        let second = generator.generate(&layout, &dictionary);

        assert_eq!(first, second);
    }

    #[test]
    fn test_word_first_last_and_letters() {
        let word = Word::new("joker");

        assert_eq!(word.text(), "JOKER");
        assert_eq!(word.first(), 'J');
        assert_eq!(word.last(), 'R');
        assert_eq!(word.letters(), LetterSet::from_word("JOKER"));
    }
}
