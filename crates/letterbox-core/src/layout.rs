use crate::error::PuzzleError;
use crate::letters::{GroupSet, LetterSet};
use std::collections::BTreeMap;

/// The puzzle's letter layout: an ordered sequence of letter groups.
///
/// For the square puzzle this is four groups of three letters, one per side.
/// A letter may legally appear in more than one group; its `GroupSet` then
/// carries every group index it occurs in. Group membership is fixed for the
/// lifetime of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    groups: Vec<Vec<char>>,
    // BTreeMap so letter iteration order is deterministic.
    letter_groups: BTreeMap<char, GroupSet>,
    target: LetterSet,
}

impl Layout {
    /// Build a layout from letter groups, normalizing to uppercase.
    ///
    /// Rejects an empty layout, an empty group, more groups than a
    /// `GroupSet` can encode, and non-ASCII-alphabetic letters. These are
    /// the boundary precondition checks; past this point the core assumes
    /// well-formed input.
    pub fn from_groups(groups: &[Vec<char>]) -> Result<Self, PuzzleError> {
        if groups.is_empty() {
            return Err(PuzzleError::EmptyLayout);
        }
        if groups.len() > GroupSet::MAX_GROUPS {
            return Err(PuzzleError::TooManyGroups {
                count: groups.len(),
            });
        }

        let mut normalized = Vec::with_capacity(groups.len());
        let mut letter_groups: BTreeMap<char, GroupSet> = BTreeMap::new();
        let mut target = LetterSet::empty();

        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(PuzzleError::EmptyGroup { index });
            }
            let mut letters = Vec::with_capacity(group.len());
            for &letter in group {
                if !letter.is_ascii_alphabetic() {
                    return Err(PuzzleError::NonAlphabetic { letter });
                }
                let letter = letter.to_ascii_uppercase();
                letters.push(letter);
                letter_groups.entry(letter).or_default().insert(index);
                target.insert(letter);
            }
            normalized.push(letters);
        }

        Ok(Self {
            groups: normalized,
            letter_groups,
            target,
        })
    }

    /// The normalized letter groups, in layout order.
    pub fn groups(&self) -> &[Vec<char>] {
        &self.groups
    }

    /// Number of groups in the layout.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Distinct layout letters in alphabetic order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letter_groups.keys().copied()
    }

    /// The set of groups a letter belongs to. Empty for letters not in the
    /// layout.
    pub fn groups_of(&self, letter: char) -> GroupSet {
        self.letter_groups
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// The full set of distinct letters a solution must cover.
    pub fn target_letters(&self) -> LetterSet {
        self.target
    }
}
