use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of puzzle letters ('A'..='Z') represented as a 26-bit bitmask.
///
/// Bit i (counting from LSB) is set if the i-th letter of the alphabet is in
/// the set. Insert, contains, and union are O(1), which matters because the
/// chain solver unions and hashes these sets on every search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty letter set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a letter set from the distinct letters of a word.
    ///
    /// Non-ASCII-alphabetic characters are the caller's responsibility to
    /// exclude; they are ignored here.
    pub fn from_word(word: &str) -> Self {
        let mut set = Self::empty();
        for letter in word.chars() {
            if letter.is_ascii_alphabetic() {
                set.insert(letter);
            }
        }
        set
    }

    fn bit(letter: char) -> u32 {
        debug_assert!(letter.is_ascii_alphabetic());
        1 << (letter.to_ascii_uppercase() as u8 - b'A')
    }

    /// Check if the set contains a letter (case-insensitive).
    pub fn contains(self, letter: char) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Insert a letter into the set (normalized to uppercase).
    pub fn insert(&mut self, letter: char) {
        self.0 |= Self::bit(letter);
    }

    /// Number of distinct letters in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every letter of `self` is also in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over the letters in the set in alphabetic order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0..26)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| (b'A' + i as u8) as char)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// A set of group indices represented as a 16-bit bitmask.
///
/// Encodes which layout groups a letter belongs to; the adjacency rule is a
/// single AND of two of these masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GroupSet(u16);

impl GroupSet {
    /// Maximum number of groups a layout may have.
    pub const MAX_GROUPS: usize = 16;

    /// Create an empty group set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Insert a group index into the set.
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < Self::MAX_GROUPS);
        self.0 |= 1 << index;
    }

    /// Check if the set contains a group index.
    pub fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Check if two group sets share any group.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
