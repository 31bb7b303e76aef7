//! Letter multisets: subset and equality tests, and the in-place consume/restore pair
//! the combination search backtracks with.
//!
//! A [`LetterBag`] keeps the letters in their original positions. Consuming a word marks
//! one matching position per letter as used instead of removing it, and remembers which
//! positions it marked and what they held, so [`LetterBag::restore`] puts back exactly
//! what was there.

use smallvec::SmallVec;

/// Positions marked by one `consume` call, with the letter each one held
type Marks = SmallVec<[(usize, char); 16]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    /// `None` marks a consumed position
    slots: Vec<Option<char>>,
    /// One entry per outstanding `consume`, most recent last
    undo: Vec<Marks>,
}

impl LetterBag {
    #[must_use]
    pub fn new(letters: &str) -> Self {
        LetterBag { slots: letters.chars().map(Some).collect(), undo: Vec::new() }
    }

    /// Number of letters still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// For each letter of `word`, the first still-available position holding it that
    /// no earlier letter of `word` already claimed. `None` as soon as a letter has no match.
    fn find_marks(&self, word: &str) -> Option<Marks> {
        let mut marks = Marks::new();
        for c in word.chars() {
            let pos = self
                .slots
                .iter()
                .enumerate()
                .position(|(i, slot)| *slot == Some(c) && !marks.iter().any(|&(taken, _)| taken == i))?;
            marks.push((pos, c));
        }
        Some(marks)
    }

    /// Whether every letter of `word`, with multiplicity, is still available.
    #[must_use]
    pub fn fits(&self, word: &str) -> bool {
        self.find_marks(word).is_some()
    }

    /// Mark `word`'s letters as used if they all fit. Returns `false` and leaves the bag
    /// untouched otherwise.
    pub fn consume(&mut self, word: &str) -> bool {
        let Some(marks) = self.find_marks(word) else {
            return false;
        };
        for &(pos, _) in &marks {
            self.slots[pos] = None;
        }
        self.undo.push(marks);
        true
    }

    /// Undo the most recent successful [`LetterBag::consume`], which must have been for `word`.
    ///
    /// The letters written back are the ones recorded by that `consume`.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding `consume` to undo, or if it was for a different
    /// word; either one is a backtracking bug.
    pub fn restore(&mut self, word: &str) {
        let marks = self
            .undo
            .pop()
            .unwrap_or_else(|| panic!("restore(\"{word}\") without a matching consume"));
        assert!(
            marks.iter().map(|&(_, c)| c).eq(word.chars()),
            "restore(\"{word}\") does not match the last consume"
        );
        for (pos, c) in marks {
            debug_assert!(self.slots[pos].is_none(), "position {pos} was not consumed");
            self.slots[pos] = Some(c);
        }
    }
}

/// Whether every letter of `word`, with multiplicity, occurs in `bag`.
///
/// `word` may be shorter than `bag`: `is_subset("cat", "tacos")` holds.
#[must_use]
pub fn is_subset(word: &str, bag: &str) -> bool {
    LetterBag::new(bag).fits(word)
}

/// Whether `a` and `b` are the same multiset of letters, i.e. rearrangements of each other.
#[must_use]
pub fn is_equal_multiset(a: &str, b: &str) -> bool {
    a.len() == b.len() && is_subset(a, b)
}
