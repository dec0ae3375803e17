//! The player's guess board
//!
//! A fixed-length row of slots. Colors placed here come from the pool, which
//! never runs out, so the same color may sit in several slots at once.

use super::Color;

/// One board position: `None` is an empty slot
pub type Slot = Option<Color>;

/// Ordered row of slots, one per answer position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBoard {
    slots: Vec<Slot>,
}

impl GuessBoard {
    /// Board of `len` empty slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Content of a slot, `None` when empty or out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Slot {
        self.slots.get(index).copied().flatten()
    }

    /// Put `color` in slot `index`, replacing whatever was there
    ///
    /// Returns `false` if `index` is out of range.
    pub fn place(&mut self, index: usize, color: Color) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(color);
                true
            }
            None => false,
        }
    }

    /// Empty slot `index`
    ///
    /// Returns `false` if `index` is out of range.
    pub fn clear(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Exchange two slots
    ///
    /// Swapping with an empty slot moves the color; swapping a slot with
    /// itself changes nothing. Returns `false` if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.slots.len() || j >= self.slots.len() {
            return false;
        }
        self.slots.swap(i, j);
        true
    }

    /// True iff no slot is empty
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// The guessed colors, available only once every slot is filled
    #[must_use]
    pub fn guess(&self) -> Option<Vec<Color>> {
        self.slots.iter().copied().collect()
    }

    /// Truncate from the end or pad with empty slots
    ///
    /// Entries at retained indices are preserved.
    pub fn resize(&mut self, len: usize) {
        self.slots.resize(len, None);
    }

    /// Empty every slot, keeping the length
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }
}
