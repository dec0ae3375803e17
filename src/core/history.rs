//! Append-only ledger of submitted guesses

use super::Color;

/// One submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    guess: Vec<Color>,
    correct: usize,
}

impl HistoryEntry {
    #[must_use]
    pub fn guess(&self) -> &[Color] {
        &self.guess
    }

    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }
}

/// Submitted guesses in submission order
///
/// Entries are never edited or reordered; the ledger only grows until the
/// owning session starts a new round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `guess` with its score
    pub fn record(&mut self, guess: &[Color], correct: usize) {
        self.entries.push(HistoryEntry {
            guess: guess.to_vec(),
            correct,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Attempts made this round
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut history = History::new();
        history.record(&[Color::Red, Color::Blue], 0);
        history.record(&[Color::Blue, Color::Red], 2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].correct(), 0);
        assert_eq!(history.last().map(HistoryEntry::correct), Some(2));
    }

    #[test]
    fn snapshot_is_independent_of_source() {
        let mut guess = vec![Color::Red, Color::Blue];
        let mut history = History::new();
        history.record(&guess, 1);
        guess[0] = Color::Green;

        assert_eq!(history.entries()[0].guess(), &[Color::Red, Color::Blue]);
    }
}
