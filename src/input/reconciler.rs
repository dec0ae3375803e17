//! Drag state machine shared by every input backend
//!
//! Mouse drags, touch tracking and sortable-list callbacks all reduce to the
//! same three gestures: start a drag from a source, drop it on a slot, or
//! cancel it. This module owns the single active drag and turns those
//! gestures into board edits.

use crate::core::{Color, GuessBoard};
use tracing::{debug, trace};

/// Where a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A bottle from the never-empty pool
    Pool(Color),
    /// The bottle sitting in a board slot
    Slot(usize),
}

/// The active drag, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    None,
    FromPool(Color),
    FromSlot(usize),
}

/// Coarse reconciler state, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    DraggingFromPool,
    DraggingFromSlot,
}

/// A board mutation that actually happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEdit {
    /// Pool color written into a slot, replacing its content
    Place { index: usize, color: Color },
    /// Two occupied slots exchanged
    Swap { from: usize, to: usize },
    /// Occupied slot moved onto an empty one
    Move { from: usize, to: usize },
    /// Slot emptied
    Clear { index: usize },
}

impl DragSession {
    #[must_use]
    pub const fn state(self) -> DragState {
        match self {
            Self::None => DragState::Idle,
            Self::FromPool(_) => DragState::DraggingFromPool,
            Self::FromSlot(_) => DragState::DraggingFromSlot,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Turns drag gestures into board edits
///
/// Holds at most one drag. Every drop or cancel returns it to idle.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    session: DragSession,
}

impl Reconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> DragSession {
        self.session
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.session.state()
    }

    /// Begin a drag
    ///
    /// A drag already in progress is cancelled first. Starting from an empty
    /// or out-of-range slot is rejected and leaves no drag active.
    /// Returns whether a drag is now active.
    pub fn start(&mut self, source: DragSource, board: &GuessBoard) -> bool {
        if self.session.is_active() {
            debug!(previous = ?self.session, "new drag replaces unfinished one");
            self.cancel();
        }

        self.session = match source {
            DragSource::Pool(color) => DragSession::FromPool(color),
            DragSource::Slot(index) if board.get(index).is_some() => DragSession::FromSlot(index),
            DragSource::Slot(index) => {
                debug!(index, "drag from empty slot rejected");
                return false;
            }
        };
        trace!(session = ?self.session, "drag started");
        true
    }

    /// Drop the active drag on slot `target`
    ///
    /// Pool drops overwrite the target. Slot drops swap source and target,
    /// which degenerates to a move onto an empty slot and to nothing when
    /// source and target are the same. The drag ends whatever happens.
    pub fn drop_on(&mut self, target: usize, board: &mut GuessBoard) -> Option<BoardEdit> {
        let session = std::mem::take(&mut self.session);

        if target >= board.len() {
            debug!(target, "drop outside the board treated as cancel");
            return None;
        }

        let edit = match session {
            DragSession::None => None,
            DragSession::FromPool(color) => {
                board.place(target, color);
                Some(BoardEdit::Place {
                    index: target,
                    color,
                })
            }
            DragSession::FromSlot(source) if source == target => None,
            DragSession::FromSlot(source) => {
                let target_was_empty = board.get(target).is_none();
                board.swap(source, target).then_some(if target_was_empty {
                    BoardEdit::Move {
                        from: source,
                        to: target,
                    }
                } else {
                    BoardEdit::Swap {
                        from: source,
                        to: target,
                    }
                })
            }
        };

        trace!(?session, ?edit, "drop");
        edit
    }

    /// Abandon the active drag without touching the board
    pub fn cancel(&mut self) {
        if self.session.is_active() {
            trace!(session = ?self.session, "drag cancelled");
        }
        self.session = DragSession::None;
    }

    /// Empty an occupied slot (tap/click removal)
    ///
    /// Independent of any drag in progress. Returns `None` if the slot was
    /// already empty or out of range.
    pub fn remove(index: usize, board: &mut GuessBoard) -> Option<BoardEdit> {
        board.get(index)?;
        board.clear(index);
        Some(BoardEdit::Clear { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    fn full_board() -> GuessBoard {
        let mut b = GuessBoard::new(4);
        for (i, c) in [Red, Blue, Green, Yellow].into_iter().enumerate() {
            b.place(i, c);
        }
        b
    }

    #[test]
    fn pool_drop_overwrites() {
        let mut board = full_board();
        let mut r = Reconciler::new();

        assert!(r.start(DragSource::Pool(Red), &board));
        assert_eq!(r.state(), DragState::DraggingFromPool);
        let edit = r.drop_on(2, &mut board);

        assert_eq!(edit, Some(BoardEdit::Place { index: 2, color: Red }));
        assert_eq!(board.get(2), Some(Red));
        assert_eq!(r.state(), DragState::Idle);
    }

    #[test]
    fn slot_drop_swaps() {
        let mut board = full_board();
        let mut r = Reconciler::new();

        r.start(DragSource::Slot(0), &board);
        let edit = r.drop_on(3, &mut board);

        assert_eq!(edit, Some(BoardEdit::Swap { from: 0, to: 3 }));
        assert_eq!(board.get(0), Some(Yellow));
        assert_eq!(board.get(3), Some(Red));
    }

    #[test]
    fn slot_drop_onto_empty_moves() {
        let mut board = GuessBoard::new(3);
        board.place(0, Blue);
        let mut r = Reconciler::new();

        r.start(DragSource::Slot(0), &board);
        let edit = r.drop_on(2, &mut board);

        assert_eq!(edit, Some(BoardEdit::Move { from: 0, to: 2 }));
        assert_eq!(board.slots(), &[None, None, Some(Blue)]);
    }

    #[test]
    fn slot_drop_on_itself_is_noop() {
        let mut board = full_board();
        let mut r = Reconciler::new();

        r.start(DragSource::Slot(1), &board);
        assert_eq!(r.drop_on(1, &mut board), None);
        assert_eq!(board, full_board());
        assert_eq!(r.session(), DragSession::None);
    }

    #[test]
    fn empty_slot_start_rejected() {
        let mut board = GuessBoard::new(4);
        let mut r = Reconciler::new();

        assert!(!r.start(DragSource::Slot(1), &board));
        assert_eq!(r.session(), DragSession::None);
        assert_eq!(r.drop_on(0, &mut board), None);
        assert_eq!(board, GuessBoard::new(4));
    }

    #[test]
    fn drop_without_session_is_noop() {
        let mut board = full_board();
        let mut r = Reconciler::new();
        assert_eq!(r.drop_on(0, &mut board), None);
        assert_eq!(board, full_board());
    }

    #[test]
    fn drop_out_of_range_cancels() {
        let mut board = full_board();
        let mut r = Reconciler::new();
        r.start(DragSource::Pool(Green), &board);

        assert_eq!(r.drop_on(9, &mut board), None);
        assert_eq!(r.state(), DragState::Idle);
        assert_eq!(board, full_board());
    }

    #[test]
    fn new_start_replaces_active_drag() {
        let mut board = full_board();
        let mut r = Reconciler::new();

        r.start(DragSource::Slot(0), &board);
        r.start(DragSource::Pool(Green), &board);
        assert_eq!(r.session(), DragSession::FromPool(Green));

        r.drop_on(0, &mut board);
        assert_eq!(board.get(0), Some(Green));
        assert_eq!(board.get(1), Some(Blue));
    }

    #[test]
    fn cancel_leaves_board() {
        let board = full_board();
        let mut r = Reconciler::new();
        r.start(DragSource::Slot(2), &board);
        r.cancel();
        assert_eq!(r.state(), DragState::Idle);
        assert_eq!(board, full_board());
    }

    #[test]
    fn remove_clears_only_occupied() {
        let mut board = full_board();
        assert_eq!(
            Reconciler::remove(1, &mut board),
            Some(BoardEdit::Clear { index: 1 })
        );
        assert_eq!(board.get(1), None);
        assert_eq!(Reconciler::remove(1, &mut board), None);
        assert_eq!(Reconciler::remove(7, &mut board), None);
    }
}
