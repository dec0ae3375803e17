//! Sortable-list backend
//!
//! Some front ends hand drag-and-drop to a reorderable-list widget that
//! moves its own visual nodes around while the user drags, then reports
//! `(from list, old index) -> (to list, new index)`. Those notifications are
//! the only thing that mutates the board here. Before applying one, the
//! handler throws away the node the widget relocated or cloned, and after
//! applying it the lists are re-rendered from the session. The visual lists
//! are never read back as game state.
//!
//! [`VisualLists`] stands in for the widget's view: its renderer, like a
//! keyed virtual-DOM diff, rewrites the nodes it owns and leaves nodes it
//! didn't create where they are. A widget node that isn't discarded therefore
//! survives re-rendering as a phantom bottle.

use super::reconciler::{BoardEdit, DragSource};
use crate::core::Color;
use crate::game::GameSession;
use tracing::debug;

/// Which visual list a node lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListId {
    Pool,
    Board,
}

/// Who created a visual node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// Rendered from session state
    App,
    /// Created by the widget while visualizing a drag
    Widget,
}

/// What a visual node shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeContent {
    Bottle(Color),
    EmptySlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualNode {
    pub id: u64,
    pub owner: Owner,
    pub content: NodeContent,
}

/// The widget's move notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub from: ListId,
    pub old_index: usize,
    pub to: ListId,
    pub new_index: usize,
    /// The widget inserted a copy and left the original in place
    pub cloned: bool,
}

/// The pool and board lists as the widget displays them
#[derive(Debug, Clone, Default)]
pub struct VisualLists {
    pool: Vec<VisualNode>,
    board: Vec<VisualNode>,
    next_id: u64,
}

impl VisualLists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pool(&self) -> &[VisualNode] {
        &self.pool
    }

    #[must_use]
    pub fn board(&self) -> &[VisualNode] {
        &self.board
    }

    /// Board as displayed: one entry per visual node
    #[must_use]
    pub fn board_view(&self) -> Vec<Option<Color>> {
        self.board
            .iter()
            .map(|n| match n.content {
                NodeContent::Bottle(c) => Some(c),
                NodeContent::EmptySlot => None,
            })
            .collect()
    }

    fn list_mut(&mut self, list: ListId) -> &mut Vec<VisualNode> {
        match list {
            ListId::Pool => &mut self.pool,
            ListId::Board => &mut self.board,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Re-render the app-owned nodes from session state
    ///
    /// Widget-owned nodes keep their positions.
    pub fn render(&mut self, session: &GameSession) {
        let pool: Vec<NodeContent> = session
            .palette()
            .colors()
            .iter()
            .map(|&c| NodeContent::Bottle(c))
            .collect();
        let board: Vec<NodeContent> = session
            .board()
            .slots()
            .iter()
            .map(|s| s.map_or(NodeContent::EmptySlot, NodeContent::Bottle))
            .collect();

        self.render_list(ListId::Pool, &pool);
        self.render_list(ListId::Board, &board);
    }

    fn render_list(&mut self, list: ListId, contents: &[NodeContent]) {
        let foreign: Vec<(usize, VisualNode)> = self
            .list_mut(list)
            .iter()
            .enumerate()
            .filter(|(_, n)| n.owner == Owner::Widget)
            .map(|(i, n)| (i, *n))
            .collect();

        let mut nodes = Vec::with_capacity(contents.len() + foreign.len());
        for &content in contents {
            nodes.push(VisualNode {
                id: self.fresh_id(),
                owner: Owner::App,
                content,
            });
        }
        for (pos, node) in foreign {
            nodes.insert(pos.min(nodes.len()), node);
        }

        *self.list_mut(list) = nodes;
    }

    /// What the widget does to its own lists during a drag
    ///
    /// Pool drags clone the bottle into the target list; board drags
    /// relocate the node itself. Returns the notification the widget then
    /// emits, or `None` if `old_index` doesn't exist.
    pub fn widget_drag(
        &mut self,
        from: ListId,
        old_index: usize,
        to: ListId,
        new_index: usize,
    ) -> Option<MoveEvent> {
        let source = *self.list_mut(from).get(old_index)?;
        let cloned = from == ListId::Pool;

        let node = if cloned {
            VisualNode {
                id: self.fresh_id(),
                owner: Owner::Widget,
                ..source
            }
        } else {
            self.list_mut(from).remove(old_index)
        };

        let target = self.list_mut(to);
        let new_index = new_index.min(target.len());
        target.insert(new_index, node);

        Some(MoveEvent {
            from,
            old_index,
            to,
            new_index,
            cloned,
        })
    }

    /// Undo the widget's own relocation for `event`
    fn discard(&mut self, event: MoveEvent) {
        let target = self.list_mut(event.to);
        if event.new_index >= target.len() {
            return;
        }
        let node = target.remove(event.new_index);
        debug!(id = node.id, cloned = event.cloned, "discarded widget-moved node");

        if !event.cloned {
            let origin = self.list_mut(event.from);
            let at = event.old_index.min(origin.len());
            origin.insert(at, node);
        }
    }
}

/// Applies widget move notifications to a session
#[derive(Debug, Clone, Default)]
pub struct SortableAdapter {
    lists: VisualLists,
}

impl SortableAdapter {
    /// Adapter with lists rendered from `session`
    #[must_use]
    pub fn new(session: &GameSession) -> Self {
        let mut lists = VisualLists::new();
        lists.render(session);
        Self { lists }
    }

    #[must_use]
    pub fn lists(&self) -> &VisualLists {
        &self.lists
    }

    /// Let the widget perform a drag, then handle its notification
    pub fn drag(
        &mut self,
        from: ListId,
        old_index: usize,
        to: ListId,
        new_index: usize,
        session: &mut GameSession,
    ) -> Option<BoardEdit> {
        let event = self.lists.widget_drag(from, old_index, to, new_index)?;
        self.on_move(event, session)
    }

    /// Handle one move notification
    ///
    /// Discards the widget's node, applies the equivalent drag through the
    /// session, and re-renders both lists from state.
    pub fn on_move(&mut self, event: MoveEvent, session: &mut GameSession) -> Option<BoardEdit> {
        self.lists.discard(event);

        let edit = Self::translate(event, session).and_then(|(source, target)| {
            session.drag_start(source);
            session.drop(target)
        });

        self.lists.render(session);
        edit
    }

    /// Source and target slot for a notification, from session state only
    fn translate(event: MoveEvent, session: &GameSession) -> Option<(DragSource, usize)> {
        if event.to != ListId::Board {
            return None;
        }
        let slots = session.board().len();
        if slots == 0 {
            return None;
        }

        let source = match event.from {
            ListId::Pool => DragSource::Pool(session.palette().get(event.old_index)?),
            ListId::Board => DragSource::Slot(event.old_index),
        };
        // A clone dropped past the last slot lands on the last slot
        Some((source, event.new_index.min(slots - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, Palette};
    use crate::game::GameConfig;

    fn session() -> GameSession {
        let mut s = GameSession::new(&GameConfig::default());
        let answer = Answer::from_colors(
            vec![Color::Red, Color::Green, Color::Blue, Color::Yellow],
            &Palette::default(),
            4,
        )
        .unwrap();
        s.start_round_with(answer).unwrap();
        s
    }

    #[test]
    fn pool_clone_places_without_phantom() {
        let mut s = session();
        let mut adapter = SortableAdapter::new(&s);

        let edit = adapter.drag(ListId::Pool, 1, ListId::Board, 2, &mut s);

        assert_eq!(
            edit,
            Some(BoardEdit::Place {
                index: 2,
                color: Color::Blue
            })
        );
        assert_eq!(adapter.lists().board_view(), s.board().slots());
        assert_eq!(adapter.lists().pool().len(), 4);
        assert!(adapter.lists().board().iter().all(|n| n.owner == Owner::App));
    }

    #[test]
    fn skipping_discard_leaves_phantom() {
        let mut s = session();
        let mut lists = VisualLists::new();
        lists.render(&s);

        let event = lists.widget_drag(ListId::Pool, 0, ListId::Board, 1).unwrap();
        s.drag_start(DragSource::Pool(Color::Red));
        s.drop(event.new_index);
        lists.render(&s);

        assert_eq!(lists.board().len(), 5);
        assert_ne!(lists.board_view(), s.board().slots());
    }

    #[test]
    fn board_reorder_swaps_in_state() {
        let mut s = session();
        let mut adapter = SortableAdapter::new(&s);
        adapter.drag(ListId::Pool, 0, ListId::Board, 0, &mut s);
        adapter.drag(ListId::Pool, 3, ListId::Board, 3, &mut s);

        let edit = adapter.drag(ListId::Board, 0, ListId::Board, 3, &mut s);

        assert_eq!(edit, Some(BoardEdit::Swap { from: 0, to: 3 }));
        assert_eq!(s.board().get(0), Some(Color::Yellow));
        assert_eq!(s.board().get(3), Some(Color::Red));
        assert_eq!(adapter.lists().board_view(), s.board().slots());
    }

    #[test]
    fn drop_past_end_targets_last_slot() {
        let mut s = session();
        let mut adapter = SortableAdapter::new(&s);

        adapter.drag(ListId::Pool, 2, ListId::Board, 10, &mut s);

        assert_eq!(s.board().get(3), Some(Color::Green));
        assert_eq!(adapter.lists().board().len(), 4);
    }

    #[test]
    fn drag_out_of_board_restores_view() {
        let mut s = session();
        let mut adapter = SortableAdapter::new(&s);
        adapter.drag(ListId::Pool, 0, ListId::Board, 1, &mut s);
        let before = s.board().clone();

        let edit = adapter.drag(ListId::Board, 1, ListId::Pool, 0, &mut s);

        assert_eq!(edit, None);
        assert_eq!(s.board(), &before);
        assert_eq!(adapter.lists().pool().len(), 4);
        assert_eq!(adapter.lists().board_view(), s.board().slots());
    }

    #[test]
    fn empty_slot_drag_changes_nothing() {
        let mut s = session();
        let mut adapter = SortableAdapter::new(&s);

        let edit = adapter.drag(ListId::Board, 1, ListId::Board, 2, &mut s);

        assert_eq!(edit, None);
        assert_eq!(s.board().filled_count(), 0);
        assert_eq!(adapter.lists().board().len(), 4);
    }
}
