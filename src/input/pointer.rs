//! Pointer and touch tracking on top of the hit-test
//!
//! Raw press/move/release samples come in with screen coordinates. Every
//! sample is hit-tested; movement only updates the hover highlight, and the
//! board changes once, at release, using the target under the release point.

use super::hit_test::{HitTest, Role};
use super::reconciler::{BoardEdit, DragSource};
use crate::game::GameSession;
use ratatui::layout::Position;
use tracing::trace;

/// What a release did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No press was being tracked
    Ignored,
    /// Released over a slot; carries the edit, if the drop changed anything
    Dropped(Option<BoardEdit>),
    /// Released away from every slot
    Cancelled,
    /// Press and release on the same occupied slot without moving
    Tapped(Option<BoardEdit>),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Role,
    at: Position,
    moved: bool,
}

/// Follows one pointer from press to release
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    press: Option<Press>,
    hover: Option<usize>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot currently highlighted as the drop target
    #[must_use]
    pub const fn hover(&self) -> Option<usize> {
        self.hover
    }

    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Pointer went down at `point`
    ///
    /// Starts a drag when the point is over a pool bottle or an occupied
    /// slot. Any press still being tracked is abandoned first. Returns
    /// whether a drag started.
    pub fn press<H: HitTest>(
        &mut self,
        point: Position,
        scene: &H,
        session: &mut GameSession,
    ) -> bool {
        if self.press.take().is_some() {
            session.cancel_drag();
        }
        self.hover = None;

        let Some(origin) = scene.target_at(point) else {
            return false;
        };
        let source = match origin {
            Role::Pool(color) => DragSource::Pool(color),
            Role::Slot(index) => DragSource::Slot(index),
            Role::Decoration => return false,
        };

        self.press = Some(Press {
            origin,
            at: point,
            moved: false,
        });
        session.drag_start(source)
    }

    /// Pointer moved to `point`; returns the slot to highlight
    pub fn move_to<H: HitTest>(
        &mut self,
        point: Position,
        scene: &H,
        session: &GameSession,
    ) -> Option<usize> {
        let press = self.press.as_mut()?;
        if point != press.at {
            press.moved = true;
        }

        self.hover = if session.drag_session().is_active() {
            scene.slot_at(point)
        } else {
            None
        };
        trace!(?point, hover = ?self.hover, "pointer moved");
        self.hover
    }

    /// Pointer came up at `point`
    pub fn release<H: HitTest>(
        &mut self,
        point: Position,
        scene: &H,
        session: &mut GameSession,
    ) -> Release {
        self.hover = None;
        let Some(press) = self.press.take() else {
            return Release::Ignored;
        };

        let target = scene.slot_at(point);

        if let (Role::Slot(origin), false) = (press.origin, press.moved)
            && target == Some(origin)
        {
            session.cancel_drag();
            return Release::Tapped(session.clear_slot(origin));
        }

        match target {
            Some(slot) => Release::Dropped(session.drop(slot)),
            None => {
                session.cancel_drag();
                Release::Cancelled
            }
        }
    }

    /// Forget the tracked press, e.g. when the pointer leaves the window
    pub fn abort(&mut self, session: &mut GameSession) {
        if self.press.take().is_some() {
            session.cancel_drag();
        }
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, Color, Palette};
    use crate::game::GameConfig;
    use crate::input::hit_test::Scene;
    use ratatui::layout::Rect;

    /// Pool bottles on row 0, four slots (with nested labels) on row 5
    fn scene() -> Scene {
        let mut scene = Scene::new();
        for (i, color) in Palette::default().colors().iter().enumerate() {
            scene.push(Rect::new(i as u16 * 5, 0, 4, 3), Role::Pool(*color));
        }
        for i in 0..4u16 {
            let slot = scene.push(Rect::new(i * 5, 5, 4, 4), Role::Slot(i as usize));
            scene.push_child(slot, Rect::new(i * 5 + 1, 6, 2, 2), Role::Decoration);
        }
        scene
    }

    fn session() -> GameSession {
        let mut s = GameSession::new(&GameConfig::default());
        let answer = Answer::from_colors(
            vec![Color::Red, Color::Green, Color::Blue, Color::Yellow],
            s.palette(),
            4,
        )
        .unwrap();
        s.start_round_with(answer).unwrap();
        s
    }

    const POOL_BLUE: Position = Position::new(6, 1);
    const SLOT: [Position; 4] = [
        Position::new(0, 5),
        Position::new(5, 5),
        Position::new(10, 5),
        Position::new(15, 5),
    ];

    #[test]
    fn drag_from_pool_drops_at_release() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();

        assert!(p.press(POOL_BLUE, &scene, &mut s));
        assert_eq!(p.move_to(SLOT[1], &scene, &s), Some(1));
        // Hover feedback only, nothing placed yet
        assert_eq!(s.board().get(1), None);
        assert_eq!(p.move_to(SLOT[2], &scene, &s), Some(2));

        let release = p.release(SLOT[2], &scene, &mut s);
        assert_eq!(
            release,
            Release::Dropped(Some(BoardEdit::Place {
                index: 2,
                color: Color::Blue
            }))
        );
        assert_eq!(s.board().get(2), Some(Color::Blue));
        assert_eq!(p.hover(), None);
    }

    #[test]
    fn nested_markup_still_targets_slot() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();

        p.press(POOL_BLUE, &scene, &mut s);
        let inner = Position::new(11, 6);
        p.move_to(inner, &scene, &s);
        p.release(inner, &scene, &mut s);
        assert_eq!(s.board().get(2), Some(Color::Blue));
    }

    #[test]
    fn release_off_board_cancels() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();

        p.press(POOL_BLUE, &scene, &mut s);
        p.move_to(SLOT[0], &scene, &s);
        let release = p.release(Position::new(60, 60), &scene, &mut s);

        assert_eq!(release, Release::Cancelled);
        assert_eq!(s.board().filled_count(), 0);
        assert!(!s.drag_session().is_active());
    }

    #[test]
    fn slot_drag_swaps() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();
        s.drag_start(DragSource::Pool(Color::Red));
        s.drop(0);
        s.drag_start(DragSource::Pool(Color::Yellow));
        s.drop(3);

        p.press(SLOT[0], &scene, &mut s);
        p.move_to(SLOT[3], &scene, &s);
        p.release(SLOT[3], &scene, &mut s);

        assert_eq!(s.board().get(0), Some(Color::Yellow));
        assert_eq!(s.board().get(3), Some(Color::Red));
    }

    #[test]
    fn tap_on_occupied_slot_clears_it() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();
        s.drag_start(DragSource::Pool(Color::Green));
        s.drop(1);

        p.press(SLOT[1], &scene, &mut s);
        let release = p.release(SLOT[1], &scene, &mut s);

        assert_eq!(release, Release::Tapped(Some(BoardEdit::Clear { index: 1 })));
        assert_eq!(s.board().get(1), None);
    }

    #[test]
    fn press_on_empty_slot_starts_nothing() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();

        assert!(!p.press(SLOT[1], &scene, &mut s));
        assert_eq!(p.move_to(SLOT[2], &scene, &s), None);
        assert_eq!(p.release(SLOT[2], &scene, &mut s), Release::Dropped(None));
        assert_eq!(s.board().filled_count(), 0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let scene = scene();
        let mut s = session();
        let mut p = PointerTracker::new();
        assert_eq!(p.release(SLOT[0], &scene, &mut s), Release::Ignored);
    }
}
