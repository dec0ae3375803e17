//! End-to-end rounds driven through the public API

use assert_matches::assert_matches;
use bottle_code::core::{Answer, Color, Color::*, Grade, Palette};
use bottle_code::game::{GameConfig, GameSession, GameStatus, MissPolicy, Submission};
use bottle_code::input::sortable::NodeContent;
use bottle_code::input::{BoardEdit, DragSession, DragSource, DragState, ListId, SortableAdapter};

fn session_with(config: &GameConfig, answer: &[Color]) -> GameSession {
    let mut session = GameSession::new(config);
    let answer = Answer::from_colors(answer.to_vec(), session.palette(), answer.len()).unwrap();
    session.start_round_with(answer).unwrap();
    session
}

fn fill(session: &mut GameSession, colors: &[Color]) {
    for (slot, &color) in colors.iter().enumerate() {
        assert!(session.drag_start(DragSource::Pool(color)));
        assert_matches!(session.drop(slot), Some(BoardEdit::Place { .. }));
    }
}

#[test]
fn miss_scores_positional_matches_only() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    fill(&mut session, &[Red, Blue, Green, Yellow]);

    // Positions 0 and 3 match; blue and green are present but misplaced
    assert_eq!(session.submit_guess(), Submission::Miss { correct: 2 });
    assert_eq!(
        Grade::calculate(&[Red, Blue, Green, Yellow], &[Red, Green, Blue, Yellow]).correct(),
        2
    );
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().last().unwrap().correct(), 2);
}

#[test]
fn exact_guess_wins_and_clears_board() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    fill(&mut session, &[Red, Green, Blue, Yellow]);

    assert_eq!(session.submit_guess(), Submission::Won { attempts: 1 });
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.filled_count(), 0);
    assert!(session.board().slots().iter().all(Option::is_none));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().last().unwrap().correct(), 4);
}

#[test]
fn pool_drop_overwrites_occupied_slot() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    session.drag_start(DragSource::Pool(Blue));
    session.drop(2);

    session.drag_start(DragSource::Pool(Red));
    assert_eq!(session.drop(2), Some(BoardEdit::Place { index: 2, color: Red }));
    assert_eq!(session.board().get(2), Some(Red));
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn slot_drop_swaps_occupied_slots() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    fill(&mut session, &[Red, Blue, Green, Yellow]);

    session.drag_start(DragSource::Slot(0));
    assert_eq!(session.drag_session(), DragSession::FromSlot(0));
    assert_eq!(session.drop(3), Some(BoardEdit::Swap { from: 0, to: 3 }));
    assert_eq!(session.board().get(0), Some(Yellow));
    assert_eq!(session.board().get(3), Some(Red));
}

#[test]
fn drag_from_empty_slot_is_refused() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    session.drag_start(DragSource::Pool(Red));
    session.drop(0);

    assert!(!session.drag_start(DragSource::Slot(1)));
    assert_eq!(session.drag_session(), DragSession::None);
    let before = session.board().clone();
    assert_eq!(session.drop(2), None);
    assert_eq!(session.board(), &before);
}

#[test]
fn incomplete_board_is_not_graded() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    session.drag_start(DragSource::Pool(Red));
    session.drop(0);

    assert_eq!(session.submit_guess(), Submission::Rejected);
    assert!(session.history().is_empty());
    assert_eq!(session.remaining(), 3);
}

#[test]
fn miss_policy_keep_and_clear() {
    let mut keep = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    fill(&mut keep, &[Green, Red, Yellow, Blue]);
    assert_eq!(keep.submit_guess(), Submission::Miss { correct: 0 });
    assert_eq!(keep.filled_count(), 4);

    let config = GameConfig {
        miss_policy: MissPolicy::Clear,
        ..GameConfig::default()
    };
    let mut clear = session_with(&config, &[Red, Green, Blue, Yellow]);
    fill(&mut clear, &[Green, Red, Yellow, Blue]);
    assert_eq!(clear.submit_guess(), Submission::Miss { correct: 0 });
    assert_eq!(clear.filled_count(), 0);
    assert_eq!(clear.history().len(), 1);
}

#[test]
fn full_lifecycle() {
    let mut session = GameSession::new(&GameConfig {
        seed: Some(99),
        ..GameConfig::default()
    });
    assert_eq!(session.status(), GameStatus::NotStarted);
    assert!(session.grow_difficulty());
    assert_eq!(session.difficulty(), 5);

    session.start_round();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(!session.grow_difficulty());
    assert!(session.answer().is_none());

    session.reveal_answer(true);
    let answer = session.answer().unwrap().to_vec();
    assert_eq!(answer.len(), 5);
    fill(&mut session, &answer);
    assert_eq!(session.submit_guess(), Submission::Won { attempts: 1 });

    // Play again from Won
    session.start_round();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.history().is_empty());
    assert!(!session.answer_revealed());

    session.reset();
    assert_eq!(session.status(), GameStatus::NotStarted);
    assert_eq!(session.difficulty(), 5);
    assert!(session.shrink_difficulty());
    assert_eq!(session.palette(), &Palette::with_size(4));
}

#[test]
fn sortable_moves_leave_no_phantoms() {
    let mut session = session_with(&GameConfig::default(), &[Red, Green, Blue, Yellow]);
    let mut adapter = SortableAdapter::new(&session);

    // Clone red from the pool onto slot 1, then move it to slot 3
    adapter.drag(ListId::Pool, 0, ListId::Board, 1, &mut session);
    adapter.drag(ListId::Board, 1, ListId::Board, 3, &mut session);

    let board = adapter.lists().board();
    assert_eq!(board.len(), 4);
    assert_eq!(adapter.lists().pool().len(), 4);
    assert_eq!(board[3].content, NodeContent::Bottle(Red));
    assert_eq!(
        adapter.lists().board_view(),
        session.board().slots().to_vec()
    );
}

#[test]
fn grow_then_shrink_restores_palette() {
    let mut session = GameSession::new(&GameConfig::default());
    let before = session.palette().clone();
    assert!(session.grow_difficulty());
    assert!(session.shrink_difficulty());
    assert_eq!(session.palette(), &before);
    assert_eq!(session.board().len(), 4);
}
