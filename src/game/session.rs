//! Round lifecycle and the front-end facing API
//!
//! A [`GameSession`] owns the palette, answer, board and history of one
//! player and is the only thing front ends mutate. Gameplay calls never
//! fail: anything not allowed in the current state is ignored and reported
//! through the return value.

use super::config::{GameConfig, MissPolicy};
use crate::core::{Answer, AnswerError, GuessBoard, Grade, History, Palette};
use crate::input::{BoardEdit, DragSession, DragSource, DragState, Reconciler};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// On the start screen; difficulty can be changed
    NotStarted,
    InProgress,
    Won,
}

/// Outcome of [`GameSession::submit_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Not in progress, or the board has empty slots
    Rejected,
    Miss { correct: usize },
    Won { attempts: usize },
}

/// One player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    palette: Palette,
    answer: Option<Answer>,
    board: GuessBoard,
    history: History,
    status: GameStatus,
    reconciler: Reconciler,
    miss_policy: MissPolicy,
    reveal_answer: bool,
    show_history: bool,
    rng: StdRng,
}

impl GameSession {
    /// Fresh session on the start screen
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let palette = Palette::with_size(config.slots);
        let board = GuessBoard::new(palette.len());

        Self {
            palette,
            answer: None,
            board,
            history: History::new(),
            status: GameStatus::NotStarted,
            reconciler: Reconciler::new(),
            miss_policy: config.miss_policy,
            reveal_answer: false,
            show_history: config.show_history,
            rng,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Slot count for the current (or next) round
    #[must_use]
    pub fn difficulty(&self) -> usize {
        self.palette.len()
    }

    #[must_use]
    pub fn board(&self) -> &GuessBoard {
        &self.board
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Slots still empty
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.board.len() - self.board.filled_count()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn drag_session(&self) -> DragSession {
        self.reconciler.session()
    }

    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.reconciler.state()
    }

    #[must_use]
    pub const fn miss_policy(&self) -> MissPolicy {
        self.miss_policy
    }

    /// The answer, only while reveal is switched on
    #[must_use]
    pub fn answer(&self) -> Option<&Answer> {
        if self.reveal_answer {
            self.answer.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn answer_revealed(&self) -> bool {
        self.reveal_answer
    }

    #[must_use]
    pub const fn history_visible(&self) -> bool {
        self.show_history
    }

    // --- Difficulty ---

    /// Add the next palette color and a slot; start screen only
    pub fn grow_difficulty(&mut self) -> bool {
        self.resize_palette(Palette::grow)
    }

    /// Remove the last palette color and slot; start screen only
    pub fn shrink_difficulty(&mut self) -> bool {
        self.resize_palette(Palette::shrink)
    }

    fn resize_palette(&mut self, change: fn(&mut Palette) -> bool) -> bool {
        if self.status != GameStatus::NotStarted {
            debug!(status = ?self.status, "difficulty change ignored outside start screen");
            return false;
        }
        if !change(&mut self.palette) {
            return false;
        }
        self.board.resize(self.palette.len());
        debug!(slots = self.palette.len(), "difficulty changed");
        self.check_invariants();
        true
    }

    // --- Lifecycle ---

    /// Start (or restart) a round with a random answer
    pub fn start_round(&mut self) {
        let answer = Answer::generate(&self.palette, self.difficulty(), &mut self.rng);
        self.begin(answer);
    }

    /// Start a round against a chosen answer
    ///
    /// # Errors
    /// Returns `AnswerError` if the answer doesn't fit the current palette
    /// and difficulty; the session is left unchanged.
    pub fn start_round_with(&mut self, answer: Answer) -> Result<(), AnswerError> {
        let answer = Answer::from_colors(answer.to_vec(), &self.palette, self.difficulty())?;
        self.begin(answer);
        Ok(())
    }

    fn begin(&mut self, answer: Answer) {
        self.answer = Some(answer);
        self.board = GuessBoard::new(self.difficulty());
        self.history.clear();
        self.reconciler.cancel();
        self.reveal_answer = false;
        self.status = GameStatus::InProgress;
        info!(slots = self.difficulty(), "round started");
        self.check_invariants();
    }

    /// Back to the start screen, dropping answer, board and history
    pub fn reset(&mut self) {
        self.answer = None;
        self.board = GuessBoard::new(self.difficulty());
        self.history.clear();
        self.reconciler.cancel();
        self.reveal_answer = false;
        self.status = GameStatus::NotStarted;
        debug!("session reset");
        self.check_invariants();
    }

    /// Grade the board if it is full
    pub fn submit_guess(&mut self) -> Submission {
        if self.status != GameStatus::InProgress {
            return Submission::Rejected;
        }
        let (Some(guess), Some(answer)) = (self.board.guess(), self.answer.as_ref()) else {
            debug!(filled = self.board.filled_count(), "incomplete guess not submitted");
            return Submission::Rejected;
        };

        let grade = Grade::calculate(&guess, answer);
        self.history.record(&guess, grade.correct());
        let attempts = self.history.len();

        let outcome = if grade.is_perfect() {
            self.status = GameStatus::Won;
            self.board.reset();
            self.reconciler.cancel();
            info!(attempts, "round won");
            Submission::Won { attempts }
        } else {
            if self.miss_policy == MissPolicy::Clear {
                self.board.reset();
            }
            info!(correct = grade.correct(), attempts, "guess graded");
            Submission::Miss {
                correct: grade.correct(),
            }
        };

        self.check_invariants();
        outcome
    }

    // --- Board input ---

    /// Begin dragging; ignored unless a round is in progress
    pub fn drag_start(&mut self, source: DragSource) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        self.reconciler.start(source, &self.board)
    }

    /// Drop the active drag on a slot
    pub fn drop(&mut self, target: usize) -> Option<BoardEdit> {
        if self.status != GameStatus::InProgress {
            self.reconciler.cancel();
            return None;
        }
        let edit = self.reconciler.drop_on(target, &mut self.board);
        self.check_invariants();
        edit
    }

    pub fn cancel_drag(&mut self) {
        self.reconciler.cancel();
    }

    /// Empty an occupied slot
    pub fn clear_slot(&mut self, index: usize) -> Option<BoardEdit> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        let edit = Reconciler::remove(index, &mut self.board);
        self.check_invariants();
        edit
    }

    // --- View flags ---

    pub fn reveal_answer(&mut self, on: bool) {
        self.reveal_answer = on;
    }

    pub fn toggle_history(&mut self, on: bool) {
        self.show_history = on;
    }

    fn check_invariants(&self) {
        let slots = self.palette.len();
        debug_assert!(
            (Palette::MIN..=Palette::MAX).contains(&slots),
            "difficulty {slots} out of range"
        );
        debug_assert_eq!(self.board.len(), slots, "board length differs from difficulty");
        if let Some(answer) = &self.answer {
            debug_assert_eq!(answer.len(), slots, "answer length differs from difficulty");
        }
        debug_assert_eq!(
            self.answer.is_some(),
            self.status != GameStatus::NotStarted,
            "answer presence out of step with status"
        );
    }
}
