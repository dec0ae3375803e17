//! Input reconciliation
//!
//! Every backend (pointer drags, touch tracking, sortable-list callbacks)
//! funnels into the [`Reconciler`] so the board ends up in the same state no
//! matter which gesture produced the edit.

pub mod pointer;
mod reconciler;
pub mod sortable;

pub use hit_test::{HitTest, Role, Scene};
pub use pointer::{PointerTracker, Release};
pub use reconciler::{BoardEdit, DragSession, DragSource, DragState, Reconciler};
pub use sortable::{ListId, SortableAdapter};
