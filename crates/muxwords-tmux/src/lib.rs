//! muxwords-tmux: tmux IO boundary.
//! Provides subprocess execution, pane listing/selection, and pane capture
//! with a buffer-relay fallback. No tokenization logic — pure IO boundary.

pub mod capture;
pub mod error;
pub mod executor;
pub mod panes;

pub use capture::{CaptureStrategy, capture_pane};
pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use panes::{LIST_PANES_FORMAT, Pane, SelectionPolicy, list_panes, select_panes};
