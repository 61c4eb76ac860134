//! muxwords-core: token extraction from captured pane text.
//! Pure logic, no IO — the tmux boundary lives in muxwords-tmux.

pub mod filter;
pub mod tokenizer;

pub use filter::FilterSpec;
pub use tokenizer::{TokenSet, tokenize};
