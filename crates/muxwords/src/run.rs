//! The driver: selection → capture → tokenize → union → rendering.

use muxwords_core::{FilterSpec, TokenSet, tokenize};
use muxwords_tmux::{
    CaptureStrategy, SelectionPolicy, TmuxCommandRunner, capture_pane, select_panes,
};

/// One full collection run over the live pane set.
///
/// The capture strategy is probed once here and reused for every pane.
/// Panes are processed sequentially in listing order; a pane that fails to
/// capture contributes nothing and the run carries on.
pub fn collect_tokens(
    runner: &impl TmuxCommandRunner,
    policy: SelectionPolicy,
    scrollback: Option<u32>,
    filter: &FilterSpec,
) -> TokenSet {
    let strategy = CaptureStrategy::probe(runner);
    let pane_ids = select_panes(runner, policy);
    tracing::debug!(
        "collecting from {} pane(s) via {strategy:?}",
        pane_ids.len()
    );

    let mut tokens = TokenSet::new();
    for pane_id in &pane_ids {
        let text = capture_pane(runner, strategy, pane_id, scrollback);
        tokens.extend(tokenize(&text, filter));
    }
    tokens
}

/// Render the final set: one token per line, or a JSON array.
pub fn render(tokens: &TokenSet, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(tokens)?)
    } else {
        Ok(tokens.iter().cloned().collect::<Vec<_>>().join("\n"))
    }
}
