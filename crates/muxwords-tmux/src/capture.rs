//! Pane capture: direct `capture-pane -p`, with a paste-buffer relay
//! fallback for tmux builds whose capture-pane cannot print to stdout.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// How pane text is retrieved. Decided once per process by [`probe`],
/// then reused for every capture in the run.
///
/// [`probe`]: CaptureStrategy::probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStrategy {
    /// `capture-pane -p` prints the pane straight to stdout.
    Direct,
    /// `capture-pane` fills the newest paste buffer; the buffer is read
    /// with `show-buffer` and then deleted.
    BufferRelay,
}

impl CaptureStrategy {
    /// One-time startup probe: can `capture-pane -p` run without error?
    pub fn probe(runner: &impl TmuxCommandRunner) -> Self {
        match runner.run(&["capture-pane", "-p"]) {
            Ok(_) => Self::Direct,
            Err(err) => {
                tracing::debug!("capture-pane -p unsupported, relaying via paste buffer: {err}");
                Self::BufferRelay
            }
        }
    }
}

/// Capture a pane's visible text, reaching `scrollback` lines above the
/// visible bottom when given.
///
/// A vanished pane or any failed command yields an empty string: one dead
/// pane must not abort the run.
pub fn capture_pane(
    runner: &impl TmuxCommandRunner,
    strategy: CaptureStrategy,
    pane_id: &str,
    scrollback: Option<u32>,
) -> String {
    let result = match strategy {
        CaptureStrategy::Direct => capture_direct(runner, pane_id, scrollback),
        CaptureStrategy::BufferRelay => capture_via_buffer(runner, pane_id, scrollback),
    };
    match result {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("capture of pane {pane_id} failed, skipping: {err}");
            String::new()
        }
    }
}

fn capture_direct(
    runner: &impl TmuxCommandRunner,
    pane_id: &str,
    scrollback: Option<u32>,
) -> Result<String, TmuxError> {
    let start_line = scrollback.map(|lines| format!("-{lines}"));
    let mut args = vec!["capture-pane", "-p"];
    if let Some(ref start) = start_line {
        args.extend(["-S", start.as_str()]);
    }
    args.extend(["-t", pane_id]);
    runner.run(&args)
}

fn capture_via_buffer(
    runner: &impl TmuxCommandRunner,
    pane_id: &str,
    scrollback: Option<u32>,
) -> Result<String, TmuxError> {
    let start_line = scrollback.map(|lines| format!("-{lines}"));
    let mut args = vec!["capture-pane"];
    if let Some(ref start) = start_line {
        args.extend(["-S", start.as_str()]);
    }
    args.extend(["-t", pane_id]);
    runner.run(&args)?;
    let text = runner.run(&["show-buffer"])?;
    // Best effort: a stale buffer is harmless, the captured text is not lost.
    if let Err(err) = runner.run(&["delete-buffer"]) {
        tracing::debug!("delete-buffer after relay capture failed: {err}");
    }
    Ok(text)
}
