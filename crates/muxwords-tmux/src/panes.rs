//! Pane listing, the list-panes format string, and selection policies.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use serde::{Deserialize, Serialize};

/// Format string for `tmux list-panes -a -F`: a two-flag status prefix,
/// a tab, then the opaque pane id.
pub const LIST_PANES_FORMAT: &str = "#{window_active}#{pane_active}\t#{pane_id}";

/// One pane as reported by `list-panes -a`. Enumerated fresh on every run,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pane {
    /// Pane's containing window is the one currently displayed.
    pub window_active: bool,
    /// Pane is the focused one within its window.
    pub pane_active: bool,
    pub pane_id: String,
}

/// Which panes a run reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Every pane in every window.
    All,
    /// Panes in the currently displayed window. Checks the window-active
    /// flag only; an unfocused pane in the visible window still qualifies.
    #[default]
    VisibleOnly,
    /// Everything except the single currently focused pane.
    OthersOnly,
}

impl SelectionPolicy {
    pub fn admits(self, pane: &Pane) -> bool {
        match self {
            Self::All => true,
            Self::VisibleOnly => pane.window_active,
            Self::OthersOnly => !(pane.window_active && pane.pane_active),
        }
    }
}

/// Execute `tmux list-panes -a` and parse the output.
pub fn list_panes(runner: &impl TmuxCommandRunner) -> Result<Vec<Pane>, TmuxError> {
    let output = runner.run(&["list-panes", "-a", "-F", LIST_PANES_FORMAT])?;
    Ok(parse_list_panes_output(&output))
}

/// Pane ids matching `policy`, in listing order.
///
/// A failed listing (tmux not running, no server socket) degrades to an
/// empty list: downstream treats zero panes as a valid zero-result run.
pub fn select_panes(runner: &impl TmuxCommandRunner, policy: SelectionPolicy) -> Vec<String> {
    match list_panes(runner) {
        Ok(panes) => panes
            .into_iter()
            .filter(|p| policy.admits(p))
            .map(|p| p.pane_id)
            .collect(),
        Err(err) => {
            tracing::debug!("list-panes failed, treating as zero panes: {err}");
            Vec::new()
        }
    }
}

/// Parse `list-panes -a -F LIST_PANES_FORMAT` output. Malformed lines are
/// skipped, not fatal: a run degrades rather than aborts.
pub fn parse_list_panes_output(output: &str) -> Vec<Pane> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Pane> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (status, pane_id) = line.split_once('\t')?;
    let mut flags = status.chars();
    let window_active = flags.next()? == '1';
    let pane_active = flags.next()? == '1';
    if pane_id.is_empty() {
        tracing::debug!("skipping list-panes line with empty pane id: {line:?}");
        return None;
    }
    Some(Pane {
        window_active,
        pane_active,
        pane_id: pane_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(window_active: bool, pane_active: bool, id: &str) -> Pane {
        Pane {
            window_active,
            pane_active,
            pane_id: id.to_string(),
        }
    }

    #[test]
    fn parse_focused_pane() {
        let panes = parse_list_panes_output("11\t%0\n");
        assert_eq!(panes, vec![pane(true, true, "%0")]);
    }

    #[test]
    fn parse_all_flag_combinations() {
        let output = "11\t%1\n10\t%2\n01\t%3\n00\t%4\n";
        let panes = parse_list_panes_output(output);
        assert_eq!(panes.len(), 4);
        assert!(panes[0].window_active && panes[0].pane_active);
        assert!(panes[1].window_active && !panes[1].pane_active);
        assert!(!panes[2].window_active && panes[2].pane_active);
        assert!(!panes[3].window_active && !panes[3].pane_active);
    }

    #[test]
    fn parse_preserves_listing_order() {
        let panes = parse_list_panes_output("00\t%9\n11\t%0\n10\t%5\n");
        let ids: Vec<&str> = panes.iter().map(|p| p.pane_id.as_str()).collect();
        assert_eq!(ids, ["%9", "%0", "%5"]);
    }

    #[test]
    fn parse_skips_blank_and_malformed_lines() {
        let output = "\n11\t%0\nnot a pane line\n1\t%2\n\t%3\n";
        let panes = parse_list_panes_output(output);
        assert_eq!(panes, vec![pane(true, true, "%0")]);
    }

    #[test]
    fn parse_empty_output() {
        assert!(parse_list_panes_output("").is_empty());
    }

    #[test]
    fn policy_truth_table() {
        let panes = [pane(true, true, "%1"), pane(true, false, "%2"), pane(false, false, "%3")];
        let ids = |policy: SelectionPolicy| -> Vec<&str> {
            panes
                .iter()
                .filter(|p| policy.admits(p))
                .map(|p| p.pane_id.as_str())
                .collect()
        };
        assert_eq!(ids(SelectionPolicy::All), ["%1", "%2", "%3"]);
        assert_eq!(ids(SelectionPolicy::VisibleOnly), ["%1", "%2"]);
        assert_eq!(ids(SelectionPolicy::OthersOnly), ["%2", "%3"]);
    }

    #[test]
    fn visible_only_ignores_pane_active() {
        // window-active alone qualifies, even when some other pane has focus
        assert!(SelectionPolicy::VisibleOnly.admits(&pane(true, false, "%7")));
        assert!(!SelectionPolicy::VisibleOnly.admits(&pane(false, true, "%8")));
    }

    #[test]
    fn default_policy_is_visible_only() {
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::VisibleOnly);
    }

    #[test]
    fn select_panes_with_mock_runner() {
        struct MockRunner;
        impl TmuxCommandRunner for MockRunner {
            fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
                assert_eq!(args, ["list-panes", "-a", "-F", LIST_PANES_FORMAT]);
                Ok("11\t%1\n10\t%2\n00\t%3\n".to_string())
            }
        }
        let ids = select_panes(&MockRunner, SelectionPolicy::OthersOnly);
        assert_eq!(ids, ["%2", "%3"]);
    }

    #[test]
    fn select_panes_degrades_to_empty_on_failure() {
        struct NoServer;
        impl TmuxCommandRunner for NoServer {
            fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
                Err(TmuxError::CommandFailed(
                    "exit code 1: no server running".to_string(),
                ))
            }
        }
        assert!(select_panes(&NoServer, SelectionPolicy::All).is_empty());
    }
}
