//! CLI definition using clap derive.

use clap::Parser;
use muxwords_core::FilterSpec;
use muxwords_tmux::SelectionPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "muxwords",
    version,
    about = "Collect a deduplicated token set from tmux pane contents"
)]
pub struct Cli {
    /// All panes in all windows
    #[arg(short = 'A', long = "all", conflicts_with = "all_but_current")]
    pub all: bool,

    /// All panes but the active one (default: panes in the visible window)
    #[arg(short = 'a', long = "all-but-current")]
    pub all_but_current: bool,

    /// Scrollback lines to capture above the visible bottom
    #[arg(short = 's', long = "scroll", value_name = "NUM")]
    pub scroll: Option<u32>,

    /// Keep only tokens starting with this literal prefix
    #[arg(short = 'p', long = "prefix", value_name = "STR")]
    pub prefix: Option<String>,

    /// Keep only tokens of at least this length
    #[arg(short = 'm', long = "min", value_name = "NUM")]
    pub min: Option<usize>,

    /// Print the token set as a JSON array instead of one per line
    #[arg(long)]
    pub json: bool,

    /// tmux binary to invoke
    #[arg(
        long,
        value_name = "BIN",
        env = "MUXWORDS_TMUX_BIN",
        default_value = "tmux"
    )]
    pub tmux_bin: String,

    /// tmux server socket path (tmux -S)
    #[arg(long, value_name = "PATH")]
    pub socket_path: Option<String>,

    /// tmux server socket name (tmux -L)
    #[arg(long, value_name = "NAME", conflicts_with = "socket_path")]
    pub socket_name: Option<String>,
}

impl Cli {
    pub fn policy(&self) -> SelectionPolicy {
        if self.all {
            SelectionPolicy::All
        } else if self.all_but_current {
            SelectionPolicy::OthersOnly
        } else {
            SelectionPolicy::VisibleOnly
        }
    }

    pub fn filter(&self) -> FilterSpec {
        FilterSpec::new(self.prefix.clone(), self.min)
    }
}
