//! muxwords: scrape tmux pane contents into a deduplicated token set,
//! for fuzzy completion and quick-paste pickers.

use clap::Parser;
use muxwords::{cli, run};
use muxwords_tmux::TmuxExecutor;

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("MUXWORDS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    let mut executor = TmuxExecutor::new(&args.tmux_bin);
    if let Some(ref path) = args.socket_path {
        executor = executor.with_socket_path(path);
    } else if let Some(ref name) = args.socket_name {
        executor = executor.with_socket_name(name);
    }

    let tokens = run::collect_tokens(&executor, args.policy(), args.scroll, &args.filter());
    let output = run::render(&tokens, args.json)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
