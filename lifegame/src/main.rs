// main.rs - Terminal Game of Life
//
// Loads the first generation, then redraws and advances it on a fixed
// interval until a limit, a repeat, or Ctrl-C stops it.

mod config;
mod console;
mod driver;

use std::io;

use anyhow::Context;
use clap::Parser;
use conway::patterns;
use log::{info, warn};

use crate::config::{Args, Config};
use crate::console::{Console, clear_screen};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with frames on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    if args.list_patterns {
        for name in patterns::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = Config::from(args);
    let life = config
        .source
        .load(config.size)
        .with_context(|| format!("loading initial state from {}", config.source))?;
    info!(
        "starting {}x{} field from {} ({} live cells, {:?} per generation)",
        life.height(),
        life.width(),
        config.source,
        life.field().population(),
        config.interval
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let mut console = Console::new(io::stdout().lock(), clear_screen(config.clear), config.glyphs);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let (life, reason) = runtime.block_on(driver::run(life, &mut console, &config, shutdown))?;
    info!(
        "stopped at generation {} with {} live cells: {reason}",
        life.generation(),
        life.field().population()
    );
    Ok(())
}
