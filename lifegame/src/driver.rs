// driver.rs - Timed draw/advance loop

use std::fmt;
use std::future::Future;
use std::io::Write;

use anyhow::Context;
use conway::{CycleDetector, Life};
use log::debug;
use tokio::time::{self, MissedTickBehavior};

use crate::config::Config;
use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Cycle,
    Interrupted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::Cycle => "grid repeated a recent state",
            StopReason::Interrupted => "interrupted",
        })
    }
}

/// Draws the current generation and advances once per tick until a stop
/// condition holds or `shutdown` completes.
///
/// The first frame is drawn immediately. The simulation is handed back so the
/// caller can report where it ended.
pub async fn run<W, S>(
    mut life: Life,
    console: &mut Console<W>,
    config: &Config,
    shutdown: S,
) -> anyhow::Result<(Life, StopReason)>
where
    W: Write,
    S: Future<Output = ()>,
{
    let mut ticker = time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cycles = config.stop_on_cycle.then(CycleDetector::default);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => return Ok((life, StopReason::Interrupted)),
            _ = ticker.tick() => {}
        }

        console.draw(&life).context("drawing frame")?;

        if let Some(detector) = cycles.as_mut() {
            if detector.observe(life.field()) {
                return Ok((life, StopReason::Cycle));
            }
        }
        if config.generation_limit.is_some_and(|limit| life.generation() >= limit) {
            return Ok((life, StopReason::GenerationLimit));
        }

        life.advance();
        debug!(
            "generation {} has {} live cells",
            life.generation(),
            life.field().population()
        );
    }
}
