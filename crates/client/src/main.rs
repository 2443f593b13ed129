//! School RPG client binary.
//!
//! Runs a game session without a window: frames come from a RON input
//! script, or from commands typed on stdin, and every event the session
//! publishes is printed to stdout as one JSON line.
//!
//! # Examples
//!
//! ```bash
//! # replay the bundled demo
//! cargo run -p school-client -- crates/client/demos/first_day.ron
//!
//! # play interactively: space, b, up, down, l, m, walk <dx> <dy> [ms], wait [ms], quit
//! cargo run -p school-client
//! ```
mod logging;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use client_bootstrap::{RuntimeConfig, SessionBuilder};
use scene_runtime::{Event, FrameInput, GameSession, Topic};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use crate::script::Command;

/// Upper bound on idle frames spent flushing notifications at exit.
const MAX_FLUSH_FRAMES: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting school client");
    tracing::info!(scene = %config.start_scene, data_dir = %config.data_dir.display(), "Runtime config");

    let mut setup = SessionBuilder::new().config(config).build()?;
    let mut receivers = setup.session.bus().subscribe_multiple(&[
        Topic::Scene,
        Topic::Interaction,
        Topic::Dialogue,
        Topic::Notification,
    ]);
    setup.enter_start_scene();
    print_events(&mut receivers)?;

    let mut session = setup.session;
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let frames = script::load_script(&path)?;
            tracing::info!(frames = frames.len(), script = %path.display(), "Replaying input script");
            for frame in &frames {
                step(&mut session, frame, &mut receivers)?;
            }
        }
        None => run_interactive(&mut session, &mut receivers).await?,
    }

    flush_notifications(&mut session, &mut receivers)?;
    println!("{}", serde_json::to_string(session.state())?);

    tracing::info!("Client shutdown complete");
    Ok(())
}

async fn run_interactive(
    session: &mut GameSession,
    receivers: &mut [(Topic, Receiver<Event>)],
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match script::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Frame(frame)) => step(session, &frame, receivers)?,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

fn step(
    session: &mut GameSession,
    frame: &FrameInput,
    receivers: &mut [(Topic, Receiver<Event>)],
) -> Result<()> {
    session.update(frame);
    print_events(receivers)
}

fn flush_notifications(
    session: &mut GameSession,
    receivers: &mut [(Topic, Receiver<Event>)],
) -> Result<()> {
    let interval = session.config().notification_interval_ms;
    for _ in 0..MAX_FLUSH_FRAMES {
        if session.services().notifications.is_empty() {
            break;
        }
        step(session, &FrameInput::idle(interval), receivers)?;
    }
    Ok(())
}

fn print_events(receivers: &mut [(Topic, Receiver<Event>)]) -> Result<()> {
    for (topic, rx) in receivers.iter_mut() {
        loop {
            match rx.try_recv() {
                Ok(event) => println!("{}", serde_json::to_string(&event)?),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(?topic, skipped, "Event printer lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
    Ok(())
}
