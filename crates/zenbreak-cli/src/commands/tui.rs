use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use crossterm::event::{Event as TermEvent, EventStream};
use futures::StreamExt;
use tokio::time::{Instant, MissedTickBehavior};
use zenbreak_core::error::Result;
use zenbreak_core::{message, Config, CueStage, SessionConfig, SessionController, StaticAdvice};

use crate::app::App;
use crate::terminal::{install_panic_hook, TerminalSession};
use crate::{logging, ui};

#[derive(Args, Default)]
pub struct TuiArgs {
    /// Mode selected on the home screen: breathing, eyes or meditation
    #[arg(long)]
    mode: Option<String>,
    /// Duration selected on the home screen, in minutes
    #[arg(long)]
    minutes: Option<u32>,
    /// Append logs to this file (the screen itself never shows logs)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

pub fn run(args: TuiArgs) -> Result<()> {
    if let Some(ref path) = args.log_file {
        logging::init_file(path)?;
    }
    let config = Config::load()?;
    config.validate()?;
    let session_config = super::session_config(&config, args.mode.as_deref(), args.minutes)?;

    super::runtime()?.block_on(event_loop(config, session_config))
}

async fn event_loop(
    config: Config,
    session_config: SessionConfig,
) -> Result<()> {
    let (tx, mut rx) = message::channel();
    let source = Arc::new(StaticAdvice::new(config.content_latency()));
    let controller = SessionController::with_config(session_config, source, tx.clone());
    let mut app = App::new(
        controller,
        CueStage::new(tx),
        config.session.duration_choices.clone(),
    );

    install_panic_hook();
    let mut session = TerminalSession::new()?;
    let mut input = EventStream::new();
    // Redraw cadence for the cue animations; state changes redraw right away.
    let mut frames = tokio::time::interval(config.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!("terminal UI started");
    while !app.should_quit() {
        session
            .terminal()
            .draw(|frame| ui::render(frame, &app, Instant::now()))?;

        tokio::select! {
            _ = frames.tick() => {}
            Some(message) = rx.recv() => {
                app.on_message(message);
            }
            term_event = input.next() => match term_event {
                Some(Ok(TermEvent::Key(key))) => {
                    app.on_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    session.restore();
                    return Err(err.into());
                }
                None => break,
            },
        }
    }

    session.restore();
    tracing::info!("terminal UI closed");
    Ok(())
}
