use std::io::Write;
use std::sync::Arc;

use clap::Args;
use zenbreak_core::error::Result;
use zenbreak_core::{
    drive_session, message, Config, Event, SessionConfig, SessionController, StaticAdvice,
};

use crate::logging;

#[derive(Args)]
pub struct RunArgs {
    /// breathing, eyes or meditation (defaults to the config file)
    #[arg(long)]
    mode: Option<String>,
    /// Session length in minutes (defaults to the config file)
    #[arg(long)]
    minutes: Option<u32>,
}

fn print_event(event: &Event) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string(event)?)?;
    stdout.flush()?;
    Ok(())
}

pub fn run(args: RunArgs) -> Result<()> {
    logging::init_stderr();
    let config = Config::load()?;
    config.validate()?;
    let session_config = super::session_config(&config, args.mode.as_deref(), args.minutes)?;

    super::runtime()?.block_on(run_session(config, session_config))
}

async fn run_session(
    config: Config,
    session_config: SessionConfig,
) -> Result<()> {
    let (tx, mut rx) = message::channel();
    let source = Arc::new(StaticAdvice::new(config.content_latency()));
    let mut controller = SessionController::with_config(session_config, source, tx);

    if let Some(event) = controller.start() {
        print_event(&event)?;
    }

    let mut write_error = None;
    drive_session(&mut controller, &mut rx, |event| {
        if write_error.is_none() {
            write_error = print_event(event).err();
        }
    })
    .await;

    match write_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
