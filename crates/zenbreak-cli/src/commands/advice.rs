use zenbreak_core::error::Result;
use zenbreak_core::{AdviceSource, Config, Mode, StaticAdvice};

use crate::logging;

pub fn run(mode: &str) -> Result<()> {
    logging::init_stderr();
    let config = Config::load()?;

    let advice = match mode.parse::<Mode>() {
        Ok(mode) => {
            let source = StaticAdvice::new(config.content_latency());
            super::runtime()?.block_on(source.fetch(mode))?
        }
        Err(err) => {
            tracing::warn!(error = %err, "using generic guidance");
            // Any key that fails to parse lands on the fallback entry.
            StaticAdvice::lookup(mode)
        }
    };

    println!("{}", serde_json::to_string_pretty(&advice)?);
    Ok(())
}
