pub mod advice;
pub mod config;
pub mod run;
pub mod tui;

use zenbreak_core::{Config, Mode, SessionConfig, ValidationError};

/// Home-screen selection from the config file, overridden by flags.
pub fn session_config(
    config: &Config,
    mode: Option<&str>,
    minutes: Option<u32>,
) -> Result<SessionConfig, ValidationError> {
    let base = config.session_config()?;
    let mode = match mode {
        Some(key) => key.parse::<Mode>()?,
        None => base.mode,
    };
    SessionConfig::new(mode, minutes.unwrap_or(base.duration_minutes))
}

/// Build the single-threaded runtime every command runs on.
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_defaults() {
        let config = Config::default();
        let cfg = session_config(&config, None, None).unwrap();
        assert_eq!(cfg, SessionConfig::default());

        let cfg = session_config(&config, Some("meditation"), Some(5)).unwrap();
        assert_eq!(cfg.mode, Mode::Meditation);
        assert_eq!(cfg.duration_minutes, 5);
    }

    #[test]
    fn bad_flags_are_rejected() {
        let config = Config::default();
        assert_eq!(
            session_config(&config, Some("yoga"), None),
            Err(ValidationError::UnknownMode("yoga".into()))
        );
        assert_eq!(
            session_config(&config, None, Some(0)),
            Err(ValidationError::ZeroDuration)
        );
    }
}
