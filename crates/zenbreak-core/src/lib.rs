//! # ZenBreak Core Library
//!
//! Business logic for the ZenBreak guided-relaxation timer. The terminal UI
//! in `zenbreak-cli` is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Session Controller**: Home → Session → Finished state machine with a
//!   whole-second countdown
//! - **Content**: static guidance per mode, served asynchronously
//! - **Visual Cues**: breathing, eye-rest and meditation animations, each
//!   with its own cadence
//! - **Timers**: scoped tickers that stop when dropped
//!
//! Timers and background tasks never touch state directly; they send
//! [`Message`]s that the owner of the [`SessionController`] applies in order.
//!
//! ## Key Components
//!
//! - [`SessionController`]: session state machine
//! - [`CueStage`]: mounts the visual cue for the running session
//! - [`AdviceSource`]: trait for guidance content providers
//! - [`Config`]: application configuration

pub mod config;
pub mod content;
pub mod cue;
pub mod error;
pub mod events;
pub mod message;
pub mod session;
pub mod timer;

pub use config::Config;
pub use content::{AdviceContent, AdviceSource, StaticAdvice};
pub use cue::{CueStage, VisualCue};
pub use error::{ConfigError, ContentError, CoreError, ValidationError};
pub use events::Event;
pub use message::{Message, MessageReceiver, MessageSender, SessionId};
pub use session::{
    drive_session, format_time, AdviceState, AppPhase, Mode, SessionConfig, SessionController,
};
pub use timer::{Countdown, Ticker};
