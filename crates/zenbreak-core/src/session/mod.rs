mod config;
mod controller;
mod driver;

pub use config::{format_time, AppPhase, Mode, SessionConfig};
pub use controller::{AdviceState, SessionController, TICK_PERIOD};
pub use driver::drive_session;
