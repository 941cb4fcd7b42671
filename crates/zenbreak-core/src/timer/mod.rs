mod countdown;
mod ticker;

pub use countdown::{Countdown, TickOutcome};
pub use ticker::Ticker;
