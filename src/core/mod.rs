pub mod services;
pub mod time;
pub mod tracker;

pub use time::{Clock, FixedClock, SystemClock};
pub use tracker::{AppState, Tracker};
