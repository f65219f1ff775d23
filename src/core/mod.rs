pub mod manager;
pub mod services;
pub mod time;

pub use manager::SchoolManager;
pub use time::{Clock, FixedClock, SystemClock};
