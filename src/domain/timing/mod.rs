//! Timing domain module

mod duration;

pub use duration::{
    Duration, DEFAULT_DEADLINE_SECS, DEFAULT_INITIAL_DELAY_SECS, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_RETRY_BACKOFF_SECS,
};
