//! Timer adapters

mod tokio_delay;

pub use tokio_delay::TokioDelay;
