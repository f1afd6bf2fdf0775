//! Delay port interface

use std::time::Duration;

use async_trait::async_trait;

/// Port for suspending a job pipeline between polls and retries.
///
/// Implementations must yield to the runtime rather than block the thread.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
