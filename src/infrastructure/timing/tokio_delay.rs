//! Tokio timer delay adapter

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::Delay;

/// Delay backed by the tokio timer. Honors paused test time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl TokioDelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
