//! Browser clock for the simulated service delays

use async_trait::async_trait;
use std::time::Duration;
use sure_circle::service::Clock;

/// Sleeps on `setTimeout` through gloo
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooClock;

#[async_trait(?Send)]
impl Clock for GlooClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
