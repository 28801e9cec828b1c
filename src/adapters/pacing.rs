use std::time::Duration;

/// Fixed courtesy delay applied before provider requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacer {
    delay: Duration,
}

impl RequestPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    pub async fn pause(&self) {
        if self.is_enabled() {
            tracing::debug!("Waiting {:?} before the next request", self.delay);
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_pause_waits_for_delay() {
        let pacer = RequestPacer::new(Duration::from_millis(30));
        let started = Instant::now();
        pacer.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_disabled_pacer_does_not_wait() {
        let pacer = RequestPacer::disabled();
        assert!(!pacer.is_enabled());
        let started = Instant::now();
        pacer.pause().await;
        assert!(started.elapsed() < Duration::from_millis(30));
    }
}
