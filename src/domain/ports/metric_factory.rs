use std::time::Duration;

/// A running timer. Consumed when published so it can only be published once.
pub trait TimeMetric: Send {
    fn name(&self) -> &str;

    fn stop_and_publish(self: Box<Self>) -> Duration;
}

pub trait MetricFactory: Send + Sync {
    fn timer(&self, name: &str) -> Box<dyn TimeMetric>;
}

/// Owns a running [`TimeMetric`] and publishes it exactly once: either through
/// [`TimerGuard::stop_and_publish`] or when the guard is dropped.
pub struct TimerGuard {
    metric: Option<Box<dyn TimeMetric>>,
}

impl TimerGuard {
    pub fn start(factory: &dyn MetricFactory, name: &str) -> Self {
        Self {
            metric: Some(factory.timer(name)),
        }
    }

    pub fn stop_and_publish(mut self) -> Duration {
        self.metric
            .take()
            .map(|metric| metric.stop_and_publish())
            .unwrap_or_default()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(metric) = self.metric.take() {
            tracing::debug!(timer = metric.name(), "Timer published on drop");
            metric.stop_and_publish();
        }
    }
}
