use crate::domain::ports::metric_factory::{MetricFactory, TimeMetric};
use std::time::{Duration, Instant};

/// Publishes timers as histograms (in seconds) through the `metrics` facade,
/// so they end up in whatever recorder is installed.
#[derive(Clone, Default)]
pub struct HistogramMetricFactory;

impl HistogramMetricFactory {
    pub fn new() -> Self {
        Self
    }
}

impl MetricFactory for HistogramMetricFactory {
    fn timer(&self, name: &str) -> Box<dyn TimeMetric> {
        Box::new(HistogramTimeMetric {
            name: name.to_string(),
            started_at: Instant::now(),
        })
    }
}

struct HistogramTimeMetric {
    name: String,
    started_at: Instant,
}

impl TimeMetric for HistogramTimeMetric {
    fn name(&self) -> &str {
        &self.name
    }

    fn stop_and_publish(self: Box<Self>) -> Duration {
        let HistogramTimeMetric { name, started_at } = *self;
        let elapsed = started_at.elapsed();
        tracing::trace!(timer = %name, elapsed_ms = elapsed.as_millis() as u64, "Timer published");
        metrics::histogram!(name).record(elapsed.as_secs_f64());
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_reports_elapsed_time() {
        let factory = HistogramMetricFactory::new();
        let timer = factory.timer("JMAP-test");

        assert_eq!(timer.name(), "JMAP-test");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.stop_and_publish() >= Duration::from_millis(2));
    }
}
