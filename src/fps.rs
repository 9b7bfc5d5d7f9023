use web_time::{Duration, Instant};

/// How often the frame rate is reported.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented frames and reports the rate once per [`REPORT_INTERVAL`].
///
/// A silent counter still counts but never reports.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    silent: bool,
    frames: u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new(silent: bool, now: Instant) -> Self {
        Self {
            silent,
            frames: 0,
            window_start: now,
        }
    }

    /// Records one frame presented at `now`.
    ///
    /// Once a full interval has elapsed, returns the frames per second over it, logs it unless
    /// silent, and starts a new interval.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < REPORT_INTERVAL {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;

        if self.silent {
            return None;
        }
        log::info!("FPS: {fps:.1} ({:.2} ms/frame)", 1000.0 / fps);
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_interval() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(false, start);
        for i in 1..60 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 16)), None);
        }
        let fps = counter.tick(start + Duration::from_secs(1));
        assert_eq!(fps, Some(60.0));

        // A fresh interval starts after the report.
        assert_eq!(counter.tick(start + Duration::from_millis(1016)), None);
    }

    #[test]
    fn silent_counter_never_reports() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(true, start);
        for i in 1..=300 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 10)), None);
        }
    }
}
