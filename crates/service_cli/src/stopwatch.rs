//! Wall-clock timing around pricing runs.

use std::time::{Duration, Instant};

/// Started on construction; observes time only.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts timing.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs `f` and returns its output with the elapsed time.
    pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
        let watch = Self::start();
        let out = f();
        (out, watch.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_returns_value() {
        let (value, elapsed) = Stopwatch::time(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_elapsed_monotone() {
        let watch = Stopwatch::start();
        let a = watch.elapsed();
        let b = watch.elapsed();
        assert!(b >= a);
    }
}
