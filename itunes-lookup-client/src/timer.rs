use std::time::{Duration, Instant};

/// Wall-clock timer for per-request diagnostics. Records duration only;
/// it never cancels or times a request out.
#[derive(Debug)]
pub(crate) struct RequestTimer {
    started: Instant,
}

impl RequestTimer {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_grows_monotonically() {
        let timer = RequestTimer::start();
        std::thread::sleep(Duration::from_millis(10));
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(10));
        let second = timer.elapsed();

        assert!(first >= Duration::from_millis(10));
        assert!(second > first);
    }
}
