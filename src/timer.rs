use std::time::{Duration, Instant};

pub struct Timer {
    instant: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.instant.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let timer = Timer::new();
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }
}
