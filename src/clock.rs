use std::thread::sleep;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Blocks until the next tick boundary.
    fn wait_for_tick(&mut self);
}

pub struct FrameLimiter {
    interval: Duration,
    next_tick: Instant,
}

impl FrameLimiter {
    pub fn from_fps(fps: u32) -> Self {
        FrameLimiter::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn new(interval: Duration) -> Self {
        FrameLimiter { interval, next_tick: Instant::now() + interval }
    }
}

impl Clock for FrameLimiter {
    fn wait_for_tick(&mut self) {
        let now = Instant::now();

        if self.next_tick > now {
            sleep(self.next_tick - now);
            self.next_tick += self.interval;
        } else {
            // Overran the tick: start counting again from now, no catch-up
            self.next_tick = now + self.interval;
        }
    }
}
