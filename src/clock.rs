use std::{thread::sleep, time::Duration};

/// Paces the game in whole display frames.
pub struct FrameClock {
    frame: Duration,
    frames_per_tick: u32,
}

impl FrameClock {
    pub fn new(frame: Duration, frames_per_tick: u32) -> Self {
        FrameClock { frame, frames_per_tick }
    }

    pub fn tick_interval(&self) -> Duration {
        self.frame * self.frames_per_tick
    }

    /// Blocks for one tick's worth of frames.
    pub fn wait(&self) {
        for _ in 0..self.frames_per_tick {
            sleep(self.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn interval_is_frames_times_frame() {
        let clock = FrameClock::new(Duration::from_millis(20), 4);
        assert_eq!(clock.tick_interval(), Duration::from_millis(80));
    }

    #[test]
    fn wait_blocks_at_least_one_interval() {
        let clock = FrameClock::new(Duration::from_millis(2), 3);
        let start = Instant::now();
        clock.wait();
        assert!(start.elapsed() >= clock.tick_interval());
    }
}
