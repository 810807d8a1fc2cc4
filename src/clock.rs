//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

use log::trace;

/// Wall-clock length of one frame at `fps`. Zero `fps` is treated as one.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use lakitu::clock::frame_duration;
/// assert_eq!(frame_duration(50), Duration::from_millis(20));
/// ```
#[must_use]
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Sleeps away whatever is left of each frame so the loop runs at a fixed
/// rate. A frame that overruns is not made up for.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
    ticks: u64,
}

impl FrameClock {
    /// Starts pacing at `fps` frames per second from now.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            frame: frame_duration(fps),
            last_tick: Instant::now(),
            ticks: 0,
        }
    }

    /// Length of one frame.
    #[must_use]
    pub const fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames waited so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time left in the current frame.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last_tick.elapsed())
    }

    /// Blocks until the current frame's slot has elapsed.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if remaining.is_zero() {
            trace!("frame {} overran by {:?}", self.ticks, self.last_tick.elapsed().saturating_sub(self.frame));
        } else {
            thread::sleep(remaining);
        }
        self.ticks += 1;
        self.last_tick = Instant::now();
    }
}
