//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// How often the measured frame rate is refreshed
const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

/// Decides when the next frame is due and measures the achieved rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
    frames: u64,
    fps: f32,
    fps_frames: u64,
    fps_since: Instant,
}

impl FramePacer {
    /// Pace at `fps` frames per second; the first frame is due at `now`
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_frame: now,
            frames: 0,
            fps: 0.0,
            fps_frames: 0,
            fps_since: now,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should start
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Total frames presented
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last measured frames per second
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Record a presented frame and schedule the next one. A frame that is
    /// a whole interval or more late re-anchors the schedule at `now`
    /// instead of bursting to catch up.
    ///
    /// Returns the new FPS figure when it was refreshed.
    pub fn frame_presented(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }

        let elapsed = now.duration_since(self.fps_since);
        if elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = (self.frames - self.fps_frames) as f32 / elapsed.as_secs_f32();
            self.fps_frames = self.frames;
            self.fps_since = now;
            Some(self.fps)
        } else {
            None
        }
    }
}
