//! Frame time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Frame` counter owned by
//! the host.  There is no global timer: the host advances a [`FrameClock`]
//! once per frame with the measured elapsed milliseconds and passes the clock
//! (or just its `Frame`) to whichever component needs it.
//!
//! Wall-clock measurement is the host's business; the clock only keeps the
//! bookkeeping (frame number, last duration, running average, fps).

use std::fmt;
use std::ops::{Add, Sub};

/// Weight of the newest sample in the running frame-duration average
/// (roughly a 100-frame window).
const AVERAGE_WEIGHT: f64 = 0.01;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`, or `0` if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

/// Frames elapsed since `rhs`; zero if `rhs` is later.
impl Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Per-host frame bookkeeping, advanced explicitly once per frame.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// The current frame — advanced by [`FrameClock::advance`] unless paused.
    pub frame: Frame,

    /// While `true`, `advance` still records timings but the frame number
    /// stands still.
    pub paused: bool,

    /// Duration of the most recent frame, in milliseconds.
    pub last_frame_duration_ms: u32,

    /// Recency-weighted average frame duration, in milliseconds.  Zero until
    /// the second frame has been recorded.
    pub average_frame_duration_ms: f64,

    /// Frames per second derived from the running average.  Zero until the
    /// average has at least two samples.
    pub fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the end of a frame that took `elapsed_ms` milliseconds.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !self.paused {
            self.frame = self.frame + 1;
        }
        self.last_frame_duration_ms = elapsed_ms;

        // The first frame's duration is dominated by start-up; skip it.
        if self.frame.0 > 1 {
            if self.average_frame_duration_ms <= 0.0 {
                self.average_frame_duration_ms = elapsed_ms as f64;
            } else {
                self.average_frame_duration_ms *= 1.0 - AVERAGE_WEIGHT;
                self.average_frame_duration_ms += AVERAGE_WEIGHT * elapsed_ms as f64;
                self.fps = (1000.0 / self.average_frame_duration_ms) as f32;
            }
        }
    }

    /// Duration of the last frame in seconds, the unit integration expects.
    #[inline]
    pub fn last_frame_secs(&self) -> f32 {
        self.last_frame_duration_ms as f32 * 0.001
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ms, {:.1} fps)", self.frame, self.last_frame_duration_ms, self.fps)
    }
}
