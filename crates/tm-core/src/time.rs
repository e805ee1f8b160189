//! Frame timestamps and speeds.
//!
//! # Design
//!
//! Hosts deliver one timestamp per frame, in milliseconds, monotonically
//! increasing (the value a browser `requestAnimationFrame` callback
//! receives).  `FrameTime` wraps that value; subtracting two of them gives
//! elapsed milliseconds.
//!
//! `Speed` is always stored in metres per second.  Route speeds are usually
//! quoted in km/h, so `Speed::from_kmh` is the common constructor.

use std::fmt;

// ── FrameTime ────────────────────────────────────────────────────────────────

/// A host frame timestamp in milliseconds.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTime(pub f64);

impl FrameTime {
    pub const ZERO: FrameTime = FrameTime(0.0);

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        FrameTime(secs * 1_000.0)
    }

    #[inline]
    pub fn millis(self) -> f64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`.  Never negative.
    #[inline]
    pub fn since(self, earlier: FrameTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    /// Seconds elapsed from `earlier` to `self`.  Never negative.
    #[inline]
    pub fn secs_since(self, earlier: FrameTime) -> f64 {
        self.since(earlier) / 1_000.0
    }
}

impl std::ops::Add<f64> for FrameTime {
    type Output = FrameTime;
    /// Offset by `rhs` milliseconds.
    #[inline]
    fn add(self, rhs: f64) -> FrameTime {
        FrameTime(self.0 + rhs)
    }
}

impl std::ops::Sub for FrameTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: FrameTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}ms", self.0)
    }
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// A travel speed in metres per second.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed(f64);

impl Speed {
    #[inline]
    pub fn from_mps(mps: f64) -> Self {
        Speed(mps)
    }

    #[inline]
    pub fn from_kmh(kmh: f64) -> Self {
        Speed(kmh / 3.6)
    }

    #[inline]
    pub fn mps(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kmh(self) -> f64 {
        self.0 * 3.6
    }

    /// `true` if the speed can pace a run: finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Seconds needed to cover `distance_m` at this speed.
    #[inline]
    pub fn duration_secs(self, distance_m: f64) -> f64 {
        distance_m / self.0
    }

    /// Metres covered after `secs` seconds.
    #[inline]
    pub fn distance_after(self, secs: f64) -> f64 {
        self.0 * secs
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.kmh())
    }
}
