//! `tm-animate`: moves a marker along a waypoint path, one host frame at a
//! time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`pacing`]   | `Pacing`: constant speed or fixed per-segment duration           |
//! | [`state`]    | `RunPhase`, `Progress`, `AnimationState`                          |
//! | [`run`]      | `RunSpec`, `AnimationRun::advance`: the per-frame transition     |
//! | [`animator`] | `Animator<S, K, O>`, `AnimationHandle`: start / cancel / restart |
//! | [`sink`]     | `PositionSink` trait, `RecordingSink`                             |
//! | [`observer`] | `AnimationObserver`, `NoopObserver`, `LogObserver`                |
//! | [`config`]   | `AnimationConfig` (serde / JSON)                                  |
//! | [`error`]    | `AnimateError`, `AnimateResult<T>`                                |
//!
//! # Frame model
//!
//! 1. `Animator::start` validates the path and pacing, creates a `Pending`
//!    run, and requests one frame from the [`FrameScheduler`][tm_frame::FrameScheduler].
//! 2. On each fired frame, `Animator::on_frame` checks the request is still
//!    the run's outstanding one, calls `AnimationRun::advance(now)`, writes
//!    the position to the sink, and requests the next frame unless the run
//!    just completed.
//! 3. `cancel` revokes the outstanding request and drops the run.  A frame
//!    the host already fired for a cancelled run is recognised as stale and
//!    ignored, so it can never overwrite what a newer run wrote.
//!
//! Positions are a planar lerp of the current segment's endpoints.  With
//! constant-speed pacing the segment and ratio come from Haversine distance
//! covered; with per-segment pacing every segment takes the same time.

pub mod animator;
pub mod config;
pub mod error;
pub mod observer;
pub mod pacing;
pub mod run;
pub mod sink;
pub mod state;


pub use animator::{AnimationHandle, Animator};
pub use config::{AnimationConfig, PacingConfig};
pub use error::{AnimateError, AnimateResult};
pub use observer::{AnimationObserver, LogObserver, NoopObserver, RunStart};
pub use pacing::Pacing;
pub use run::{AnimationRun, FrameStep, RunSpec};
pub use sink::{PositionSink, RecordingSink};
pub use state::{AnimationState, Progress, RunPhase};
