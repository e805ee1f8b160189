//! `tm-frame`: the host's per-frame scheduling primitive.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `FrameScheduler` trait, `FrameRequest`                    |
//! | [`queue`]     | `FrameQueue`: host-pumped `FrameScheduler`               |
//!
//! # Frame model (summary)
//!
//! A run asks for exactly one future frame at a time:
//!
//! ```text
//! token = scheduler.request_frame(run)     // at most one pending per run
//! scheduler.cancel_frame(token)            // revoke before it fires
//! due   = scheduler.take_due()             // host: "the next paint is here"
//! ```
//!
//! Every request outstanding when the host calls `take_due` fires once, in
//! request order, with the same timestamp.  Requests made while those frames
//! are processed wait for the following `take_due`.

pub mod queue;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use queue::FrameQueue;
pub use scheduler::{FrameRequest, FrameScheduler};
