//! The `FrameScheduler` trait implemented by every frame source.

use tm_core::{FrameToken, RunId};

/// One fired (or pending) frame request: which run asked, under which token.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FrameRequest {
    pub token: FrameToken,
    pub run:   RunId,
}

/// A source of "call me before the next paint" invocations.
///
/// Implementations never fire a request twice and never fire a cancelled
/// one.  A request that has already been returned by `take_due` can no
/// longer be cancelled; the consumer must check liveness itself.
pub trait FrameScheduler {
    /// Ask for one future frame on behalf of `run`.
    fn request_frame(&mut self, run: RunId) -> FrameToken;

    /// Revoke a pending request.  Returns `false` if `token` is unknown,
    /// already fired, or already cancelled.
    fn cancel_frame(&mut self, token: FrameToken) -> bool;

    /// Remove and return every request due at the next frame, in request
    /// order.
    fn take_due(&mut self) -> Vec<FrameRequest>;
}
