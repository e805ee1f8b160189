//! `FrameQueue`: a host-pumped frame scheduler.
//!
//! Tests, headless replays, and hosts without their own frame callback use
//! this queue: the host calls [`FrameScheduler::take_due`] once per frame
//! and dispatches the returned requests itself.
//!
//! Tokens are handed out in increasing order, so a `BTreeMap` keyed by token
//! drains in request order for free.

use std::collections::BTreeMap;

use tm_core::{FrameToken, RunId};

use crate::{FrameRequest, FrameScheduler};

/// Pending frame requests keyed by token.
#[derive(Default, Debug)]
pub struct FrameQueue {
    pending:    BTreeMap<FrameToken, RunId>,
    next_token: FrameToken,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// `true` if `token` is still waiting to fire.
    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains_key(&token)
    }

    /// Number of pending requests belonging to `run`.
    pub fn pending_for(&self, run: RunId) -> usize {
        self.pending.values().filter(|&&r| r == run).count()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, run: RunId) -> FrameToken {
        let token = self.next_token;
        self.next_token = token.next();
        self.pending.insert(token, run);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) -> bool {
        self.pending.remove(&token).is_some()
    }

    fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|(token, run)| FrameRequest { token, run })
            .collect()
    }
}
