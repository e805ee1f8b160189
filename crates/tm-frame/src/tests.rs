//! Unit tests for tm-frame.

#[cfg(test)]
mod frame_queue {
    use tm_core::RunId;

    use crate::{FrameQueue, FrameRequest, FrameScheduler};

    #[test]
    fn request_and_take_due() {
        let mut q = FrameQueue::new();
        let a = q.request_frame(RunId(0));
        let b = q.request_frame(RunId(1));

        assert_eq!(q.len(), 2);
        assert!(a < b, "tokens increase");

        let due = q.take_due();
        assert_eq!(
            due,
            vec![
                FrameRequest { token: a, run: RunId(0) },
                FrameRequest { token: b, run: RunId(1) },
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_removes_pending() {
        let mut q = FrameQueue::new();
        let a = q.request_frame(RunId(0));
        assert!(q.is_pending(a));
        assert!(q.cancel_frame(a));
        assert!(!q.is_pending(a));
        assert!(q.take_due().is_empty());
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let mut q = FrameQueue::new();
        let a = q.request_frame(RunId(0));
        assert!(q.cancel_frame(a));
        assert!(!q.cancel_frame(a));
    }

    #[test]
    fn fired_request_cannot_be_cancelled() {
        let mut q = FrameQueue::new();
        let a = q.request_frame(RunId(3));
        let due = q.take_due();
        assert_eq!(due.len(), 1);
        assert!(!q.cancel_frame(a));
    }

    #[test]
    fn requests_after_take_wait_for_next_frame() {
        let mut q = FrameQueue::new();
        q.request_frame(RunId(0));
        let _first = q.take_due();
        let next = q.request_frame(RunId(0));
        assert_eq!(q.pending_for(RunId(0)), 1);
        assert_eq!(q.take_due()[0].token, next);
    }

    #[test]
    fn tokens_never_reused() {
        let mut q = FrameQueue::new();
        let a = q.request_frame(RunId(0));
        q.cancel_frame(a);
        let b = q.request_frame(RunId(0));
        assert_ne!(a, b);
    }
}
