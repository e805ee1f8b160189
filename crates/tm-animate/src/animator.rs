//! The `Animator`: starts, steps, cancels, and restarts runs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, trace};
use tm_core::{FrameTime, Path, RunId, Waypoint};
use tm_frame::{FrameRequest, FrameScheduler};

use crate::{
    AnimateResult, AnimationObserver, AnimationRun, NoopObserver, Pacing, PositionSink, RunPhase,
    RunSpec, RunStart,
};

/// Opaque reference to one run.
///
/// Cheap to clone.  Holds the run's inputs so [`Animator::restart`] works
/// even after the run's state has been dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationHandle {
    id:   RunId,
    spec: Arc<RunSpec>,
}

impl AnimationHandle {
    #[inline]
    pub fn id(&self) -> RunId {
        self.id
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.spec.path
    }

    #[inline]
    pub fn pacing(&self) -> Pacing {
        self.spec.pacing
    }
}

/// Drives runs over a host frame scheduler and writes positions to one sink.
///
/// `Animator<S, K, O>` owns:
///
/// - the sink `S`: the only object shared by successive runs,
/// - the scheduler `K`: requests one frame per live run at a time,
/// - the observer `O`: progress callbacks ([`NoopObserver`] by default).
///
/// Each `start` creates a fresh [`AnimationRun`]; its state lives in this
/// animator until the run completes or is cancelled, then is dropped.
///
/// Cancelled runs leave nothing behind: any handle without a record reports
/// [`RunPhase::Cancelled`].  Completed runs keep one entry each so their
/// handles keep reporting `Completed`; long-lived hosts that start many runs
/// call [`clear_completed`](Self::clear_completed) to drop them.
///
/// # Example
///
/// ```rust,ignore
/// let mut anim = Animator::new(RecordingSink::new(), FrameQueue::new());
/// let run = anim.start(path, Pacing::constant_kmh(12_080.0))?;
/// while anim.is_live(&run) {
///     now = now + 16.0;
///     anim.tick(now);
/// }
/// ```
pub struct Animator<S: PositionSink, K: FrameScheduler, O: AnimationObserver = NoopObserver> {
    sink:      S,
    scheduler: K,
    observer:  O,
    runs:      HashMap<RunId, AnimationRun>,
    /// Runs that completed.
    completed: HashSet<RunId>,
    next_run:  RunId,
}

impl<S: PositionSink, K: FrameScheduler> Animator<S, K> {
    pub fn new(sink: S, scheduler: K) -> Self {
        Self {
            sink,
            scheduler,
            observer:  NoopObserver,
            runs:      HashMap::new(),
            completed: HashSet::new(),
            next_run:  RunId(0),
        }
    }
}

impl<S: PositionSink, K: FrameScheduler, O: AnimationObserver> Animator<S, K, O> {
    /// Replace the observer.
    pub fn with_observer<O2: AnimationObserver>(self, observer: O2) -> Animator<S, K, O2> {
        Animator {
            sink:      self.sink,
            scheduler: self.scheduler,
            observer,
            runs:      self.runs,
            completed: self.completed,
            next_run:  self.next_run,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Validate inputs and request the first frame of a new run.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `path` has fewer than two waypoints or `pacing` is
    /// not positive and finite.  Nothing is scheduled and the sink is not
    /// touched.
    pub fn start(&mut self, path: Path, pacing: Pacing) -> AnimateResult<AnimationHandle> {
        let spec = RunSpec::new(path, pacing)?;
        Ok(self.launch(Arc::new(spec)))
    }

    /// [`start`](Self::start) from raw `[lng, lat]` pairs.
    ///
    /// # Errors
    ///
    /// `Core` if the coordinates do not form a valid path, otherwise as
    /// `start`.
    pub fn start_lng_lat(&mut self, coords: &[[f64; 2]], pacing: Pacing) -> AnimateResult<AnimationHandle> {
        let path = Path::from_lng_lat(coords)?;
        self.start(path, pacing)
    }

    /// Cancel `handle`'s run: revoke its pending frame and drop its state.
    ///
    /// A no-op for runs that already completed or were cancelled.  Never
    /// writes to the sink.
    pub fn cancel(&mut self, handle: &AnimationHandle) {
        let Some(mut run) = self.runs.remove(&handle.id) else {
            trace!("{}: cancel ignored, run not live", handle.id);
            return;
        };
        if let Some(token) = run.state.pending_frame.take() {
            self.scheduler.cancel_frame(token);
        }
        run.state.phase = RunPhase::Cancelled;
        debug!("{}: cancelled at frame {}", run.id, run.state.frames);
        self.observer.on_run_cancelled(run.id, run.state.frames);
    }

    /// Reset the sink to the first waypoint, cancel `handle`, and start a new
    /// run with the same path and pacing.
    ///
    /// Safe before the first frame, mid-run, and after completion.
    pub fn restart(&mut self, handle: &AnimationHandle) -> AnimationHandle {
        debug!("{}: restarting", handle.id);
        self.sink.set_position(handle.spec.path.first());
        self.cancel(handle);
        self.launch(Arc::clone(&handle.spec))
    }

    /// Take every due frame from the scheduler and process it at `now`.
    ///
    /// Returns the number of frames that advanced a run.
    pub fn tick(&mut self, now: FrameTime) -> usize {
        let due = self.scheduler.take_due();
        let mut advanced = 0;
        for request in due {
            if self.on_frame(request, now).is_some() {
                advanced += 1;
            }
        }
        advanced
    }

    /// Process one fired frame request.
    ///
    /// Returns the position written, or `None` if the request is stale: its
    /// run was cancelled, already finished, or has since re-requested under
    /// a different token.
    pub fn on_frame(&mut self, request: FrameRequest, now: FrameTime) -> Option<Waypoint> {
        let Some(run) = self.runs.get_mut(&request.run) else {
            trace!("{}: stale frame {:?} dropped", request.run, request.token);
            return None;
        };
        if run.state.pending_frame != Some(request.token) {
            trace!("{}: frame {:?} does not match pending request", request.run, request.token);
            return None;
        }
        run.state.pending_frame = None;

        let step = run.advance(now);
        self.sink.set_position(step.position);
        self.observer.on_frame(run.id, run.state.frames, &step);

        if step.finished {
            let frames = run.state.frames;
            self.runs.remove(&request.run);
            self.completed.insert(request.run);
            self.observer.on_run_complete(request.run, step.position, frames);
        } else {
            run.state.pending_frame = Some(self.scheduler.request_frame(request.run));
        }
        Some(step.position)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current phase of `handle`'s run.  Handles this animator has no record
    /// of report `Cancelled`.
    pub fn phase(&self, handle: &AnimationHandle) -> RunPhase {
        match self.runs.get(&handle.id) {
            Some(run) => run.state.phase,
            None if self.completed.contains(&handle.id) => RunPhase::Completed,
            None => RunPhase::Cancelled,
        }
    }

    #[inline]
    pub fn is_live(&self, handle: &AnimationHandle) -> bool {
        self.runs.contains_key(&handle.id)
    }

    /// Number of runs that are pending or running.
    #[inline]
    pub fn live_runs(&self) -> usize {
        self.runs.len()
    }

    /// The live run behind `handle`, for inspecting its state.
    #[inline]
    pub fn run(&self, handle: &AnimationHandle) -> Option<&AnimationRun> {
        self.runs.get(&handle.id)
    }

    /// Number of completed runs still remembered.
    #[inline]
    pub fn completed_runs(&self) -> usize {
        self.completed.len()
    }

    /// Forget completed runs.  Their handles then report
    /// `Cancelled`.
    pub fn clear_completed(&mut self) {
        self.completed.clear();
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (S, K, O) {
        (self.sink, self.scheduler, self.observer)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn launch(&mut self, spec: Arc<RunSpec>) -> AnimationHandle {
        let id = self.next_run;
        self.next_run = id.next();

        let mut run = AnimationRun::new(id, Arc::clone(&spec));
        run.state.pending_frame = Some(self.scheduler.request_frame(id));

        let start = RunStart {
            total_distance_m: run.total_length_m(),
            speed:            spec.pacing.speed(),
            estimated_secs:   run.estimated_duration_secs(),
            segments:         spec.path.segment_count(),
        };
        debug!("{id}: started, {} over {} waypoints", spec.pacing, spec.path.len());
        self.runs.insert(id, run);
        self.observer.on_run_start(id, &start);

        AnimationHandle { id, spec }
    }
}
