//! replay: headless replay of marker animations for trailmark.
//!
//! Drives the animator from a simulated 60 Hz frame clock instead of a
//! browser, logging the same progress text a map page would show:
//!
//! 1. The coast route at 12 080 km/h after a one-second start delay, with a
//!    restart pressed halfway through.
//! 2. The Pacific route at 100 ms per segment.
//!
//! Usage:
//!
//! ```text
//! replay [--config anim.json] [--route route.geojson] [--trace out_dir]
//! ```
//!
//! With `--config` and/or `--route`, a third run animates the given route
//! (the coast route by default) with the given pacing.  `--trace` writes
//! `frames.csv` and `runs.csv` for every run.

mod routes;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

use tm_animate::{
    AnimationConfig, AnimationHandle, AnimationObserver, Animator, FrameStep, LogObserver, Pacing,
    PositionSink, RecordingSink, RunStart,
};
use tm_core::{FrameTime, Path, RunId, Waypoint};
use tm_frame::FrameQueue;
use tm_output::{CsvTraceWriter, TraceObserver, TraceWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_MS:        f64 = 1_000.0 / 60.0;
const COAST_SPEED_KMH: f64 = 12_080.0;
const START_DELAY_MS:  f64 = 1_000.0;
const SEGMENT_MS:      f64 = 100.0;
/// Upper bound on frames per run so a bad config cannot spin forever.
const MAX_FRAMES:      u64 = 10_000_000;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(StructOpt)]
#[structopt(name = "replay", about = "Headless replay of trailmark marker animations")]
struct Args {
    /// JSON animation config for an extra run
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// GeoJSON file whose first LineString is animated in an extra run
    #[structopt(long, parse(from_os_str))]
    route: Option<PathBuf>,
    /// Directory to write frames.csv and runs.csv into
    #[structopt(long, parse(from_os_str))]
    trace: Option<PathBuf>,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Logs progress and, optionally, traces every frame to CSV.
struct ReplayObserver<W: TraceWriter> {
    log:   LogObserver,
    trace: Option<TraceObserver<W>>,
}

impl<W: TraceWriter> AnimationObserver for ReplayObserver<W> {
    fn on_run_start(&mut self, run: RunId, start: &RunStart) {
        self.log.on_run_start(run, start);
        if let Some(t) = &mut self.trace {
            t.on_run_start(run, start);
        }
    }

    fn on_frame(&mut self, run: RunId, frame: u64, step: &FrameStep) {
        self.log.on_frame(run, frame, step);
        if let Some(t) = &mut self.trace {
            t.on_frame(run, frame, step);
        }
    }

    fn on_run_complete(&mut self, run: RunId, final_position: Waypoint, frames: u64) {
        self.log.on_run_complete(run, final_position, frames);
        if let Some(t) = &mut self.trace {
            t.on_run_complete(run, final_position, frames);
        }
    }

    fn on_run_cancelled(&mut self, run: RunId, frames: u64) {
        self.log.on_run_cancelled(run, frames);
        if let Some(t) = &mut self.trace {
            t.on_run_cancelled(run, frames);
        }
    }
}

type Replay = Animator<RecordingSink, FrameQueue, ReplayObserver<CsvTraceWriter>>;

// ── Frame clock ───────────────────────────────────────────────────────────────

/// Step the frame clock until `run` finishes, pressing restart once when the
/// clock passes `restart_at`.  Returns the handle of the run that finished.
fn drive(
    anim:       &mut Replay,
    mut run:    AnimationHandle,
    now:        &mut FrameTime,
    restart_at: Option<FrameTime>,
) -> AnimationHandle {
    let mut pending_restart = restart_at;
    let mut frames = 0;
    while anim.is_live(&run) && frames < MAX_FRAMES {
        *now = *now + FRAME_MS;
        if pending_restart.is_some_and(|at| *now >= at) {
            info!("restart pressed at {now}");
            run = anim.restart(&run);
            pending_restart = None;
        }
        anim.tick(*now);
        frames += 1;
    }
    run
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::from_args();

    println!("=== replay: trailmark marker animation ===");
    println!("Frame clock: {:.2} ms per frame", FRAME_MS);
    println!();

    // 1. Optional trace output.
    let trace = match &args.trace {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(TraceObserver::new(CsvTraceWriter::new(dir)?))
        }
        None => None,
    };
    let observer = ReplayObserver { log: LogObserver::new(), trace };
    let mut anim = Animator::new(RecordingSink::new(), FrameQueue::new()).with_observer(observer);

    let t0 = Instant::now();
    let mut now = FrameTime::ZERO;
    let mut summary: Vec<(&str, AnimationHandle, usize)> = Vec::new();

    // 2. Coast route at constant speed, restarted halfway.
    let coast = routes::coast_route()?;
    let pacing = Pacing::constant_kmh(COAST_SPEED_KMH);
    let half = pacing
        .speed()
        .map(|s| s.duration_secs(coast.length_m()) * 500.0)
        .unwrap_or_default();
    now = now + START_DELAY_MS;
    anim.sink_mut().set_position(coast.first());
    let run = anim.start(coast, pacing)?;
    let restart_at = now + half;
    let writes_before = anim.sink().writes();
    let run = drive(&mut anim, run, &mut now, Some(restart_at));
    summary.push(("coast", run, anim.sink().writes() - writes_before));

    // 3. Pacific route, fixed duration per segment.
    let pacific = routes::pacific_route()?;
    anim.sink_mut().set_position(pacific.first());
    let writes_before = anim.sink().writes();
    let run = anim.start(pacific, Pacing::per_segment_ms(SEGMENT_MS))?;
    let run = drive(&mut anim, run, &mut now, None);
    summary.push(("pacific", run, anim.sink().writes() - writes_before));

    // 4. Custom route and/or pacing from the command line.
    if args.config.is_some() || args.route.is_some() {
        let (pacing, delay) = match &args.config {
            Some(file) => {
                let cfg = AnimationConfig::from_file(file)
                    .with_context(|| format!("loading {}", file.display()))?;
                (cfg.pacing()?, cfg.start_delay_ms)
            }
            None => (Pacing::constant_kmh(COAST_SPEED_KMH), 0.0),
        };
        let path = match &args.route {
            Some(file) => Path::from_geojson_file(file)
                .with_context(|| format!("loading {}", file.display()))?,
            None => routes::coast_route()?,
        };
        now = now + delay;
        anim.sink_mut().set_position(path.first());
        let writes_before = anim.sink().writes();
        let run = anim.start(path, pacing)?;
        let run = drive(&mut anim, run, &mut now, None);
        summary.push(("custom", run, anim.sink().writes() - writes_before));
    }

    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!("Replayed {:.1} s of frames in {:.3} s", now.millis() / 1_000.0, elapsed.as_secs_f64());
    println!();
    println!("{:<10} {:<8} {:<12} {:<8} {:<28}", "Route", "Run", "Phase", "Writes", "Destination");
    println!("{}", "-".repeat(68));
    let last = anim.sink().last();
    for (name, run, writes) in &summary {
        println!(
            "{:<10} {:<8} {:<12} {:<8} {:<28}",
            name,
            run.id().0,
            anim.phase(run).to_string(),
            writes,
            run.path().last().to_string(),
        );
    }
    if let Some(pos) = last {
        println!();
        println!("Marker rests at {pos}");
    }

    let (_, _, mut observer) = anim.into_parts();
    if let Some(trace) = &mut observer.trace {
        trace.finish();
        if let Some(e) = trace.take_error() {
            eprintln!("trace error: {e}");
        }
    }

    Ok(())
}
