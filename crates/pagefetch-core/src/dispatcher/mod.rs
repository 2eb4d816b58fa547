//! The Dispatcher: fan a page plan out over worker threads and join them.
//!
//! Each chunk of the plan gets its own OS thread running the Fetcher loop.
//! Workers share nothing but the read-only plan, an abort flag (fail-fast
//! only) and an optional event channel; the only synchronization point is
//! the final join.

mod events;
mod summary;
mod worker;

pub use events::PageEvent;
pub use summary::{PageFailure, RunSummary};

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use crate::config::{ErrorPolicy, PagefetchConfig};
use crate::fetcher::FetchOptions;
use crate::pages::Chunk;
use crate::plan::PagePlan;
use crate::url_model::DownloadTarget;

/// Settings shared by every page of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory relative output filenames are resolved against.
    pub output_dir: PathBuf,
    /// Replace files that already exist instead of skipping them.
    pub force: bool,
    pub error_policy: ErrorPolicy,
    pub fetch: FetchOptions,
}

impl RunOptions {
    pub fn from_config(cfg: &PagefetchConfig, output_dir: PathBuf, force: bool) -> Self {
        Self {
            output_dir,
            force,
            error_policy: cfg.error_policy,
            fetch: FetchOptions::from_config(cfg),
        }
    }
}

/// Downloads every page of `plan`, one worker thread per chunk, and waits for all of them.
///
/// Events from all workers go to `events` (if any); the sender is dropped when
/// the run ends so a receiver loop terminates on its own.
pub fn run_pages(
    plan: &PagePlan,
    opts: &RunOptions,
    events: Option<Sender<PageEvent>>,
) -> RunSummary {
    let chunks = plan.chunks();
    let abort = AtomicBool::new(false);
    tracing::info!(
        base_url = plan.base_url(),
        first = plan.range().first(),
        last = plan.range().last(),
        workers = chunks.len(),
        "starting multi-page run"
    );

    // One slot per chunk, owned here, so a panicking worker's progress survives it.
    let mut parts = vec![RunSummary::default(); chunks.len()];
    let mut panicked = Vec::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .zip(parts.iter_mut())
            .enumerate()
            .map(|(pos, (&chunk, part))| {
                let tx = events.clone();
                let abort = &abort;
                let handle = scope
                    .spawn(move || worker::run_chunk(plan, chunk, opts, tx.as_ref(), abort, part));
                (pos, handle)
            })
            .collect();

        for (pos, handle) in handles {
            if let Err(e) = handle.join() {
                let chunk = chunks[pos];
                tracing::warn!(first = chunk.first, last = chunk.last, "worker panicked: {:?}", e);
                panicked.push(pos);
            }
        }
    });

    for pos in panicked {
        fail_unaccounted(chunks[pos], &mut parts[pos]);
    }
    let mut summary = RunSummary::default();
    for part in parts {
        summary.merge(part);
    }

    tracing::info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed.len(),
        not_attempted = summary.not_attempted,
        "multi-page run finished"
    );
    summary
}

/// Marks the pages of `chunk` that a panicked worker never recorded as failed.
///
/// Workers go through their chunk in order, so the first `part.total()` pages
/// already have an outcome.
fn fail_unaccounted(chunk: Chunk, part: &mut RunSummary) {
    let accounted = part.total().min(chunk.len()) as u32;
    part.failed
        .extend((chunk.first + accounted..=chunk.last).map(|index| PageFailure {
            index: Some(index),
            error: "worker thread panicked".to_string(),
        }));
}

/// Downloads a single image on the calling thread.
pub fn run_single(url: &str, opts: &RunOptions, events: Option<Sender<PageEvent>>) -> RunSummary {
    let mut summary = RunSummary::default();
    worker::fetch_target(
        DownloadTarget::Single { url },
        opts,
        events.as_ref(),
        &mut summary,
    );
    summary
}
