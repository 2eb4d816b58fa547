//! Worker loop: fetch every page of one chunk in order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

use crate::config::ErrorPolicy;
use crate::fetcher::{fetch_to_file, FetchOutcome};
use crate::pages::Chunk;
use crate::plan::PagePlan;
use crate::url_model::DownloadTarget;

use super::events::PageEvent;
use super::summary::{PageFailure, RunSummary};
use super::RunOptions;

/// Page index at which a worker panics, for exercising the join path in tests.
#[cfg(test)]
pub(super) static PANIC_AT_PAGE: std::sync::atomic::AtomicU32 =
    std::sync::atomic::AtomicU32::new(u32::MAX);

/// Fetches one target and records the outcome in `summary`. Returns false if the page failed.
pub(super) fn fetch_target(
    target: DownloadTarget<'_>,
    opts: &RunOptions,
    events: Option<&Sender<PageEvent>>,
    summary: &mut RunSummary,
) -> bool {
    let index = target.page_index();
    let url = target.source_url();
    let dest = opts.output_dir.join(target.filename());

    let emit = |event: PageEvent| {
        if let Some(tx) = events {
            let _ = tx.send(event);
        }
    };

    if !opts.force && dest.exists() {
        // Reported before Started so a skip never prints a download line.
        emit(PageEvent::Skipped {
            index,
            path: dest.clone(),
        });
        summary.skipped += 1;
        return true;
    }

    emit(PageEvent::Started {
        index,
        url: url.clone(),
    });
    match fetch_to_file(&dest, &url, opts.force, &opts.fetch) {
        Ok(FetchOutcome::Written { bytes }) => {
            emit(PageEvent::Written {
                index,
                path: dest,
                bytes,
            });
            summary.written += 1;
            summary.bytes += bytes;
            true
        }
        Ok(FetchOutcome::Skipped) => {
            emit(PageEvent::Skipped { index, path: dest });
            summary.skipped += 1;
            true
        }
        Err(e) => {
            tracing::warn!(url = %url, path = %dest.display(), "page failed: {}", e);
            let error = e.to_string();
            emit(PageEvent::Failed {
                index,
                url,
                error: error.clone(),
            });
            summary.failed.push(PageFailure { index, error });
            false
        }
    }
}

/// Runs the Fetcher over every page of `chunk`, recording outcomes in `summary`.
///
/// Under `ErrorPolicy::FailFast` a failure raises `abort`, and every worker
/// (this one included) stops before its next page.
pub(super) fn run_chunk(
    plan: &PagePlan,
    chunk: Chunk,
    opts: &RunOptions,
    events: Option<&Sender<PageEvent>>,
    abort: &AtomicBool,
    summary: &mut RunSummary,
) {
    tracing::debug!(first = chunk.first, last = chunk.last, "worker started");

    for (done, index) in chunk.pages().enumerate() {
        if abort.load(Ordering::Relaxed) {
            summary.not_attempted += chunk.len() - done;
            tracing::debug!(first = chunk.first, last = chunk.last, "worker aborted");
            break;
        }
        #[cfg(test)]
        if index == PANIC_AT_PAGE.load(Ordering::SeqCst) {
            panic!("injected panic at page {index}");
        }
        let ok = fetch_target(plan.target(index), opts, events, summary);
        if !ok && opts.error_policy == ErrorPolicy::FailFast {
            abort.store(true, Ordering::Relaxed);
        }
    }
}
