//! Console output for download events.

use pagefetch_core::dispatcher::{PageEvent, RunSummary};
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

/// One console line for an event.
pub fn describe(event: &PageEvent) -> String {
    match event {
        PageEvent::Started { url, .. } => format!("Downloading image from: {url}"),
        PageEvent::Written { path, bytes, .. } => {
            format!("Saved {} ({} bytes)", path.display(), bytes)
        }
        PageEvent::Skipped { path, .. } => {
            format!("Skipping {} (already exists)", path.display())
        }
        PageEvent::Failed { url, error, .. } => format!("Failed {url}: {error}"),
    }
}

/// Closing line for a run.
pub fn describe_summary(summary: &RunSummary) -> String {
    let mut line = format!(
        "Done: {} written, {} skipped, {} failed",
        summary.written,
        summary.skipped,
        summary.failed.len()
    );
    if summary.not_attempted > 0 {
        line.push_str(&format!(", {} not attempted", summary.not_attempted));
    }
    line
}

/// Prints events from `rx` on a background thread until every sender is dropped.
pub fn spawn_printer(rx: Receiver<PageEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for event in rx {
            println!("{}", describe(&event));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagefetch_core::dispatcher::PageFailure;
    use std::path::PathBuf;

    #[test]
    fn describe_started_names_url() {
        let e = PageEvent::Started {
            index: Some(7),
            url: "https://x/y/7.png".to_string(),
        };
        assert_eq!(describe(&e), "Downloading image from: https://x/y/7.png");
    }

    #[test]
    fn describe_skipped_and_written() {
        let skipped = PageEvent::Skipped {
            index: Some(1),
            path: PathBuf::from("out/001.jpg"),
        };
        assert_eq!(describe(&skipped), "Skipping out/001.jpg (already exists)");
        let written = PageEvent::Written {
            index: None,
            path: PathBuf::from("pic.png"),
            bytes: 12,
        };
        assert_eq!(describe(&written), "Saved pic.png (12 bytes)");
    }

    #[test]
    fn describe_failed() {
        let e = PageEvent::Failed {
            index: Some(3),
            url: "https://x/3.jpg".to_string(),
            error: "HTTP 404".to_string(),
        };
        assert_eq!(describe(&e), "Failed https://x/3.jpg: HTTP 404");
    }

    #[test]
    fn summary_line_mentions_not_attempted_only_when_present() {
        let mut s = RunSummary {
            written: 4,
            skipped: 1,
            ..Default::default()
        };
        assert_eq!(describe_summary(&s), "Done: 4 written, 1 skipped, 0 failed");
        s.failed.push(PageFailure {
            index: Some(5),
            error: "HTTP 500".to_string(),
        });
        s.not_attempted = 2;
        assert_eq!(
            describe_summary(&s),
            "Done: 4 written, 1 skipped, 1 failed, 2 not attempted"
        );
    }
}
