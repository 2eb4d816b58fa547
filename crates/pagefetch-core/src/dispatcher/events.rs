//! Progress events sent from workers to whoever is listening (the CLI prints them).

use std::path::PathBuf;

/// One step of one download. `index` is `None` in single-image mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Started {
        index: Option<u32>,
        url: String,
    },
    Written {
        index: Option<u32>,
        path: PathBuf,
        bytes: u64,
    },
    Skipped {
        index: Option<u32>,
        path: PathBuf,
    },
    Failed {
        index: Option<u32>,
        url: String,
        error: String,
    },
}
