//! Download plans: the explicit, validated input of a run.
//!
//! A plan is built once from user input and then handed to the dispatcher;
//! workers only ever read from it.

mod error;

pub use error::PlanError;

use crate::pages::{plan_chunks, Chunk, PageRange, PageSelection};
use crate::url_model::{check_base_url, DownloadTarget};

/// Worker count when neither the CLI nor the config names one.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Normalizes a user-supplied image format (`.PNG` stays `PNG`, leading dots are dropped).
pub fn normalize_extension(extension: &str) -> Result<String, PlanError> {
    let ext = extension.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(PlanError::EmptyExtension);
    }
    Ok(ext.to_string())
}

/// Validated plan for a multi-page download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    base_url: String,
    extension: String,
    range: PageRange,
    workers: usize,
}

impl PagePlan {
    pub fn new(
        base_url: &str,
        extension: &str,
        selection: PageSelection,
        workers: usize,
    ) -> Result<Self, PlanError> {
        if workers == 0 {
            return Err(PlanError::ZeroWorkers);
        }
        check_base_url(base_url)?;
        let extension = normalize_extension(extension)?;
        let range = PageRange::resolve(selection)?;
        Ok(Self {
            base_url: base_url.to_string(),
            extension,
            range,
            workers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn range(&self) -> PageRange {
        self.range
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Contiguous chunks of the page range, one per worker (at most `workers`).
    pub fn chunks(&self) -> Vec<Chunk> {
        plan_chunks(self.range, self.workers)
    }

    pub fn target(&self, index: u32) -> DownloadTarget<'_> {
        DownloadTarget::Page {
            base_url: &self.base_url,
            index,
            extension: &self.extension,
        }
    }
}
