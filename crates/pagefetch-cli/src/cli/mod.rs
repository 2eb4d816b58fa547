//! CLI for pagefetch.

mod progress;
mod run;

use anyhow::Result;
use clap::{ArgAction, Parser};
use pagefetch_core::config;
use pagefetch_core::dispatcher::RunSummary;
use std::path::PathBuf;

/// Download an image, or a numbered sequence of images, over HTTP.
///
/// With `--pages`, `--start` or `--end` the URL is a base that page numbers
/// are appended to (`<URL><n>.<format>`), and pages are saved as `000.jpg`,
/// `001.jpg`, ... Without them the URL is fetched once and saved under its
/// last path segment.
#[derive(Debug, Parser)]
#[command(name = "pagefetch", version)]
#[command(about = "Download an image or a numbered image sequence over HTTP", long_about = None)]
pub struct Cli {
    /// Image URL, or base URL for a page sequence.
    pub url: String,

    /// Number of pages; indices 0 through N (inclusive) are fetched.
    #[arg(short = 'p', long, value_name = "N")]
    pub pages: Option<u32>,

    /// First page to fetch (1-based; page S is index S-1).
    #[arg(long, value_name = "S")]
    pub start: Option<u32>,

    /// Last page index to fetch (inclusive) when --start is given; without
    /// --start it only applies if --pages is absent.
    #[arg(long, value_name = "E")]
    pub end: Option<u32>,

    /// Image format / file extension (default from config, normally jpg).
    #[arg(short = 'f', long, visible_alias = "ifor", value_name = "EXT")]
    pub format: Option<String>,

    /// Directory to save into; created if missing.
    #[arg(short = 't', long, visible_alias = "tf", value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Overwrite existing files. `true`, `1` or `yes` (any case) enable it; other values don't.
    #[arg(
        long,
        value_name = "VALUE",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_force
    )]
    pub force: bool,

    /// Number of worker threads (default from config, else one per CPU).
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Stop all workers after the first failed page.
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// True when any page-range option was given.
    pub fn is_multi_page(&self) -> bool {
        self.pages.is_some() || self.start.is_some() || self.end.is_some()
    }
}

/// Interprets the overwrite flag value. Never fails: unknown values mean "don't overwrite".
pub fn parse_force(value: &str) -> Result<bool, String> {
    let v = value.trim();
    Ok(["true", "1", "yes"]
        .iter()
        .any(|accepted| v.eq_ignore_ascii_case(accepted)))
}

/// Parses arguments, loads config and runs the download. Returns the run summary;
/// the caller turns an unsuccessful summary into a non-zero exit status.
pub fn run_from_args() -> Result<RunSummary> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    run::run_download(&cli, &cfg)
}

#[cfg(test)]
mod tests;
