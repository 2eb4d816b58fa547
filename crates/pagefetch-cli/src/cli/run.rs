//! Runs one invocation: resolve options against config, then single or multi-page download.

use anyhow::{Context, Result};
use pagefetch_core::config::{ErrorPolicy, PagefetchConfig};
use pagefetch_core::dispatcher::{self, RunOptions, RunSummary};
use pagefetch_core::pages::PageSelection;
use pagefetch_core::plan::{default_parallelism, PagePlan};
use pagefetch_core::url_model::check_single_url;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use super::progress;
use super::Cli;

/// Creates the target directory if needed and returns the directory output goes to.
pub fn prepare_output_dir(target_dir: Option<&Path>) -> Result<PathBuf> {
    match target_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create target directory {}", dir.display()))?;
            println!("Working Directory: {}", dir.display());
            Ok(dir.to_path_buf())
        }
        None => std::env::current_dir().context("read current directory"),
    }
}

/// Merges CLI flags over config values.
pub fn run_options(cli: &Cli, cfg: &PagefetchConfig, output_dir: PathBuf) -> RunOptions {
    let mut opts = RunOptions::from_config(cfg, output_dir, cli.force);
    if cli.fail_fast {
        opts.error_policy = ErrorPolicy::FailFast;
    }
    opts
}

/// Builds the page plan for a multi-page invocation.
pub fn build_plan(cli: &Cli, cfg: &PagefetchConfig) -> Result<PagePlan> {
    let selection = PageSelection {
        count: cli.pages,
        start: cli.start,
        end: cli.end,
    };
    let extension = cli.format.as_deref().unwrap_or(&cfg.default_extension);
    let workers = cli
        .workers
        .or(cfg.workers)
        .unwrap_or_else(default_parallelism);
    let plan = PagePlan::new(&cli.url, extension, selection, workers)?;
    Ok(plan)
}

pub fn run_download(cli: &Cli, cfg: &PagefetchConfig) -> Result<RunSummary> {
    // Validate before touching the filesystem.
    let plan = if cli.is_multi_page() {
        Some(build_plan(cli, cfg)?)
    } else {
        check_single_url(&cli.url)?;
        None
    };

    let output_dir = prepare_output_dir(cli.target_dir.as_deref())?;
    let opts = run_options(cli, cfg, output_dir);

    let (tx, rx) = mpsc::channel();
    let printer = progress::spawn_printer(rx);

    let summary = match &plan {
        Some(plan) => dispatcher::run_pages(plan, &opts, Some(tx)),
        None => dispatcher::run_single(&cli.url, &opts, Some(tx)),
    };

    if printer.join().is_err() {
        tracing::warn!("progress printer thread panicked");
    }

    if plan.is_some() {
        println!("{}", progress::describe_summary(&summary));
    }
    for failure in &summary.failed {
        match failure.index {
            Some(index) => eprintln!("page {}: {}", index, failure.error),
            None => eprintln!("{}: {}", cli.url, failure.error),
        }
    }

    Ok(summary)
}
