use pagefetch_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; a missing state dir only costs the log file.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args() {
        Ok(summary) if summary.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("pagefetch error: {:#}", err);
            std::process::exit(1);
        }
    }
}
