use tracing_subscriber::EnvFilter;

/// Log level implied by the verbosity flags; quiet wins over verbose.
pub fn level_for(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber. The filter comes from the CLI flags only.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::new(level_for(verbose, quiet));

    // A subscriber may already be installed when embedded in a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
