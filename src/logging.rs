use tracing_subscriber::EnvFilter;

/// Default level for a given number of `-v` flags.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides `-v` when set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let filter = std::env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(level_for_verbosity(verbose)),
        EnvFilter::new,
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
