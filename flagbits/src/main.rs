mod application;
mod presentation;

use tracing_subscriber::EnvFilter;

/// Log filter, e.g. `FLAGBITS_LOG=debug`.
const LOG_ENV: &str = "FLAGBITS_LOG";

fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the decode output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Errors are reported, never turned into an exit code.
fn main() {
    init_logger();
    if let Err(e) = application::run() {
        println!("Error: {e}");
    }
}
