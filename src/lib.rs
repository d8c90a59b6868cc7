pub mod lex;
pub mod rt;
pub mod session;
pub mod stack;

/// The representation used by every operand and the arithmetic performed on it.
pub type RpnNumber = f64;

/// Environment variable holding the log filter, e.g. `RPN_LOG=debug`.
pub const LOG_FILTER_VAR: &str = "RPN_LOG";

/// Installs the stderr log subscriber used by the binaries.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
