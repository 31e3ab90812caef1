//! Logging setup for the binary.

use std::io::Write;

/// Initialize env_logger. The `verbose` flag lowers the default level to
/// debug; `RUST_LOG` still overrides everything.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())
        })
        .init();
}
