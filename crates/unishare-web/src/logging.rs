//! Browser console logging
//!
//! Behaviour code logs through the `log` facade. On the page the facade is
//! backed by `wasm-logger`, which writes to the browser console; in native
//! tests no logger is installed and records are dropped.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the console logger and the panic hook.
///
/// Only the first call takes effect; later calls keep the original level.
pub fn init_logging(level: log::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(
            wasm_logger::Config::new(level).module_prefix(env!("CARGO_CRATE_NAME")),
        );
    });
}

/// Parse a level name as written in page configuration.
///
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> log::Level {
    name.parse().unwrap_or(log::Level::Info)
}
