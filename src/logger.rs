//! `log` backend. In the browser everything goes to the devtools console.
//! Natively the records are bridged into a `tracing` fmt subscriber on
//! stderr, filtered by `RUST_LOG` on top of the configured level.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    pub struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let msg = wasm_bindgen::JsValue::from_str(&format!("[terminal] {}: {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::log_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the console logger. Safe to call more than once, only the level
/// changes after the first call.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    // Err just means some logger is already installed
    let _ = log::set_logger(&console::LOGGER);
    log::set_max_level(level);
}

/// Install the stderr subscriber. The first call wins, later calls are
/// ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(tracing_level(level).into())
        .from_env_lossy();

    // try_init also installs the log -> tracing bridge
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if installed.is_err() {
        log::debug!("logger already installed, keeping it");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn tracing_level(level: LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter as Tracing;

    match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    }
}
