// Browser console logging.
use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// `log` backend writing to the browser console.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => web_sys::console::error_1(&JsValue::from_str(&line)),
            Level::Warn => web_sys::console::warn_1(&JsValue::from_str(&line)),
            _ => clog(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] once; later calls only adjust the level.
pub fn init_logging(level: Level) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level.to_level_filter());
}
