/// Bridge from the `log` facade into the tagged logger
///
/// reqwest and friends log through `log`; their records are routed to
/// `LogTag::Http`. Only warnings and above pass unless `--debug-http` is set.
use super::config::is_debug_enabled_for_tag;
use super::levels::LogLevel;
use super::tags::LogTag;
use log::{LevelFilter, Metadata, Record};

struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::Level::Warn || is_debug_enabled_for_tag(&LogTag::Http)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("{}: {}", record.target(), record.args());
        super::core::log_internal(LogTag::Http, LogLevel::from(record.level()), &message);
    }

    fn flush(&self) {
        super::file::flush_file_logging();
    }
}

/// Install the bridge as the global `log` logger (first call wins)
pub fn install() {
    if log::set_logger(&BRIDGE).is_ok() {
        let max = if is_debug_enabled_for_tag(&LogTag::Http) {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        log::set_max_level(max);
    }
}
