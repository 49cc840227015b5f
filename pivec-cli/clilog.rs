use std::env;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use log;

struct CliLogger;

static VERBOSE: AtomicBool = AtomicBool::new(false);
static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        match metadata.level() {
            log::Level::Error | log::Level::Warn => true,
            log::Level::Info => VERBOSE.load(Ordering::SeqCst),
            log::Level::Debug | log::Level::Trace => TRACE_ENABLED.load(Ordering::SeqCst),
        }
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) { return }

        if record.level() <= log::Level::Warn {
            let _ = writeln!(io::stderr(), "{}: {}", record.level(), record.args());
        } else {
            let _ = writeln!(io::stdout(), "{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: CliLogger = CliLogger;

pub fn init() -> Result<(), log::SetLoggerError> {
    let trace = env::var("PIVEC_TRACE").map(|v| v == "1").unwrap_or(false);
    TRACE_ENABLED.store(trace, Ordering::SeqCst);

    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub fn set_verbose(yes: bool) {
    VERBOSE.store(yes, Ordering::SeqCst);
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Log;

    fn enabled(level: log::Level) -> bool {
        CliLogger.enabled(&log::Metadata::builder().level(level).build())
    }

    #[test]
    fn verbosity_gates_info() {
        TRACE_ENABLED.store(false, Ordering::SeqCst);
        set_verbose(false);
        assert!(enabled(log::Level::Error));
        assert!(enabled(log::Level::Warn));
        assert!(!enabled(log::Level::Info));
        assert!(!enabled(log::Level::Debug));

        set_verbose(true);
        assert!(enabled(log::Level::Info));
        assert!(!enabled(log::Level::Trace));
    }
}
