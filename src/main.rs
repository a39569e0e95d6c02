//! linkspan CLI - render a plain-text message body to HTML with links
//!
//! Usage: `linkspan [-v|-vv] [FILE|-]`

use std::io::{self, Read, Write};

use log::{Level, Log, Metadata, Record};

/// Writes log records to stderr.
struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr(), "[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => return,
        1 => Level::Debug,
        _ => Level::Trace,
    };
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

fn main() -> io::Result<()> {
    let mut verbosity = 0;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" => verbosity += 1,
            "-vv" => verbosity += 2,
            _ => path = Some(arg),
        }
    }
    init_logging(verbosity);

    // Simple usage: read from stdin or file
    let input = match path.as_deref() {
        Some(p) if p != "-" => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = linkspan::to_html(&input);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
