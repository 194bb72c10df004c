use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

struct Logger {
    file: File,
    prefixes: HashMap<String, u8>, // prefix -> color index
}

// Color indices for console rendering
pub const COLOR_GRAY: u8 = 1;
pub const COLOR_BLUE: u8 = 2;

fn ansi(color: u8) -> &'static str {
    match color {
        COLOR_GRAY => "\x1b[90m",
        COLOR_BLUE => "\x1b[34m",
        _ => "",
    }
}

/// Initialize the global logger. Clears the log file. Before `init` every
/// log call is a no-op, which is what tests want.
pub fn init(log_dir: &Path) {
    fs::create_dir_all(log_dir).ok();
    let log_path = log_dir.join("app.log");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .expect("failed to open log file");

    LOGGER
        .set(Mutex::new(Logger { file, prefixes: HashMap::new() }))
        .ok();
}

/// Register a prefix with a color. All subsequent log calls through the
/// `_p` variants will render this prefix in that color on the console.
pub fn register_prefix(prefix: &str, color: u8) {
    if let Some(logger) = LOGGER.get() {
        let mut l = logger.lock().unwrap();
        l.prefixes.insert(prefix.to_string(), color);
    }
}

/// The file always gets plain text; the console gets the prefix colored.
fn write_log(level: &str, prefix: &str, msg: &str) {
    let Some(logger) = LOGGER.get() else { return };
    let mut l = logger.lock().unwrap();

    let ts = Local::now().format("%H:%M:%S").to_string();

    let file_line = if prefix.is_empty() {
        format!("[{}] [{}] {}", ts, level, msg)
    } else {
        format!("[{}] [{}] [{}] {}", ts, level, prefix, msg)
    };
    writeln!(l.file, "{}", file_line).ok();

    let console_line = if prefix.is_empty() {
        format!("[{}] [{}] {}", ts, level, msg)
    } else {
        let color = l.prefixes.get(prefix).copied().unwrap_or(0);
        format!("[{}] [{}] {}[{}]\x1b[0m {}", ts, level, ansi(color), prefix, msg)
    };
    eprintln!("{}", console_line);
}

pub fn info(msg: &str) {
    write_log("INFO", "", msg);
}

pub fn warn(msg: &str) {
    write_log("WARN", "", msg);
}

pub fn error(msg: &str) {
    write_log("ERROR", "", msg);
}

pub fn info_p(prefix: &str, msg: &str) {
    write_log("INFO", prefix, msg);
}

pub fn warn_p(prefix: &str, msg: &str) {
    write_log("WARN", prefix, msg);
}

pub fn error_p(prefix: &str, msg: &str) {
    write_log("ERROR", prefix, msg);
}
