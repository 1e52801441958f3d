/// File persistence for log lines
///
/// Lines are appended to `logs/fleetboard.log`. If the directory or file
/// cannot be opened, file output is disabled and console logging continues.
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "fleetboard.log";

static LOG_FILE: Lazy<Mutex<Option<LineWriter<File>>>> = Lazy::new(|| Mutex::new(None));

pub fn init_file_logging() {
    let dir = Path::new(LOG_DIR);
    if fs::create_dir_all(dir).is_err() {
        eprintln!("⚠️  Could not create '{}', file logging disabled", LOG_DIR);
        return;
    }

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    {
        Ok(file) => *LOG_FILE.lock() = Some(LineWriter::new(file)),
        Err(e) => eprintln!("⚠️  Could not open log file, file logging disabled: {}", e),
    }
}

pub fn write_to_file(line: &str) {
    if let Some(writer) = LOG_FILE.lock().as_mut() {
        let _ = writeln!(writer, "{}", line);
    }
}

pub fn flush_file_logging() {
    if let Some(writer) = LOG_FILE.lock().as_mut() {
        let _ = writer.flush();
    }
}
