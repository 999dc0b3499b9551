use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: Level, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let level_tag = match level {
            Level::Info => "",
            Level::Warn => "[WARN]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{}[{}:{}] {}", timestamp, prefix, level_tag, file_name, line, message),
            None => format!("[{}]{}[{}:{}] {}", timestamp, level_tag, file_name, line, message),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(level, file, line, message);
        match level {
            Level::Info => println!("{}", formatted),
            Level::Warn => eprintln!("{}", formatted),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first prefix.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first. Dropped: {}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_from_file() {
        let logger = Logger::new(Some("client".to_string()));
        let line = logger.format_line(Level::Info, "common/src/games/snake/game_state.rs", 42, "hello");
        assert!(line.ends_with("[client][game_state.rs:42] hello"));
    }

    #[test]
    fn test_format_line_marks_warnings() {
        let logger = Logger::new(None);
        let line = logger.format_line(Level::Warn, "C:\\src\\audio.rs", 7, "no device");
        assert!(line.ends_with("[WARN][audio.rs:7] no device"));
    }
}
