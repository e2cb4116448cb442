//! Structured logging for the edge latency analyzer
//!
//! Provides leveled console logging with timestamps, colored level tags,
//! and an optional JSON mode for integration with log aggregators. The
//! pipeline is single-threaded, so the logger is a plain value handed to
//! whoever needs it.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events but application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn colored_tag(&self) -> String {
        use colored::Colorize;
        match self {
            LogLevel::Debug => self.as_str().cyan().to_string(),
            LogLevel::Info => self.as_str().green().to_string(),
            LogLevel::Warn => self.as_str().yellow().to_string(),
            LogLevel::Error => self.as_str().red().to_string(),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Pipeline stage that produced the entry (loader, stats, plot, ...)
    pub stage: Option<String>,
}

/// Console logger with level filtering
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    use_color: bool,
    json: bool,
}

impl Logger {
    pub fn new(min_level: LogLevel, use_color: bool, json: bool) -> Self {
        Self {
            min_level,
            use_color,
            json,
        }
    }

    /// Logger configuration derived from CLI flags
    pub fn from_flags(debug: bool, verbose: bool, use_color: bool) -> Self {
        let min_level = if debug || verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        // Debug mode emits structured JSON entries for aggregators
        Self::new(min_level, use_color, debug)
    }

    pub fn log(&self, level: LogLevel, stage: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            stage: stage.map(String::from),
        };

        if self.json {
            if let Ok(line) = serde_json::to_string(&entry) {
                eprintln!("{}", line);
            }
            return;
        }

        let tag = if self.use_color {
            entry.level.colored_tag()
        } else {
            entry.level.as_str().to_string()
        };

        match &entry.stage {
            Some(stage) => eprintln!(
                "[{}] {} ({}) {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                tag,
                stage,
                entry.message
            ),
            None => eprintln!(
                "[{}] {} {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                tag,
                entry.message
            ),
        }
    }

    pub fn debug(&self, stage: &str, message: &str) {
        self.log(LogLevel::Debug, Some(stage), message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, None, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, None, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, None, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info, true, false)
    }
}
