//! Error handling for the edge latency analyzer

use thiserror::Error;

/// Custom error types for the edge latency analyzer
///
/// Each pipeline failure is a distinct kind so callers can react to (and
/// exit codes can reflect) what actually went wrong, rather than funnelling
/// everything through one catch-all boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file is missing or unreadable
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed CSV data (wrong column count, non-numeric field, bad edge flag)
    #[error("Parse error: {0}")]
    Parse(String),

    /// No rising-edge samples survived filtering
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Plot construction or PNG encoding failures
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// CLI argument validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new file-not-found error
    pub fn file_not_found<S: Into<String>>(message: S) -> Self {
        Self::FileNotFound(message.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new empty-dataset error
    pub fn empty_dataset<S: Into<String>>(message: S) -> Self {
        Self::EmptyDataset(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE",
            Self::Parse(_) => "PARSE",
            Self::EmptyDataset(_) => "DATA",
            Self::Render(_) => "RENDER",
            Self::Io(_) => "IO",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FileNotFound(msg) => {
                format!("Could not open the capture file: {}\n\nSuggestion: Check the path and file permissions.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse capture data: {}\n\nSuggestion: The file must be a four-column edge-timing CSV with a single title row.", msg)
            }
            Self::EmptyDataset(msg) => {
                format!("No usable data: {}\n\nSuggestion: Verify that the capture contains rising-edge events (EdgeType 0).", msg)
            }
            Self::Render(msg) => {
                format!("Plot rendering failed: {}\n\nSuggestion: Check that the output directory is writable.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file permissions and disk space.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the command line arguments.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1, // Invalid usage
            Self::FileNotFound(_) => 2,
            Self::Parse(_) => 3,
            Self::EmptyDataset(_) => 4,
            Self::Render(_) => 5,
            Self::Io(_) => 6,
            Self::Internal(_) => 99, // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::FileNotFound(_) | Self::Io(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::EmptyDataset(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Render(_) => {
                    format!("[{}] {}", category.magenta().bold(), message.magenta())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(error.to_string()),
            _ => Self::io(error.to_string()),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            // csv wraps the underlying I/O failure; surface a missing file as such
            match error.into_kind() {
                csv::ErrorKind::Io(io_err) => io_err.into(),
                other => Self::parse(format!("CSV error: {:?}", other)),
            }
        } else {
            Self::parse(format!("CSV error: {}", error))
        }
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::parse(format!("Float parse error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON encode error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;
