//! Error handling for sum-forge

use thiserror::Error;

use crate::types::SpaceSize;

/// Main error type for sum-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumForgeError {
    #[error("No solution found for length {length} (target {target}) after {attempts} attempts")]
    NotFound {
        length: usize,
        target: i64,
        attempts: usize,
    },

    #[error("Search space for length {length} has {total} combinations, above the ceiling of {ceiling}")]
    Overflow {
        length: usize,
        total: SpaceSize,
        ceiling: u128,
    },

    #[error("Target {target} is unreachable at length {length} (bounds: {min_sum}-{max_sum})")]
    Infeasible {
        length: usize,
        target: i64,
        min_sum: i64,
        max_sum: i64,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },
}

impl SumForgeError {
    /// Create a not-found error
    pub fn not_found(length: usize, target: i64, attempts: usize) -> Self {
        Self::NotFound {
            length,
            target,
            attempts,
        }
    }

    /// Create an overflow error
    pub fn overflow(length: usize, total: SpaceSize, ceiling: u128) -> Self {
        Self::Overflow {
            length,
            total,
            ceiling,
        }
    }

    /// Create an infeasible-target error
    pub fn infeasible(length: usize, target: i64, min_sum: i64, max_sum: i64) -> Self {
        Self::Infeasible {
            length,
            target,
            min_sum,
            max_sum,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Generation outcomes the caller is expected to act on rather than abort
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Overflow { .. } | Self::Infeasible { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { length, attempts, .. } => {
                format!(
                    "🔍 No string of length {} found in {} attempts\n💡 Raise the attempt budget or try another length",
                    length, attempts
                )
            }
            Self::Overflow { length, total, .. } => {
                format!(
                    "📦 Length {} has {} combinations, too many to enumerate\n💡 Use sampling for this length",
                    length, total
                )
            }
            Self::Infeasible {
                length,
                target,
                min_sum,
                max_sum,
            } => {
                format!(
                    "❌ Sum {} cannot be reached with {} characters (range {}-{})\n💡 Skip this length",
                    target, length, min_sum, max_sum
                )
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input values", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or configuration", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the file contents", message)
            }
        }
    }
}

impl From<serde_json::Error> for SumForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for SumForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SumForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::SumForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SumForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::SumForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SumForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_outcomes_are_recoverable() {
        assert!(SumForgeError::not_found(8, 867, 10).is_recoverable());
        assert!(SumForgeError::overflow(8, SpaceSize::Exact(10), 5).is_recoverable());
        assert!(SumForgeError::infeasible(1, 867, 48, 122).is_recoverable());
        assert!(!SumForgeError::config("bad").is_recoverable());
    }

    #[test]
    fn test_display_includes_bounds() {
        let err = SumForgeError::infeasible(5, 867, 240, 610);
        let msg = err.to_string();
        assert!(msg.contains("240-610"));
        assert!(err.user_message().contains("Skip this length"));
    }

    #[test]
    fn test_macros() {
        let err = validation_error!("length {} out of range", 0);
        assert_eq!(err, SumForgeError::validation("length 0 out of range"));
        let err = config_error!("missing");
        assert!(err.to_string().contains("missing"));
    }
}
