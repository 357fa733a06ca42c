//! # Centralized Error Handling
//!
//! Unified error types for the crate using `thiserror`.

use thiserror::Error;

/// Main error type for reduction and benchmark operations
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Domain errors (worker count out of range, empty iteration budget)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Type alias for Results using ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;

impl ComputeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ComputeError::invalid_input("num_threads too large").to_string(),
            "Invalid input: num_threads too large"
        );
        assert_eq!(
            ComputeError::config("iters must be positive").to_string(),
            "Configuration error: iters must be positive"
        );
    }
}
