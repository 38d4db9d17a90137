// Deskbench - Desktop Framework Benchmark Reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for report generation.
//!
//! Every fallible operation in the pipeline returns `Result<T, ReportError>`.
//! Missing benchmark data is never an error: it renders as `?` in the report.
//! Errors are reserved for unreadable or malformed inputs, which abort the
//! run before any output is written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// The main error type for report generation.
///
/// # Examples
///
/// ```rust,no_run
/// use deskbench_core::error::ReportError;
///
/// fn read(path: &str) -> Result<String, ReportError> {
///     std::fs::read_to_string(path).map_err(|e| ReportError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum ReportError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// A JSON input could not be deserialized.
    #[error("JSON error in '{path}': {message}")]
    Json {
        /// The file path holding the malformed document
        path: PathBuf,
        /// The serde_json error message, including line and column
        message: String,
    },

    /// The report configuration is inconsistent.
    ///
    /// Raised for empty or duplicate identifiers and identifiers that would
    /// break benchmark key paths.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `stats.json` has no entry for a configured library.
    #[error("No stats entry for library '{library}'")]
    MissingStats {
        /// The library identifier missing from the stats document
        library: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ReportError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use deskbench_core::error::ReportError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("stats.json")
    ///     .map_err(|e| ReportError::io_error("stats.json", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a JSON error with file path context.
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing stats error.
    pub fn missing_stats(library: impl Into<String>) -> Self {
        Self::MissingStats {
            library: library.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
