#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the generator crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::path::{Path, PathBuf};

/// Exit status used for every failure except overwrite conflicts.
const EXIT_FAILURE: i32 = 1;
/// Exit status reserved for [`Error::OverwriteConflict`].
const EXIT_OVERWRITE_CONFLICT: i32 = 2;

/// Unified error type returned by the configuration loader, the page
/// renderer, the site generator, and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading configuration files.
    #[error("failed to read configuration from {path:?}: {source}")]
    Io {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps JSON decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// A `subs` entry was neither a string nor an object with a string `name`.
    #[error("malformed sub entry at line {line} column {column}: expected a string or an object with a string name")]
    MalformedSubEntry {
        /// One-based line of the offending entry in the configuration.
        line:   usize,
        /// One-based column of the offending entry in the configuration.
        column: usize
    },
    /// Returned when the configuration cannot be rendered.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while writing generated pages.
    #[error("failed to write {path:?}: {source}")]
    Write {
        /// Directory or file being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// A page target already exists and overwriting was disabled.
    #[error("refusing to overwrite existing file {path:?}")]
    OverwriteConflict {
        /// Location of the file that already exists.
        path: PathBuf
    },
    /// Formatting a page into its buffer failed.
    #[error("failed to render page: {source}")]
    Render {
        /// Formatter error raised while building the document.
        source: std::fmt::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }

    /// Process exit status the CLI reports for this error.
    ///
    /// Overwrite conflicts use a dedicated status so scripts can tell them
    /// apart from I/O or configuration failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OverwriteConflict {
                ..
            } => EXIT_OVERWRITE_CONFLICT,
            _ => EXIT_FAILURE
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(source: std::fmt::Error) -> Self {
        Self::Render {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Write`] variant capturing the failing path and source.
pub fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source
    }
}
