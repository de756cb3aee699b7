// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::Diagnostic;
use thiserror::Error as ThisError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Write,
}

/// Type of error used throughout qecho infrastructure code.
///
/// Command line parse failures never reach this type: clap reports them on its
/// own error path before `run_qecho` is called.
#[derive(Debug, Diagnostic, ThisError)]
#[must_use]
pub enum Error {
    /// An error when writing the output line fails.
    #[error("failed to write query output: {source}")]
    #[diagnostic()]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Write { .. } => ErrorKind::Write,
        }
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Box<Error>>;
