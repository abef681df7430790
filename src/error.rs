// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Loading the corpus is the only fallible step in the core. Queries never
//! fail: "no matches" is an empty result, not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The corpus source could not be turned into a [`Corpus`](crate::Corpus).
///
/// Always fatal to startup. There is nothing to retry against: the error
/// indicates a misconfigured path or a corrupt file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source bytes are not valid UTF-8.
    #[error("corpus {} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl LoadError {
    /// Path of the source that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Encoding { path, .. } => path,
        }
    }
}

/// Failures of the HTTP boundary.
#[cfg(feature = "server")]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] io::Error),
}
