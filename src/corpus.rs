// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus store: the original text plus its case-folded view.
//!
//! Both are computed once and never change. The folded view has the same
//! byte length and character boundaries as the original (see [`fold_case`]),
//! so offsets found by the index slice the original directly.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LoadError;
use crate::types::Window;
use crate::utils::{ceil_char_boundary, floor_char_boundary, fold_case};

/// Immutable corpus text.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    folded: Arc<[u8]>,
}

impl Corpus {
    /// Read the whole file at `path` in one pass.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::read_from(file, path)?;

        tracing::info!(
            path = %path.display(),
            bytes = corpus.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }

    /// Read a corpus from any byte source.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Self::read_from(reader, Path::new("<reader>"))
    }

    fn read_from(mut reader: impl Read, path: &Path) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Io {
                path: PathBuf::from(path),
                source,
            })?;
        let text = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(Self::from_text(text))
    }

    /// Wrap text that is already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded: Arc<[u8]> = fold_case(&text).into_bytes().into();
        debug_assert_eq!(folded.len(), text.len());
        Self { text, folded }
    }

    /// Original-case text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded bytes, shared with the match index.
    pub fn folded(&self) -> &Arc<[u8]> {
        &self.folded
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Original-case text for `window`.
    ///
    /// Bounds are clamped to the corpus and widened outward to the nearest
    /// character boundaries, so this never panics.
    pub fn slice(&self, window: Window) -> &str {
        let (start, end) = self.char_aligned(window);
        &self.text[start..end]
    }

    /// `window` clamped and widened to character boundaries.
    ///
    /// An empty window stays empty.
    pub fn char_aligned(&self, window: Window) -> (usize, usize) {
        let start = floor_char_boundary(&self.text, window.start);
        if window.is_empty() {
            return (start, start);
        }
        let end = ceil_char_boundary(&self.text, window.end).max(start);
        (start, end)
    }
}
