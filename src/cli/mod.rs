// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shakesearch command-line interface.
//!
//! Three subcommands: `serve` to run the HTTP search service, `search` to
//! query a corpus file directly from the terminal, and `inspect` to report
//! corpus and index statistics.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shakesearch::config::{EngineArgs, ServeConfig};

#[derive(Parser)]
#[command(
    name = "shakesearch",
    about = "Case-insensitive substring search with context snippets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a corpus and serve `/search` plus static assets over HTTP
    Serve(ServeConfig),

    /// Search a corpus file and print the snippets
    Search {
        /// Path to the corpus text file
        corpus: PathBuf,

        /// One or more queries
        #[arg(required = true)]
        queries: Vec<String>,

        /// Maximum number of snippets to print per query
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of highlighted text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Report corpus size, index size and build time
    Inspect {
        /// Path to the corpus text file
        corpus: PathBuf,
    },
}
