// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the engine and the server.
//!
//! The engine only needs the context radius. The server options are read from
//! command-line flags with environment variable fallbacks:
//!
//! | Flag           | Env var               | Default             |
//! |----------------|-----------------------|---------------------|
//! | `--corpus`     | `SHAKESEARCH_CORPUS`  | `completeworks.txt` |
//! | `--port`       | `PORT`                | `3001`              |
//! | `--host`       | `SHAKESEARCH_HOST`    | `0.0.0.0`           |
//! | `--static-dir` | `SHAKESEARCH_STATIC`  | `./static`          |
//! | `--context`    | `SHAKESEARCH_CONTEXT` | `250`               |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

/// Bytes of context on each side of a match before neighbor trimming.
pub const DEFAULT_CONTEXT_RADIUS: usize = 250;

/// Default corpus file, relative to the working directory.
pub const DEFAULT_CORPUS_PATH: &str = "completeworks.txt";

pub const DEFAULT_PORT: u16 = 3001;

/// Snippet engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Half-width of the default window around each match.
    pub context_radius: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// Options shared by every command that loads a corpus and queries it.
#[derive(Debug, Clone, Args)]
pub struct EngineArgs {
    /// Bytes of context on each side of a match
    #[arg(long = "context", env = "SHAKESEARCH_CONTEXT", default_value_t = DEFAULT_CONTEXT_RADIUS)]
    pub context_radius: usize,
}

impl EngineArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            context_radius: self.context_radius,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Corpus file to load at startup
    #[arg(long, env = "SHAKESEARCH_CORPUS", default_value = DEFAULT_CORPUS_PATH)]
    pub corpus: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "SHAKESEARCH_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory of static assets served at `/`
    #[arg(long, env = "SHAKESEARCH_STATIC", default_value = "./static")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,
}

impl ServeConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
