// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shakesearch::{server, Searcher};

mod cli;
use cli::display::{format_bytes, render_box, render_snippets, use_colors};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve(config) => run_serve(config),
        Commands::Search {
            corpus,
            queries,
            limit,
            json,
            engine,
        } => run_search(&corpus, &queries, limit, json, engine.search_config()),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shakesearch=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the corpus, build the index, then serve until shutdown.
///
/// Loading happens before the runtime starts so no request can ever observe
/// a partially built searcher.
fn run_serve(config: shakesearch::config::ServeConfig) -> Result<()> {
    let searcher = Searcher::open_with_config(&config.corpus, config.engine.search_config())
        .context("cannot start without a corpus")?;
    let searcher = Arc::new(searcher);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(server::serve(searcher, &config))?;
    Ok(())
}

fn run_search(
    corpus: &Path,
    queries: &[String],
    limit: Option<usize>,
    json: bool,
    config: shakesearch::SearchConfig,
) -> Result<()> {
    let searcher = Searcher::open_with_config(corpus, config)?;
    let results = searcher.search_many(queries);

    if json {
        let body: Vec<_> = queries
            .iter()
            .zip(&results)
            .map(|(query, snippets)| {
                let shown = limit.unwrap_or(snippets.len()).min(snippets.len());
                serde_json::json!({ "query": query, "total": snippets.len(), "snippets": &snippets[..shown] })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let colored = use_colors();
    for (query, snippets) in queries.iter().zip(&results) {
        print!("{}", render_snippets(query, snippets, limit, colored));
    }
    Ok(())
}

fn run_inspect(corpus: &Path) -> Result<()> {
    let loaded = Instant::now();
    let corpus_store = shakesearch::Corpus::load(corpus)?;
    let load_time = loaded.elapsed();

    let checksum = crc32fast::hash(corpus_store.text().as_bytes());
    let bytes = corpus_store.len();
    let chars = corpus_store.text().chars().count();
    let lines = corpus_store.text().lines().count();

    let built = Instant::now();
    let searcher = Searcher::from_corpus(corpus_store);
    let build_time = built.elapsed();

    let rows = [
        ("path", corpus.display().to_string()),
        ("size", format!("{} ({} bytes)", format_bytes(bytes), bytes)),
        ("characters", chars.to_string()),
        ("lines", lines.to_string()),
        ("crc32", format!("{:08x}", checksum)),
        ("suffixes", searcher.index().len().to_string()),
        (
            "index memory",
            format_bytes(searcher.index().len() * std::mem::size_of::<usize>()),
        ),
        ("load time", format!("{:.1?}", load_time)),
        ("build time", format!("{:.1?}", build_time)),
    ];
    print!("{}", render_box("corpus", &rows, use_colors()));
    Ok(())
}
