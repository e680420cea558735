/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use hypercsa::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "hypercsa",
    about = "Compress hypergraphs and query them in compressed form.",
    long_about = None
)]
struct Cli {
    /// The input file: a hypergraph (one edge per line, nodes separated by
    /// spaces, tabs, or commas) when compressing, a compressed index when
    /// querying.
    #[arg(short = 'i')]
    input: PathBuf,

    /// Compress the input hypergraph to this file.
    #[arg(short = 'o', conflicts_with_all = ["query", "query_file"])]
    output: Option<PathBuf>,

    /// The query type: 0 for exact match, 1 for containment.
    #[arg(short = 't', default_value_t = 0)]
    query_type: u8,

    /// Evaluate a single query, given as a comma-separated node list.
    #[arg(short = 'q')]
    query: Option<String>,

    /// Evaluate all queries in a file, one query per line.
    #[arg(short = 'f')]
    query_file: Option<PathBuf>,
}

fn parse_query(query: &str) -> Result<Vec<Node>> {
    query
        .split([',', ' '])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Node>()
                .with_context(|| format!("'{}' is not a node id", token))
        })
        .collect()
}

fn run_query(graph: &CompressedHyperGraph, query: &[Node], kind: QueryKind) {
    let results = graph.query(query, kind);
    println!("Query has {} results.", results.len());
    for edge in results {
        let nodes: Vec<String> = edge.iter().map(usize::to_string).collect();
        println!("({})", nodes.join(", "));
    }
}

pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    if let Some(output) = args.output {
        let graph = CompressedHyperGraph::construct_from_file(&args.input, true)
            .with_context(|| format!("Could not compress {}", args.input.display()))?;
        graph
            .save(&output)
            .with_context(|| format!("Could not write {}", output.display()))?;
        return Ok(());
    }

    let kind = match args.query_type {
        0 => QueryKind::Exact,
        1 => QueryKind::Contain,
        t => bail!("Invalid query type {} (use 0 or 1)", t),
    };

    let graph = CompressedHyperGraph::load(&args.input)
        .with_context(|| format!("Could not load {}", args.input.display()))?;

    if let Some(query) = args.query {
        run_query(&graph, &parse_query(&query)?, kind);
    } else if let Some(query_file) = args.query_file {
        let content = std::fs::read_to_string(&query_file)
            .with_context(|| format!("Could not read {}", query_file.display()))?;
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            run_query(&graph, &parse_query(line)?, kind);
        }
    } else {
        bail!("Nothing to do: pass -o to compress, or -q/-f to query");
    }
    Ok(())
}
