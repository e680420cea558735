/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dsi_progress_logger::prelude::*;
use log::info;

use crate::error::{Error, Result};
use crate::hypergraph::{HyperGraph, Node};

/// Parses a hypergraph from a text file with one edge per line.
///
/// Node ids are non-negative integers separated by spaces, tabs, or
/// commas; blank lines are skipped. With `base_zero`, if the smallest id
/// in the file is positive, it is subtracted from every id, so 1-based
/// (or generally offset) inputs land on the dense range the index
/// requires.
pub fn parse_hypergraph(path: impl AsRef<Path>, base_zero: bool) -> Result<HyperGraph> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let mut pl = ProgressLogger::default();
    pl.item_name("edge");
    pl.start(format!("Parsing hypergraph from '{}'...", path.display()));

    let mut edges: Vec<Vec<Node>> = Vec::new();
    let mut lowest = usize::MAX;
    for (line_no, line) in file.lines().enumerate() {
        let line = line?;
        let mut nodes = Vec::new();
        for token in line.split([' ', '\t', ',']).filter(|t| !t.is_empty()) {
            let node: Node = token.parse().map_err(|_| {
                Error::MalformedInput(format!(
                    "'{}' is not a node id ({}:{})",
                    token,
                    path.display(),
                    line_no + 1
                ))
            })?;
            lowest = lowest.min(node);
            nodes.push(node);
        }
        if nodes.is_empty() {
            continue;
        }
        edges.push(nodes);
        pl.light_update();
    }
    pl.done();

    if base_zero && lowest != usize::MAX && lowest > 0 {
        info!("Rebasing node ids by -{}", lowest);
        for edge in &mut edges {
            for node in edge {
                *node -= lowest;
            }
        }
    }

    let graph = HyperGraph::from_edges(edges)?;
    info!(
        "Parsed {} edges of total rank {}",
        graph.edge_count(),
        graph.total_rank()
    );
    Ok(graph)
}
