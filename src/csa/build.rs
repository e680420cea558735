/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use log::info;

use crate::csa::CompressedHyperGraph;
use crate::error::{Error, Result};
use crate::hypergraph::HyperGraph;
use crate::succinct::{suffix_array, IntervalBits, PsiVector};

/// Compresses a hypergraph into a [`CompressedHyperGraph`].
///
/// The graph is consumed: construction reorders its edges to produce the
/// linearized token stream, builds the ψ of its suffix array, reroutes ψ
/// into one cycle per edge, and derives the interval bit vector from the
/// node frequencies.
///
/// Fails with [`MalformedInput`](Error::MalformedInput) if the node ids
/// of the graph do not form a contiguous range starting at 0.
pub fn construct(graph: HyperGraph) -> Result<CompressedHyperGraph> {
    if graph.is_empty() {
        return Ok(CompressedHyperGraph::from_parts(
            IntervalBits::from_interval_sizes(&[]),
            PsiVector::from_slice(&[]),
        ));
    }

    let linear = linearize(graph);
    info!("Linearized {} tokens", linear.len());
    let sizes = interval_sizes(&linear)?;

    let mut psi = suffix_array::psi(&linear);
    info!("Built suffix-array ψ over {} positions", psi.len());
    adjust_psi(&mut psi);

    let psi = PsiVector::from_slice(&psi);
    let d = IntervalBits::from_interval_sizes(&sizes);
    info!(
        "Compressed {} nodes, {} positions",
        d.num_nodes(),
        psi.len()
    );
    Ok(CompressedHyperGraph::from_parts(d, psi))
}

/// Turns the edge list into the linearized token stream.
///
/// Edges are already ascending inside; they are sorted by descending
/// lexicographic order (stably, so equal edges stay adjacent in input
/// order), concatenated, and shifted by +1 to reserve token 0 for the
/// suffix-array sentinel. The descending order makes every suffix starting
/// at a later edge smaller than every suffix starting at an earlier one,
/// which is what turns the inter-edge ψ steps into backward jumps.
fn linearize(graph: HyperGraph) -> Vec<usize> {
    let total = graph.total_rank();
    let mut edges = graph.into_edges();
    edges.sort_by(|a, b| b.cmp(a));
    let mut linear = Vec::with_capacity(total);
    for edge in &edges {
        linear.extend(edge.iter().map(|&node| node + 1));
    }
    linear
}

/// Tallies token frequencies, which are exactly the node interval sizes.
///
/// The tokens of a dense graph cover `[1, n]` with no gaps; a gap means
/// the input skipped a node id.
fn interval_sizes(linear: &[usize]) -> Result<Vec<usize>> {
    let max = *linear.iter().max().unwrap();
    let mut sizes = vec![0usize; max];
    for &token in linear {
        sizes[token - 1] += 1;
    }
    if let Some(missing) = sizes.iter().position(|&size| size == 0) {
        return Err(Error::MalformedInput(format!(
            "node ids are not dense: {} never occurs but {} does",
            missing,
            max - 1
        )));
    }
    Ok(sizes)
}

/// Reroutes the single global ψ cycle into one cycle per edge.
///
/// The ψ of the suffix array is one cycle over all `L + 1` positions,
/// visiting them in text order. Within an edge the tokens ascend, so every
/// intra-edge step goes to a larger position; the step from the last token
/// of an edge to the first token of the next is a backward jump. Cutting
/// at every backward jump and rerouting it to the start of the jump's own
/// edge closes one cycle per edge. The first cut target is `ψ[0]`, the
/// position of the first text suffix, so the first edge's cycle closes
/// directly instead of through the sentinel.
///
/// Afterwards the sentinel position 0 is stripped and the remaining values
/// are rebased, leaving a permutation of `[0, L)`.
fn adjust_psi(psi: &mut Vec<usize>) {
    let mut last_break = psi[0];
    let mut current = 0;
    let mut next = psi[0];
    loop {
        if current > next {
            psi[current] = last_break;
            last_break = next;
        }
        current = next;
        if current == 0 {
            break;
        }
        next = psi[current];
    }
    psi.remove(0);
    for value in psi.iter_mut() {
        debug_assert!(*value > 0);
        *value -= 1;
    }
}
