/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The compressed hypergraph self-index.
//!
//! A [`CompressedHyperGraph`] is a pair of succinct arrays:
//!
//! - `D`, a bit vector with one bit per position of `PSI` plus a terminal
//!   bit; the ones delimit one interval of positions per node, in node
//!   order ([`IntervalBits`]);
//! - `PSI`, a δ-coded permutation of the positions whose functional graph
//!   decomposes into one cycle per hyperedge ([`PsiVector`]).
//!
//! Inside every node interval `PSI` is strictly increasing, and along
//! every cycle positions increase except for the single step that returns
//! to the cycle's smallest position, its *representative*. Walking a cycle
//! from the representative and mapping each position to its node through
//! `rank` on `D` therefore yields the edge's nodes in ascending order.
//!
//! The index is constructed by [`construct`], queried by
//! [`query`](CompressedHyperGraph::query), edited by the modifying
//! operations, and persisted by [`save`](CompressedHyperGraph::save) and
//! [`load`](CompressedHyperGraph::load). Queries and decompression never
//! mutate the arrays; modifications replace both wholesale.

use crate::error::{Error, Result};
use crate::hypergraph::{Edge, Node};
use crate::succinct::{IntervalBits, PsiVector};

mod build;
pub use build::construct;

mod query;
pub use query::QueryKind;

mod modify;

mod io;

/// A compressed hypergraph: the pair `(D, PSI)`.
#[derive(Debug, PartialEq, Eq)]
pub struct CompressedHyperGraph {
    d: IntervalBits,
    psi: PsiVector,
}

impl CompressedHyperGraph {
    pub(crate) fn from_parts(d: IntervalBits, psi: PsiVector) -> Self {
        debug_assert_eq!(d.len(), psi.len() + 1);
        Self { d, psi }
    }

    /// The number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.d.num_nodes()
    }

    /// The number of positions, i.e., the sum of all edge ranks.
    pub fn len(&self) -> usize {
        self.psi.len()
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.psi.is_empty()
    }

    /// The node at position `p`.
    pub fn node_at(&self, p: usize) -> Node {
        self.d.node_at(p)
    }

    pub(crate) fn d(&self) -> &IntervalBits {
        &self.d
    }

    pub(crate) fn psi(&self) -> &PsiVector {
        &self.psi
    }

    pub(crate) fn replace(&mut self, d: IntervalBits, psi: PsiVector) {
        debug_assert_eq!(d.len(), psi.len() + 1);
        self.d = d;
        self.psi = psi;
    }

    /// The positions of the cycle containing `p`, in cycle order starting
    /// at `p`.
    pub(crate) fn cycle_positions(&self, p: usize) -> Result<Vec<usize>> {
        let len = self.psi.len();
        if p >= len {
            return Err(Error::InvariantViolation(format!(
                "position {} out of bounds ({})",
                p, len
            )));
        }
        let mut cycle = vec![p];
        let mut current = self.psi.get(p);
        while current != p {
            if current >= len || cycle.len() > len {
                return Err(Error::InvariantViolation(format!(
                    "the ψ cycle through position {} does not close",
                    p
                )));
            }
            cycle.push(current);
            current = self.psi.get(current);
        }
        Ok(cycle)
    }

    /// Decompresses the edge whose cycle contains position `p`, as an
    /// ascending node list.
    pub fn decompress_edge(&self, p: usize) -> Edge {
        let cycle = self
            .cycle_positions(p)
            .expect("corrupted index: ψ cycle does not close");
        let mut nodes: Edge = cycle.iter().map(|&q| self.d.node_at(q)).collect();
        // Starting anywhere but the representative yields a rotation.
        let min = (0..nodes.len()).min_by_key(|&i| nodes[i]).unwrap();
        nodes.rotate_left(min);
        nodes
    }

    /// Decompresses the whole graph, one edge per cycle.
    pub fn edges(&self) -> Vec<Edge> {
        self.representatives()
            .into_iter()
            .map(|rep| self.decompress_edge(rep))
            .collect()
    }

    /// The representative positions of all cycles, in ascending order.
    ///
    /// The representative of a cycle is its smallest position; it is the
    /// target of the unique backward step `PSI[p] <= p` of the cycle.
    pub fn representatives(&self) -> Vec<usize> {
        let mut reps: Vec<usize> = (0..self.psi.len())
            .filter_map(|p| {
                let next = self.psi.get(p);
                (next <= p).then_some(next)
            })
            .collect();
        reps.sort_unstable();
        reps
    }

    /// The representative position of a stored edge equal to the given
    /// node set, if any.
    ///
    /// If the edge is stored more than once, the smallest representative
    /// is returned.
    pub fn representative_of(&self, edge: &[Node]) -> Option<usize> {
        let edge = query::normalize(edge);
        if edge.is_empty() || edge[0] >= self.num_nodes() {
            return None;
        }
        // An exactly matching cycle has its representative in the interval
        // of the edge's smallest node.
        self.d
            .interval(edge[0])
            .find(|&p| self.decompress_edge(p) == edge)
    }

    /// Whether the edges containing positions `p1` and `p2` have the same
    /// node set.
    pub fn edges_equal(&self, p1: usize, p2: usize) -> bool {
        self.decompress_edge(p1) == self.decompress_edge(p2)
    }

    /// Checks the structural invariants of the pair `(D, PSI)`.
    ///
    /// Verifies the length relation between the two arrays, that every
    /// node interval is non-empty and strictly increasing in `PSI`, and
    /// that ψ partitions the positions into cycles with exactly one
    /// representative each.
    pub fn validate(&self) -> Result<()> {
        let len = self.psi.len();
        if self.d.len() != len + 1 {
            return Err(Error::InvariantViolation(format!(
                "|D| = {} does not match |PSI| + 1 = {}",
                self.d.len(),
                len + 1
            )));
        }
        let values = self.psi.to_vec();
        for u in 0..self.num_nodes() {
            let interval = self.d.interval(u);
            if interval.is_empty() {
                return Err(Error::InvariantViolation(format!(
                    "node {} has an empty interval",
                    u
                )));
            }
            for p in interval.clone() {
                if values[p] >= len {
                    return Err(Error::InvariantViolation(format!(
                        "PSI[{}] = {} out of bounds",
                        p, values[p]
                    )));
                }
                if p > interval.start && values[p] <= values[p - 1] {
                    return Err(Error::InvariantViolation(format!(
                        "PSI is not strictly increasing inside the interval of node {}",
                        u
                    )));
                }
            }
        }
        let mut seen = vec![false; len];
        for start in 0..len {
            if seen[start] {
                continue;
            }
            let mut representatives = 0;
            let mut steps = 0;
            let mut p = start;
            loop {
                seen[p] = true;
                if values[p] <= p {
                    representatives += 1;
                }
                p = values[p];
                steps += 1;
                if p == start {
                    break;
                }
                if seen[p] || steps > len {
                    return Err(Error::InvariantViolation(format!(
                        "the ψ cycle through position {} does not close",
                        start
                    )));
                }
            }
            if representatives != 1 {
                return Err(Error::InvariantViolation(format!(
                    "the cycle through position {} has {} representatives",
                    start, representatives
                )));
            }
        }
        Ok(())
    }
}
