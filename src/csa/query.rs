/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use itertools::Itertools;

use crate::csa::CompressedHyperGraph;
use crate::hypergraph::{Edge, Node};

/// The two query families answered by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Edges whose node set equals the query.
    Exact,
    /// Edges whose node set is a superset of the query.
    Contain,
}

/// Sorts and deduplicates a query: queries are node sets, like edges.
pub(crate) fn normalize(query: &[Node]) -> Edge {
    query.iter().copied().sorted_unstable().dedup().collect()
}

impl CompressedHyperGraph {
    /// Runs a query and materializes the matching edges.
    ///
    /// Queries never fail: the empty list is the answer when nothing
    /// matches, including when the query mentions node ids the graph does
    /// not have.
    pub fn query(&self, query: &[Node], kind: QueryKind) -> Vec<Edge> {
        let query = normalize(query);
        match query.last() {
            None => return Vec::new(),
            // The query is sorted, so one bound check covers every node.
            Some(&largest) if largest >= self.num_nodes() => return Vec::new(),
            _ => {}
        }
        match kind {
            QueryKind::Exact => self.query_exact(&query),
            QueryKind::Contain => self.query_contain(&query),
        }
    }

    /// Exact match by coordinated interval narrowing.
    ///
    /// The candidate range starts as the whole interval of the smallest
    /// query node. For each further query node, the range is narrowed to
    /// the positions whose ψ value lands in that node's interval (a binary
    /// search, since ψ is sorted inside an interval) and then advanced
    /// through ψ. After the last query node the range contains the final
    /// positions of all candidate cycles: the ones whose ψ steps backward
    /// close a cycle there. A closing cycle can still carry extra nodes
    /// smaller than the smallest query node, so each candidate is
    /// decompressed and compared before it is reported.
    fn query_exact(&self, query: &[Node]) -> Vec<Edge> {
        let mut range = self.d().interval(query[0]);
        for &node in &query[1..] {
            let next = self.d().interval(node);
            let lo = self.psi().lower_bound(range.start, range.end, next.start);
            let hi = self.psi().upper_bound(lo, range.end, next.end - 1);
            if lo == hi {
                return Vec::new();
            }
            range = self.psi().get(lo)..self.psi().get(hi - 1) + 1;
        }
        let mut results = Vec::new();
        for p in range {
            let next = self.psi().get(p);
            if next <= p {
                let edge = self.decompress_edge(next);
                if edge == query {
                    results.push(edge);
                }
            }
        }
        results
    }

    /// Containment by cycle walking from the lowest-degree query node.
    ///
    /// Every position in the pivot's interval belongs to a distinct
    /// candidate edge. Walking a candidate's cycle visits its nodes in
    /// ascending order, except for the single wrap at the representative,
    /// so the query nodes can be matched in cyclic order starting after
    /// the pivot. Two observations prune dead candidates early: once a
    /// position decreases, no node larger than the pivot can follow, and
    /// once a node overshoots the current query target the target cannot
    /// occur at all.
    fn query_contain(&self, query: &[Node]) -> Vec<Edge> {
        let pivot_index = (0..query.len())
            .min_by_key(|&i| self.d().interval(query[i]).len())
            .unwrap();
        // Query nodes above and below the pivot, each in ascending order;
        // the walk must match all of the former before it wraps and all of
        // the latter after.
        let above = &query[pivot_index + 1..];
        let below = &query[..pivot_index];

        let mut results = Vec::new();
        'candidates: for start in self.d().interval(query[pivot_index]) {
            let mut above = above.iter().copied().peekable();
            let mut below = below.iter().copied().peekable();
            let mut wrapped = false;
            let mut previous = start;
            let mut position = self.psi().get(start);
            while position != start {
                if position < previous {
                    if above.peek().is_some() {
                        continue 'candidates;
                    }
                    wrapped = true;
                }
                let node = self.node_at(position);
                let targets = if wrapped { &mut below } else { &mut above };
                if let Some(&target) = targets.peek() {
                    if node == target {
                        targets.next();
                    } else if node > target {
                        continue 'candidates;
                    }
                }
                previous = position;
                position = self.psi().get(position);
            }
            if above.peek().is_none() && below.peek().is_none() {
                results.push(self.decompress_edge(start));
            }
        }
        results
    }
}
