/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use hypercsa::prelude::*;

/// The worked sample: five edges, five nodes, total rank 13.
fn sample() -> Result<CompressedHyperGraph> {
    let graph = HyperGraph::from_edges(vec![
        vec![0, 1, 2, 3],
        vec![1, 2, 3],
        vec![2],
        vec![0, 1, 2, 4],
        vec![2],
    ])?;
    Ok(construct(graph)?)
}

fn sorted(mut edges: Vec<Edge>) -> Vec<Edge> {
    edges.sort();
    edges
}

#[test]
fn test_build_sample() -> Result<()> {
    let g = sample()?;
    assert_eq!(g.num_nodes(), 5);
    assert_eq!(g.len(), 13);
    g.validate()?;
    assert_eq!(
        sorted(g.edges()),
        vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 2, 4],
            vec![1, 2, 3],
            vec![2],
            vec![2],
        ]
    );
    Ok(())
}

#[test]
fn test_exact_duplicate_edges() -> Result<()> {
    let g = sample()?;
    assert_eq!(
        g.query(&[2], QueryKind::Exact),
        vec![vec![2], vec![2]]
    );
    Ok(())
}

#[test]
fn test_exact_matches_only_whole_edges() -> Result<()> {
    let g = sample()?;
    assert_eq!(
        g.query(&[1, 2, 3], QueryKind::Exact),
        vec![vec![1, 2, 3]]
    );
    assert_eq!(
        g.query(&[0, 1, 2, 3], QueryKind::Exact),
        vec![vec![0, 1, 2, 3]]
    );
    // Subsets of stored edges that are not themselves edges do not match.
    assert!(g.query(&[1, 2], QueryKind::Exact).is_empty());
    assert!(g.query(&[2, 3], QueryKind::Exact).is_empty());
    Ok(())
}

#[test]
fn test_exact_query_order_is_immaterial() -> Result<()> {
    let g = sample()?;
    assert_eq!(
        g.query(&[3, 1, 2], QueryKind::Exact),
        vec![vec![1, 2, 3]]
    );
    Ok(())
}

#[test]
fn test_contain_sample() -> Result<()> {
    let g = sample()?;
    assert_eq!(
        sorted(g.query(&[1, 2], QueryKind::Contain)),
        vec![vec![0, 1, 2, 3], vec![0, 1, 2, 4], vec![1, 2, 3]]
    );
    assert_eq!(
        sorted(g.query(&[1, 3], QueryKind::Contain)),
        vec![vec![0, 1, 2, 3], vec![1, 2, 3]]
    );
    // No edge contains 1, 3, and 4 at the same time.
    assert!(g.query(&[1, 3, 4], QueryKind::Contain).is_empty());
    Ok(())
}

#[test]
fn test_contain_single_node() -> Result<()> {
    let g = sample()?;
    assert_eq!(g.query(&[2], QueryKind::Contain).len(), 5);
    assert_eq!(
        sorted(g.query(&[4], QueryKind::Contain)),
        vec![vec![0, 1, 2, 4]]
    );
    Ok(())
}

#[test]
fn test_unknown_nodes_yield_empty() -> Result<()> {
    let g = sample()?;
    assert!(g.query(&[5], QueryKind::Exact).is_empty());
    assert!(g.query(&[1, 7], QueryKind::Contain).is_empty());
    assert!(g.query(&[], QueryKind::Exact).is_empty());
    assert!(g.query(&[], QueryKind::Contain).is_empty());
    Ok(())
}

#[test]
fn test_delete_edge_last_node_occurrence_rejected() -> Result<()> {
    let mut g = sample()?;
    // Node 4 only occurs in [0, 1, 2, 4]: deleting that edge would leave
    // a hole in the node range.
    let rep = g.representative_of(&[0, 1, 2, 4]).unwrap();
    assert!(matches!(
        g.delete_edge(rep),
        Err(Error::InvariantViolation(_))
    ));
    // The failed edit must leave the index untouched.
    g.validate()?;
    assert_eq!(g.len(), 13);
    assert_eq!(g.edges().len(), 5);
    Ok(())
}

#[test]
fn test_delete_edge() -> Result<()> {
    let mut g = sample()?;
    let rep = g.representative_of(&[1, 2, 3]).unwrap();
    g.delete_edge(rep)?;
    g.validate()?;
    assert_eq!(g.len(), 10);
    assert_eq!(
        sorted(g.edges()),
        vec![vec![0, 1, 2, 3], vec![0, 1, 2, 4], vec![2], vec![2]]
    );
    // The surviving set behaves as if compressed afresh.
    let fresh = construct(HyperGraph::from_edges(g.edges())?)?;
    assert_eq!(sorted(fresh.edges()), sorted(g.edges()));
    assert_eq!(
        g.query(&[1, 2], QueryKind::Contain).len(),
        fresh.query(&[1, 2], QueryKind::Contain).len()
    );
    Ok(())
}

#[test]
fn test_delete_node_from_edge() -> Result<()> {
    let mut g = sample()?;
    let rep = g.representative_of(&[0, 1, 2, 3]).unwrap();
    g.delete_node_from_edge(rep, 2)?;
    g.validate()?;
    assert_eq!(g.len(), 12);
    assert_eq!(
        sorted(g.edges()),
        vec![
            vec![0, 1, 2, 4],
            vec![0, 1, 3],
            vec![1, 2, 3],
            vec![2],
            vec![2],
        ]
    );
    assert!(g
        .query(&[0, 3], QueryKind::Contain)
        .contains(&vec![0, 1, 3]));
    assert_eq!(
        g.query(&[0, 1, 3], QueryKind::Exact),
        vec![vec![0, 1, 3]]
    );
    Ok(())
}

#[test]
fn test_insert_node_to_edge() -> Result<()> {
    let mut g = sample()?;
    let rep = g.representative_of(&[0, 1, 2, 3]).unwrap();
    g.insert_node_to_edge(rep, 4)?;
    g.validate()?;
    assert_eq!(g.len(), 14);
    assert_eq!(
        g.query(&[0, 1, 2, 3, 4], QueryKind::Exact),
        vec![vec![0, 1, 2, 3, 4]]
    );
    assert!(g.query(&[0, 1, 2, 3], QueryKind::Exact).is_empty());
    Ok(())
}

#[test]
fn test_modify_noops_are_bit_identical() -> Result<()> {
    let mut g = sample()?;
    let pristine = sample()?;
    let rep = g.representative_of(&[0, 1, 2, 3]).unwrap();
    // Inserting a node the edge already has is a no-op.
    g.insert_node_to_edge(rep, 2)?;
    assert_eq!(g, pristine);
    // Deleting a node the edge does not have is a no-op.
    g.delete_node_from_edge(rep, 4)?;
    assert_eq!(g, pristine);
    Ok(())
}

#[test]
fn test_insert_edge_rebuilds() -> Result<()> {
    let mut g = sample()?;
    g.insert_edge(&[3, 4])?;
    g.validate()?;
    assert_eq!(g.len(), 15);
    assert_eq!(g.query(&[3, 4], QueryKind::Exact), vec![vec![3, 4]]);
    // A new node id extending the dense range is accepted.
    g.insert_edge(&[4, 5])?;
    g.validate()?;
    assert_eq!(g.num_nodes(), 6);
    assert_eq!(g.query(&[4, 5], QueryKind::Exact), vec![vec![4, 5]]);
    Ok(())
}

#[test]
fn test_edges_equal() -> Result<()> {
    let g = sample()?;
    let reps = g.representatives();
    assert_eq!(reps.len(), 5);
    let rank_one: Vec<usize> = reps
        .iter()
        .copied()
        .filter(|&p| g.decompress_edge(p).len() == 1)
        .collect();
    assert_eq!(rank_one.len(), 2);
    assert!(g.edges_equal(rank_one[0], rank_one[1]));
    let first = g.representative_of(&[0, 1, 2, 3]).unwrap();
    let second = g.representative_of(&[0, 1, 2, 4]).unwrap();
    assert!(!g.edges_equal(first, second));
    assert!(g.edges_equal(first, first));
    Ok(())
}

#[test]
fn test_minimum_graph() -> Result<()> {
    let g = construct(HyperGraph::from_edges(vec![vec![0]])?)?;
    assert_eq!(g.len(), 1);
    assert_eq!(g.num_nodes(), 1);
    assert_eq!(g.edges(), vec![vec![0]]);
    assert_eq!(g.query(&[0], QueryKind::Exact), vec![vec![0]]);
    assert_eq!(g.query(&[0], QueryKind::Contain), vec![vec![0]]);
    Ok(())
}

#[test]
fn test_query_with_rank_equal_to_edge_is_exact() -> Result<()> {
    let g = sample()?;
    let exact = g.query(&[0, 1, 2, 3], QueryKind::Exact);
    let contain = g.query(&[0, 1, 2, 3], QueryKind::Contain);
    assert_eq!(sorted(exact), sorted(contain));
    Ok(())
}
