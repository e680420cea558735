/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error kinds surfaced by construction, modification, and persistence.
//!
//! Queries never fail: an empty result list is the answer for a query that
//! matches nothing, including queries mentioning node ids that are not in
//! the graph.

/// The error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input cannot be turned into a valid hypergraph: an edge is
    /// empty, a token is not a number, or the node ids do not form a
    /// contiguous range starting at 0.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A modification would break a structural invariant of the index,
    /// or the index itself is inconsistent (e.g., a ψ cycle that does
    /// not close).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// An I/O failure while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A failure while serializing the index.
    #[error(transparent)]
    Serialization(#[from] epserde::ser::Error),
    /// A failure while deserializing the index.
    #[error(transparent)]
    Deserialization(#[from] epserde::deser::Error),
}

/// A [`Result`](std::result::Result) with this crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
