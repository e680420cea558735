/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Succinct building blocks of the index.
//!
//! This module adapts the general-purpose structures of the ecosystem to
//! the two arrays the index is made of: [`IntervalBits`] wraps a [`sux`]
//! bit vector with rank/select support and exposes the node-interval
//! geometry, and [`PsiVector`] stores the ψ permutation as a sampled,
//! δ-coded bit stream. [`suffix_array`] provides the construction-time ψ
//! of the linearized edge set.

mod interval_bits;
pub use interval_bits::IntervalBits;

mod psi_vector;
pub use psi_vector::PsiVector;

pub mod suffix_array;
