/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod csa;
pub mod error;
pub mod hypergraph;
pub mod succinct;

pub use error::{Error, Result};

/// Prelude module to import everything from this crate.
pub mod prelude {
    pub use crate::csa::*;
    pub use crate::error::*;
    pub use crate::hypergraph::*;
    pub use crate::succinct::*;
}
