/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use epserde::prelude::*;
use log::info;
use sux::bits::BitVec;
use sux::traits::BitLength;

use crate::csa::{construct, CompressedHyperGraph};
use crate::error::{Error, Result};
use crate::hypergraph::parse_hypergraph;
use crate::succinct::{IntervalBits, PsiVector};

impl CompressedHyperGraph {
    /// Parses a hypergraph text file and compresses it.
    pub fn construct_from_file(path: impl AsRef<Path>, base_zero: bool) -> Result<Self> {
        construct(parse_hypergraph(path, base_zero)?)
    }

    /// Writes the index to a file: `D` followed by `PSI`, each in the
    /// self-describing ε-serde format (native byte order).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.d().bit_vec().serialize(&mut writer)?;
        self.psi().serialize(&mut writer)?;
        info!("Saved index to '{}'", path.display());
        Ok(())
    }

    /// Reads an index written by [`save`](CompressedHyperGraph::save),
    /// rebuilding the rank/select support structures.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let bits = BitVec::deserialize_full(&mut reader)?;
        let psi = PsiVector::deserialize_full(&mut reader)?;
        if bits.len() != psi.len() + 1 {
            return Err(Error::InvariantViolation(format!(
                "'{}' holds mismatched arrays: |D| = {}, |PSI| = {}",
                path.display(),
                bits.len(),
                psi.len()
            )));
        }
        info!(
            "Loaded index from '{}' ({} positions)",
            path.display(),
            psi.len()
        );
        Ok(Self::from_parts(IntervalBits::new(bits), psi))
    }
}
