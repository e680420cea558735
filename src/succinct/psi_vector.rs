/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_bitstream::prelude::*;
use epserde::Epserde;

/// How many values share one absolute sample.
const SAMPLE_PERIOD: usize = 64;

/// Bijective mapping from isize to u64 as defined in
/// <https://github.com/vigna/dsiutils/blob/master/src/it/unimi/dsi/bits/Fast.java>.
const fn int2nat(x: i64) -> u64 {
    (x << 1 ^ (x >> 63)) as u64
}

/// Bijective mapping from u64 to i64 as defined in
/// <https://github.com/vigna/dsiutils/blob/master/src/it/unimi/dsi/bits/Fast.java>.
const fn nat2int(x: u64) -> i64 {
    ((x >> 1) ^ !((x & 1).wrapping_sub(1))) as i64
}

/// The ψ permutation of the index, stored as a δ-coded bit stream.
///
/// Every [`SAMPLE_PERIOD`]-th value is stored verbatim together with the
/// bit offset of its block; the values in between are stored as δ codes of
/// the difference from their predecessor, mapped to naturals. ψ is strictly
/// increasing inside every node interval, so the differences are small and
/// positive almost everywhere; the mapping only pays one extra bit for the
/// occasional drop at an interval boundary.
///
/// The structure is immutable: modifications of the index decode the whole
/// sequence with [`to_vec`](PsiVector::to_vec) and re-encode a fresh one.
#[derive(Epserde, Debug, Clone, PartialEq, Eq)]
pub struct PsiVector {
    len: usize,
    samples: Vec<u64>,
    offsets: Vec<u64>,
    data: Vec<u64>,
}

impl PsiVector {
    /// Encodes a sequence of non-negative values.
    pub fn from_slice(values: &[usize]) -> Self {
        let blocks = values.len().div_ceil(SAMPLE_PERIOD);
        let mut samples = Vec::with_capacity(blocks);
        let mut offsets = Vec::with_capacity(blocks);
        let mut writer = BufBitWriter::<BE, _>::new(MemWordWriterVec::new(Vec::<u64>::new()));
        let mut written = 0u64;
        for chunk in values.chunks(SAMPLE_PERIOD) {
            samples.push(chunk[0] as u64);
            offsets.push(written);
            let mut prev = chunk[0] as i64;
            for &value in &chunk[1..] {
                written += writer.write_delta(int2nat(value as i64 - prev)).unwrap() as u64;
                prev = value as i64;
            }
        }
        let data = writer.into_inner().unwrap().into_inner();
        Self {
            len: values.len(),
            samples,
            offsets,
            data,
        }
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at index `p`.
    ///
    /// Decodes at most [`SAMPLE_PERIOD`] − 1 codes past the nearest sample.
    pub fn get(&self, p: usize) -> usize {
        assert!(p < self.len, "index {} out of bounds ({})", p, self.len);
        let block = p / SAMPLE_PERIOD;
        let mut value = self.samples[block] as i64;
        let within = p % SAMPLE_PERIOD;
        if within != 0 {
            let mut reader = self.reader();
            reader.set_bit_pos(self.offsets[block]).unwrap();
            for _ in 0..within {
                value += nat2int(reader.read_delta().unwrap());
            }
        }
        value as usize
    }

    /// Decodes the whole sequence.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut values = Vec::with_capacity(self.len);
        let mut reader = self.reader();
        for (block, &sample) in self.samples.iter().enumerate() {
            let end = ((block + 1) * SAMPLE_PERIOD).min(self.len);
            let mut value = sample as i64;
            values.push(sample as usize);
            for _ in block * SAMPLE_PERIOD + 1..end {
                value += nat2int(reader.read_delta().unwrap());
                values.push(value as usize);
            }
        }
        values
    }

    /// The smallest index in `[lo, hi)` whose value is at least `target`,
    /// or `hi` if there is none.
    ///
    /// Meaningful only when the values in `[lo, hi)` are sorted, which
    /// holds inside a node interval.
    pub fn lower_bound(&self, lo: usize, hi: usize, target: usize) -> usize {
        let (mut lo, mut hi) = (lo, hi);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.get(mid) < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// The smallest index in `[lo, hi)` whose value is greater than
    /// `target`, or `hi` if there is none.
    pub fn upper_bound(&self, lo: usize, hi: usize, target: usize) -> usize {
        let (mut lo, mut hi) = (lo, hi);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.get(mid) <= target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn reader(&self) -> BufBitReader<BE, MemWordReader<u64, &[u64]>> {
        BufBitReader::<BE, _>::new(MemWordReader::new(self.data.as_slice()))
    }
}
