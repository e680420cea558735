/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Suffix-array construction over integer texts.
//!
//! The index only consumes the ψ function of the suffix array, so this
//! module exposes just that: [`psi`] returns, for every position of the
//! suffix array of `text` terminated by a sentinel, the suffix-array
//! position of the suffix starting one token later.
//!
//! The suffix array is built by prefix doubling: suffixes are repeatedly
//! sorted by their first `2k` tokens using the ranks of the previous round
//! as keys. This is O(L log² L), entirely deterministic, and works for any
//! token width without an alphabet-compaction pass.

/// Computes ψ of the suffix array of `text` followed by a sentinel.
///
/// All tokens must be nonzero; the sentinel 0 is appended virtually and is
/// the unique smallest suffix, so it ends up at suffix-array position 0.
/// The result has length `text.len() + 1` and `psi[p]` is the suffix-array
/// position of the successor suffix of the one at position `p`, wrapping
/// around at the end of the text.
pub fn psi(text: &[usize]) -> Vec<usize> {
    debug_assert!(text.iter().all(|&t| t > 0));
    let n = text.len() + 1;
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = text.iter().copied().chain(core::iter::once(0)).collect();
    let mut next_rank = vec![0usize; n];
    let mut k = 1;
    while k < n {
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });
        sa.sort_unstable_by_key(|&i| key(i));
        next_rank[sa[0]] = 0;
        for w in 1..n {
            next_rank[sa[w]] = next_rank[sa[w - 1]] + (key(sa[w]) != key(sa[w - 1])) as usize;
        }
        core::mem::swap(&mut rank, &mut next_rank);
        if rank[sa[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }
    let mut inverse = vec![0usize; n];
    for (p, &suffix) in sa.iter().enumerate() {
        inverse[suffix] = p;
    }
    sa.iter().map(|&suffix| inverse[(suffix + 1) % n]).collect()
}
