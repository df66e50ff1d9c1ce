// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Small k-subsets enumeration.

/// Largest set size.
pub const MAX_N: usize = 7;

/// Creates table for nck(n, k) for n, k <= 7.
const fn make_nck() -> [[u32; MAX_N + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_N + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_N + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");

    if k > n { 0 } else { NCKS[n][k] as usize }
}

/// Calls the given closure with each k-subset of `0..n` in lexicographic
/// order of the reversed positions.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");

    if k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] holds the current subset and the
    // two sentinels after it.
    let mut c = [0usize; MAX_N + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
