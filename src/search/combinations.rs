//! Index-based k-combination enumeration.
//!
//! Yields every selection of `k` distinct indices from `0..n` in
//! lexicographic order. The search relies on this order: ties between
//! candidates are resolved by whichever combination was enumerated first,
//! so the order is part of the engine's contract, not an implementation
//! detail.

/// Iterator over all `C(n, k)` index combinations in lexicographic order.
///
/// `k == 0` yields exactly one empty selection; `k > n` yields nothing.
pub struct IndexCombinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        IndexCombinations {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Advance the rightmost index that has room, then reset everything
        // to its right to the smallest ascending run.
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                self.indices[i] += 1;
                for j in (i + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(self.indices.clone());
            }
        }

        self.done = true;
        None
    }
}

/// Binomial coefficient `C(n, k)`, saturating at `u128::MAX`.
/// Used only for logging how large an enumeration is about to run.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        let factor = (n - k + i) as u128;
        result = match result.checked_mul(factor) {
            Some(v) => v / i as u128,
            None => return u128::MAX,
        };
    }
    result
}
