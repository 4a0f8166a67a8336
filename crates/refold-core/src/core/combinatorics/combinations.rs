use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CombinationError {
    #[error("subset size {k} exceeds universe size {universe}")]
    OutOfRange { k: usize, universe: usize },
}

/// Cyclic enumerator of all k-sized subsets of an ordered universe.
///
/// Subsets are produced in lexicographic order over universe positions. This is an
/// infinite, restartable sequence, not a terminating iterator: after the last
/// subset of a period, enumeration silently restarts at the first. The boolean
/// returned by [`next`](Self::next) signals "one full period elapsed", never
/// "no more work" — the search driver depends on the wraparound to keep varying
/// free positions indefinitely.
#[derive(Debug, Clone)]
pub struct CombinationEnumerator<T> {
    universe: Vec<T>,
    k: usize,
    cursor: Vec<usize>,
}

impl<T: Clone> CombinationEnumerator<T> {
    /// Enumerator over an explicit ordered universe.
    pub fn over(universe: Vec<T>, k: usize) -> Result<Self, CombinationError> {
        if k > universe.len() {
            return Err(CombinationError::OutOfRange {
                k,
                universe: universe.len(),
            });
        }
        Ok(Self {
            universe,
            k,
            cursor: (0..k).collect(),
        })
    }

    /// Resets to the first combination: the first k universe elements.
    pub fn begin(&mut self) {
        self.cursor = (0..self.k).collect();
    }

    /// Returns the current combination, then advances.
    ///
    /// The flag is `false` exactly when the returned combination is the last of a
    /// period; the enumerator has then already restarted at the first combination.
    pub fn next(&mut self) -> (Vec<T>, bool) {
        let combination = self
            .cursor
            .iter()
            .map(|&i| self.universe[i].clone())
            .collect();
        let more = self.advance();
        if !more {
            self.begin();
        }
        (combination, more)
    }

    /// Changes the subset size, discarding any in-progress position.
    pub fn update(&mut self, k: usize) -> Result<(), CombinationError> {
        if k > self.universe.len() {
            return Err(CombinationError::OutOfRange {
                k,
                universe: self.universe.len(),
            });
        }
        self.k = k;
        self.begin();
        Ok(())
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    // Lexicographic successor: bump the rightmost cursor entry that still has
    // room, then close up every entry to its right.
    fn advance(&mut self) -> bool {
        let n = self.universe.len();
        let k = self.k;
        let Some(pivot) = (0..k).rev().find(|&i| self.cursor[i] < n - k + i) else {
            return false;
        };
        self.cursor[pivot] += 1;
        for i in pivot + 1..k {
            self.cursor[i] = self.cursor[i - 1] + 1;
        }
        true
    }
}

impl CombinationEnumerator<usize> {
    /// Enumerator over the synthesized universe `[0, n)`.
    pub fn from_range(n: usize, k: usize) -> Result<Self, CombinationError> {
        Self::over((0..n).collect(), k)
    }
}
