#[cfg(test)]
#[path = "../../tests/unit/utils/permutations_test.rs"]
mod permutations_test;

/// Returns an iterator over all permutations of indices in `0..size` in lexicographic order,
/// starting from the identity permutation. For `size == 0` a single empty permutation is produced.
pub fn get_permutations(size: usize) -> Permutations {
    Permutations { idxs: (0..size).collect(), is_started: false }
}

/// An iterator over index permutations, see `get_permutations`.
pub struct Permutations {
    idxs: Vec<usize>,
    is_started: bool,
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_started {
            self.is_started = true;
            return Some(self.idxs.clone());
        }

        // find the longest non-increasing suffix, its left neighbour is a pivot
        let size = self.idxs.len();
        let mut i = size.saturating_sub(1);
        while i > 0 && self.idxs[i - 1] >= self.idxs[i] {
            i -= 1;
        }

        if i == 0 {
            return None;
        }

        let pivot = i - 1;
        let mut j = size - 1;
        while self.idxs[j] <= self.idxs[pivot] {
            j -= 1;
        }

        self.idxs.swap(pivot, j);
        self.idxs[i..].reverse();

        Some(self.idxs.clone())
    }
}
