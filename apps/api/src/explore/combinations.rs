//! Combination generator: every non-empty subset of the interest list.
//!
//! Order contract: length ascending, then lexicographic over input indices
//! (the standard "choose r of n" order). Pagination relies on this being stable.
//!
//! The space is 2^N - 1. `Config::max_interests` bounds N before anything here runs.

use serde::Serialize;

/// Number of non-empty subsets of an `n`-element set. Saturates past 63.
pub fn combination_count(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Lazily yields combinations of `items` in contract order without materializing them.
pub struct CombinationIter<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    remaining: u64,
}

impl<'a, T> CombinationIter<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            indices: if items.is_empty() { vec![] } else { vec![0] },
            remaining: combination_count(items.len()),
        }
    }

    /// Moves `indices` to the next combination; grows `r` when the current size is exhausted.
    fn advance(&mut self) {
        let n = self.items.len();
        let r = self.indices.len();

        if let Some(pos) = (0..r).rev().find(|&i| self.indices[i] < n - r + i) {
            self.indices[pos] += 1;
            for i in pos + 1..r {
                self.indices[i] = self.indices[i - 1] + 1;
            }
        } else if r < n {
            self.indices = (0..=r).collect();
        } else {
            self.indices.clear();
        }
    }
}

impl<'a, T> Iterator for CombinationIter<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.indices.is_empty() {
            return None;
        }
        let current = self.indices.iter().map(|&i| &self.items[i]).collect();
        self.remaining = self.remaining.saturating_sub(1);
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for CombinationIter<'_, T> {}

/// Materializes every combination of `interests`, in contract order.
pub fn combinations(interests: &[String]) -> Vec<Vec<String>> {
    CombinationIter::new(interests)
        .map(|combo| combo.into_iter().cloned().collect())
        .collect()
}

/// One page of the combination listing.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationPage {
    /// Size of the (possibly filtered) combination space, not of this page.
    pub total: u64,
    pub offset: usize,
    pub combinations: Vec<Vec<String>>,
}

/// Pages through the combination space, optionally keeping only combinations
/// that include `containing`.
pub fn combination_page(
    interests: &[String],
    offset: usize,
    limit: usize,
    containing: Option<&str>,
) -> CombinationPage {
    let n = interests.len();
    let (total, combinations) = match containing {
        None => (
            combination_count(n),
            CombinationIter::new(interests)
                .skip(offset)
                .take(limit)
                .map(|combo| combo.into_iter().cloned().collect())
                .collect(),
        ),
        Some(needle) if interests.iter().any(|i| i == needle) => (
            // Half of all subsets contain a given member.
            if n >= 64 { u64::MAX } else { 1u64 << (n - 1) },
            CombinationIter::new(interests)
                .filter(|combo| combo.iter().any(|i| i.as_str() == needle))
                .skip(offset)
                .take(limit)
                .map(|combo| combo.into_iter().cloned().collect())
                .collect(),
        ),
        Some(_) => (0, Vec::new()),
    };

    CombinationPage {
        total,
        offset,
        combinations,
    }
}

/// Renders a combination the way listings show it: `a + b + c`.
pub fn format_combination(combo: &[String]) -> String {
    combo.join(" + ")
}
