use serde::Serialize;

pub use crate::error::GeneMatchError;

/// A maximal common run between two sequences.
///
/// `start1` indexes the first sequence, `start2` the second. The run cannot
/// be extended to the right without a mismatch or running off either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Match {
    pub start1: usize,
    pub start2: usize,
    pub length: usize,
}

impl Match {
    pub fn new(start1: usize, start2: usize, length: usize) -> Self {
        Self { start1, start2, length }
    }
}

/// All matches produced by one `find_matches` call.
///
/// Order follows the producing matcher (row-major over `start1`, then
/// `start2`, for every matcher in this crate) but it is not part of the
/// contract: compare results with [`MatchSet::same_matches`].
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    matches: Vec<Match>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self { matches: Vec::new() }
    }

    pub fn from_vec(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// Append a match, surfacing allocation failure instead of aborting.
    pub fn try_push(&mut self, m: Match) -> Result<(), GeneMatchError> {
        self.matches.try_reserve(1)?;
        self.matches.push(m);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    pub fn contains(&self, m: &Match) -> bool {
        self.matches.contains(m)
    }

    /// Matches in row-major order.
    pub fn sorted(&self) -> Vec<Match> {
        let mut matches = self.matches.clone();
        matches.sort_unstable();
        matches
    }

    /// Equality ignoring production order. Every match must occur the same
    /// number of times on both sides.
    pub fn same_matches(&self, other: &MatchSet) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl FromIterator<Match> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self { matches: iter.into_iter().collect() }
    }
}

impl IntoIterator for MatchSet {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
