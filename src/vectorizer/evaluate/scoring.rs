use std::{cmp::Ordering, fmt};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SimilarityConfig;
use crate::error::{Result, VectorError};
use crate::vectorizer::evaluate::similarity::{classify_with, cosine_similarity, Classification};

/// One ranked candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    /// position of the candidate in the ranked input
    pub index: usize,
    /// cosine score in [-1, 1]
    pub score: f64,
}

impl HitEntry {
    #[inline]
    pub fn classify(&self, config: &SimilarityConfig) -> Classification {
        classify_with(self.score, config)
    }
}

/// Descending score, ties by ascending candidate index.
/// NaN (only reachable from NaN inputs) sorts after every number.
fn cmp_hits(a: &HitEntry, b: &HitEntry) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then_with(|| a.index.cmp(&b.index))
}

/// Structure to store ranking results
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort by descending score, ties broken by ascending index
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(cmp_hits);
        self
    }

    /// Keep the first `min(k, len)` entries
    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn get(&self, rank: usize) -> Option<&HitEntry> {
        self.list.get(rank)
    }

    /// best entry
    #[inline]
    pub fn first(&self) -> Option<&HitEntry> {
        self.list.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }

    /// candidate indices in rank order
    pub fn indices(&self) -> Vec<usize> {
        self.list.iter().map(|h| h.index).collect()
    }
}

impl IntoIterator for Hits {
    type Item = HitEntry;
    type IntoIter = std::vec::IntoIter<HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl fmt::Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6}", hit.index, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl fmt::Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{}) score={:.4} | #{}", rank + 1, hit.score, hit.index)?;
        }
        Ok(())
    }
}

/// Rank every candidate against `query` by cosine similarity.
///
/// Scores are computed on the rayon pool. The output is sorted by descending
/// score with ties in ascending candidate index, so it is reproducible.
///
/// # Errors
/// `CandidateLengthMismatch` for the first candidate whose length differs from
/// the query's. Nothing is ranked in that case.
pub fn rank<N, C>(query: &[N], candidates: &[C]) -> Result<Hits>
where
    N: Copy + Into<f64> + Sync,
    C: AsRef<[N]> + Sync,
{
    trace!(candidates = candidates.len(), dim = query.len(), "ranking candidates");
    for (candidate, c) in candidates.iter().enumerate() {
        let found = c.as_ref().len();
        if found != query.len() {
            return Err(VectorError::CandidateLengthMismatch {
                candidate,
                expected: query.len(),
                found,
            });
        }
    }

    let list = candidates
        .par_iter()
        .enumerate()
        .map(|(index, c)| cosine_similarity(query, c.as_ref()).map(|score| HitEntry { index, score }))
        .collect::<Result<Vec<HitEntry>>>()?;

    let mut hits = Hits::new(list);
    hits.sort_by_score_desc();
    Ok(hits)
}

/// First `min(k, len)` entries of an already ranked list
pub fn top_k(ranked: &Hits, k: usize) -> Hits {
    Hits::new(ranked.list.iter().take(k).copied().collect())
}
