use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::{VectorError, VectorOp};
use crate::utils::math::vector::math::dot_and_norms;
use crate::vectorizer::evaluate::scoring::{rank, HitEntry, Hits};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("point {id}: vector has {found} dimensions, collection expects {expected}")]
    DimensionMismatch { id: u64, expected: usize, found: usize },

    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Distance metric a collection is searched by. Higher score is closer for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Distance {
    #[default]
    Cosine,
    Dot,
}

/// Vector with its id and payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<P> {
    pub id: u64,
    pub vector: Vec<f32>,
    pub payload: P,
}

/// Search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint<P> {
    pub id: u64,
    pub score: f64,
    pub payload: P,
}

/// Stores vectors with payloads and returns the nearest ones to a query.
pub trait VectorStore {
    type Payload;

    /// Insert points, replacing any stored point with the same id
    fn upsert(&mut self, points: Vec<Point<Self::Payload>>) -> Result<(), StoreError>;

    /// At most `limit` points, closest first
    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredPoint<Self::Payload>>, StoreError>;
}

/// Exact, in-process VectorStore.
///
/// Searching scores every stored point, so it suits corpora that fit in memory
/// and need no persistent index. Points keep their first insertion position;
/// equal scores come back in that order.
#[derive(Debug, Clone)]
pub struct InMemoryVectorStore<P> {
    dim: usize,
    distance: Distance,
    points: IndexMap<u64, (Vec<f32>, P)>,
}

impl<P> InMemoryVectorStore<P> {
    /// empty collection of `dim`-dimensional vectors
    pub fn new(dim: usize, distance: Distance) -> Self {
        Self {
            dim,
            distance,
            points: IndexMap::new(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// stored vector and payload of `id`
    pub fn get(&self, id: u64) -> Option<(&[f32], &P)> {
        self.points.get(&id).map(|(v, p)| (v.as_slice(), p))
    }

    fn score(&self, query: &[f32]) -> Result<Hits, StoreError> {
        let vectors: Vec<&[f32]> = self.points.values().map(|(v, _)| v.as_slice()).collect();
        match self.distance {
            Distance::Cosine => Ok(rank(query, &vectors)?),
            Distance::Dot => {
                let list = vectors
                    .iter()
                    .enumerate()
                    .map(|(index, &v)| {
                        dot_and_norms(query, v, VectorOp::Dot).map(|(score, _, _)| HitEntry { index, score })
                    })
                    .collect::<Result<Vec<_>, VectorError>>()?;
                let mut hits = Hits::new(list);
                hits.sort_by_score_desc();
                Ok(hits)
            }
        }
    }
}

impl<P> VectorStore for InMemoryVectorStore<P>
where
    P: Clone,
{
    type Payload = P;

    fn upsert(&mut self, points: Vec<Point<P>>) -> Result<(), StoreError> {
        // all or nothing
        if let Some(bad) = points.iter().find(|p| p.vector.len() != self.dim) {
            return Err(StoreError::DimensionMismatch {
                id: bad.id,
                expected: self.dim,
                found: bad.vector.len(),
            });
        }
        let n = points.len();
        for point in points {
            self.points.insert(point.id, (point.vector, point.payload));
        }
        debug!(upserted = n, total = self.points.len(), "points upserted");
        Ok(())
    }

    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredPoint<P>>, StoreError> {
        if query.len() != self.dim {
            return Err(StoreError::Vector(VectorError::LengthMismatch {
                op: match self.distance {
                    Distance::Cosine => VectorOp::Cosine,
                    Distance::Dot => VectorOp::Dot,
                },
                left: query.len(),
                right: self.dim,
            }));
        }
        let mut hits = self.score(query)?;
        hits.truncate(limit);
        Ok(hits
            .iter()
            .filter_map(|hit| {
                self.points.get_index(hit.index).map(|(&id, (_, payload))| ScoredPoint {
                    id,
                    score: hit.score,
                    payload: payload.clone(),
                })
            })
            .collect())
    }
}
