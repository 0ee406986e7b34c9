use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vectorizer::token::Corpus;

/// Vocabulary
/// Maps every distinct token of a corpus to a stable index.
///
/// Indices are assigned in strict first-seen order, scanning the corpus
/// document by document and each document token by token, starting at 0.
/// Building twice from the same corpus gives the same mapping, so vectors
/// from independent builds stay comparable.
///
/// The vocabulary is immutable once built. Counting or encoding tokens that are
/// not in it never grows it.
///
/// # Serialization
/// Serialized as the ordered token sequence, so indices survive a round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl PartialEq for Vocabulary {
    /// Same tokens at the same indices.
    /// `IndexSet` equality alone ignores order.
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len() && self.terms.iter().eq(other.terms.iter())
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Build from tokenized documents, sequentially
    pub fn build<D, T>(documents: &[D]) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        for doc in documents {
            for token in doc.as_ref() {
                let token = token.as_ref();
                if !terms.contains(token) {
                    terms.insert(Box::from(token));
                }
            }
        }
        debug!(documents = documents.len(), terms = terms.len(), "vocabulary built");
        Self { terms }
    }

    /// Build from tokenized documents, scanning documents in parallel.
    ///
    /// Each document is reduced to its distinct tokens in first-seen order on
    /// the rayon pool. Index assignment then happens in one sequential merge in
    /// corpus order, so the result is identical to [`Vocabulary::build`].
    pub fn build_par<D, T>(documents: &[D]) -> Self
    where
        D: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        let firsts: Vec<IndexSet<&str>> = documents
            .par_iter()
            .map(|doc| doc.as_ref().iter().map(|t| t.as_ref()).collect())
            .collect();

        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        for doc in firsts {
            for token in doc {
                if !terms.contains(token) {
                    terms.insert(Box::from(token));
                }
            }
        }
        debug!(documents = documents.len(), terms = terms.len(), "vocabulary built (parallel scan)");
        Self { terms }
    }

    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::build(corpus.documents())
    }

    /// index of `token`, `None` when out of vocabulary
    #[inline]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.terms.get_index_of(token)
    }

    /// token at `index`
    #[inline]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    /// number of distinct tokens, also the length of every vector over this vocabulary
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// tokens in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}
