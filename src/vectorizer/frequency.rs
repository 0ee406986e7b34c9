use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VectorError, VectorOp};
use crate::utils::math::vector::TermVector;
use crate::vectorizer::vocabulary::Vocabulary;

/// Document frequency of every vocabulary token.
/// Entry `i` counts the documents containing token `i` at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFrequencyTable {
    df_vec: TermVector<u32>,
    /// number of documents the table was counted over
    doc_num: usize,
}

impl DocumentFrequencyTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.df_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.df_vec.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        self.df_vec.as_slice()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.df_vec.get(index)
    }

    /// number of documents the table was counted over
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    /// IDF over the same corpus the table was counted on
    pub fn idf(&self) -> Result<IdfTable> {
        inverse_document_frequency(self.as_slice(), self.doc_num)
    }
}

/// Inverse document frequency of every vocabulary token.
/// `idf[i] = ln(doc_num / df[i])`, unsmoothed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    idf_vec: TermVector<f64>,
    doc_num: usize,
}

impl IdfTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.idf_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_vec.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.idf_vec.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.idf_vec.as_slice()
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }
}

/// Count how often each vocabulary token occurs in `document`.
/// Tokens outside the vocabulary are ignored.
pub fn term_frequency<T>(document: &[T], vocabulary: &Vocabulary) -> TermVector<u32>
where
    T: AsRef<str>,
{
    let mut tf = TermVector::zeros(vocabulary.len());
    for token in document {
        if let Some(idx) = vocabulary.index_of(token.as_ref()) {
            tf.increment(idx);
        }
    }
    tf
}

/// Term frequency of every document, computed in parallel, in corpus order
pub fn term_frequencies<D, T>(documents: &[D], vocabulary: &Vocabulary) -> Vec<TermVector<u32>>
where
    D: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    documents
        .par_iter()
        .map(|doc| term_frequency(doc.as_ref(), vocabulary))
        .collect()
}

/// Count, for each vocabulary token, the documents that contain it.
/// A document contributes at most 1 per token no matter how often it repeats.
pub fn document_frequency<D, T>(documents: &[D], vocabulary: &Vocabulary) -> DocumentFrequencyTable
where
    D: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    // distinct indices per document
    let seen: Vec<Vec<usize>> = documents
        .par_iter()
        .map(|doc| {
            let mut indices: Vec<usize> = doc
                .as_ref()
                .iter()
                .filter_map(|t| vocabulary.index_of(t.as_ref()))
                .collect();
            indices.sort_unstable();
            indices.dedup();
            indices
        })
        .collect();

    let mut df_vec = TermVector::zeros(vocabulary.len());
    for indices in &seen {
        for &idx in indices {
            df_vec.increment(idx);
        }
    }
    DocumentFrequencyTable {
        df_vec,
        doc_num: documents.len(),
    }
}

/// IDF from a document frequency table.
///
/// # Errors
/// * `ZeroDocumentFrequency` if any `df[i] == 0`
/// * `DocumentFrequencyExceedsCorpus` if any `df[i] > num_documents`
///
/// Neither can happen for a table counted over the same corpus the vocabulary
/// was built from.
pub fn inverse_document_frequency(df: &[u32], num_documents: usize) -> Result<IdfTable> {
    let n = num_documents as f64;
    let mut idf_vec = Vec::with_capacity(df.len());
    for (index, &d) in df.iter().enumerate() {
        if d == 0 {
            warn!(index, "zero document frequency, idf undefined");
            return Err(VectorError::ZeroDocumentFrequency { index });
        }
        if d as usize > num_documents {
            warn!(index, df = d, num_documents, "document frequency exceeds corpus size");
            return Err(VectorError::DocumentFrequencyExceedsCorpus {
                index,
                df: d,
                num_documents,
            });
        }
        idf_vec.push((n / d as f64).ln());
    }
    Ok(IdfTable {
        idf_vec: TermVector::from(idf_vec),
        doc_num: num_documents,
    })
}

/// Element-wise `tf * idf`
pub fn tf_idf<N>(tf: &TermVector<N>, idf: &IdfTable) -> Result<TermVector<f64>>
where
    N: num::Num + Copy + Into<f64>,
{
    VectorError::check_len(VectorOp::TfIdf, tf.len(), idf.len())?;
    Ok(tf
        .iter()
        .zip(idf.as_slice())
        .map(|(&t, &w)| t.into() * w)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::token::{Corpus, Tokenizer};

    fn setup(docs: &[&str]) -> (Corpus, Vocabulary) {
        let corpus = Corpus::from_documents(docs, &Tokenizer::default());
        let vocab = Vocabulary::from_corpus(&corpus);
        (corpus, vocab)
    }

    #[test]
    fn cat_dog_scenario_tables() {
        let (corpus, vocab) = setup(&["the cat sat", "the dog sat", "the cat ran"]);
        let df = document_frequency(corpus.documents(), &vocab);
        assert_eq!(df.as_slice(), &[3, 2, 2, 1, 1]);
        assert_eq!(df.doc_num(), 3);
        assert_eq!(df.get(0), Some(3));
        assert_eq!(df.get(5), None);

        let idf = df.idf().unwrap();
        assert_eq!(idf.doc_num(), 3);
        assert_eq!(idf.len(), df.len());

        let tf = term_frequency(corpus.get(0).unwrap(), &vocab);
        assert_eq!(tf.as_slice(), &[1, 1, 1, 0, 0]);
    }

    #[test]
    fn term_frequency_counts_repeats_and_ignores_unknown() {
        let (corpus, vocab) = setup(&[
            "My dog is the best dog that ever was a pet dog",
            "Vocabulary is the collection of unique words.",
        ]);
        let dog = vocab.index_of("dog").unwrap();
        let tf = term_frequency(corpus.get(0).unwrap(), &vocab);
        assert_eq!(tf.get(dog), Some(3));

        let unseen = term_frequency(&["cat", "dog"], &vocab);
        assert_eq!(unseen.len(), vocab.len());
        assert_eq!(unseen.nnz(), 1);
        assert!(!vocab.contains("cat"));
    }

    #[test]
    fn document_frequency_counts_each_document_once() {
        let (corpus, vocab) = setup(&["a a a", "a b", "b b"]);
        let df = document_frequency(corpus.documents(), &vocab);
        assert_eq!(df.as_slice(), &[2, 2]);
    }

    #[test]
    fn parallel_term_frequencies_keep_order() {
        let (corpus, vocab) = setup(&["x y", "y y", "z"]);
        let tfs = term_frequencies(corpus.documents(), &vocab);
        let expect: Vec<TermVector<u32>> = corpus.iter().map(|d| term_frequency(d, &vocab)).collect();
        assert_eq!(tfs, expect);
    }

    #[test]
    fn idf_is_unsmoothed_log() {
        let idf = inverse_document_frequency(&[3, 2, 1], 3).unwrap();
        assert_eq!(idf.get(0), Some(0.0));
        assert!((idf.get(1).unwrap() - (1.5f64).ln()).abs() < 1e-12);
        assert!((idf.get(2).unwrap() - (3.0f64).ln()).abs() < 1e-12);
    }

    #[test]
    fn idf_decreases_as_df_grows() {
        let idf = inverse_document_frequency(&[1, 2, 3, 4, 5], 5).unwrap();
        for w in idf.as_slice().windows(2) {
            assert!(w[0] > w[1]);
        }
    }

    #[test]
    fn idf_rejects_zero_df() {
        let err = inverse_document_frequency(&[2, 0, 1], 2).unwrap_err();
        assert_eq!(err, VectorError::ZeroDocumentFrequency { index: 1 });
    }

    #[test]
    fn idf_rejects_df_above_corpus_size() {
        let err = inverse_document_frequency(&[4], 3).unwrap_err();
        assert_eq!(
            err,
            VectorError::DocumentFrequencyExceedsCorpus { index: 0, df: 4, num_documents: 3 }
        );
    }

    #[test]
    fn tf_idf_weights_rare_terms() {
        let (corpus, vocab) = setup(&["the cat sat", "the dog sat", "the cat ran"]);
        let idf = document_frequency(corpus.documents(), &vocab).idf().unwrap();
        let tf = term_frequency(corpus.get(2).unwrap(), &vocab);
        let w = tf_idf(&tf, &idf).unwrap();
        // "the" is everywhere, "ran" only here
        assert_eq!(w.get(0), Some(0.0));
        assert!((w.get(4).unwrap() - (3.0f64).ln()).abs() < 1e-12);
        assert_eq!(w.get(3), Some(0.0));
    }

    #[test]
    fn tf_idf_rejects_length_mismatch() {
        let idf = inverse_document_frequency(&[1, 1], 2).unwrap();
        let tf = TermVector::from(vec![1u32, 2, 3]);
        assert_eq!(
            tf_idf(&tf, &idf).unwrap_err(),
            VectorError::LengthMismatch { op: VectorOp::TfIdf, left: 3, right: 2 }
        );
    }
}
