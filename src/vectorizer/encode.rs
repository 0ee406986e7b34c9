use crate::error::Result;
use crate::utils::math::vector::TermVector;
use crate::vectorizer::frequency::term_frequency;
use crate::vectorizer::vocabulary::Vocabulary;

/// One-hot vector of `token`.
/// A token outside the vocabulary encodes to the all-zero vector.
pub fn one_hot(token: &str, vocabulary: &Vocabulary) -> TermVector<u32> {
    let mut vec = TermVector::zeros(vocabulary.len());
    if let Some(idx) = vocabulary.index_of(token) {
        vec.increment(idx);
    }
    vec
}

/// One one-hot vector per token, in token order
pub fn one_hot_sequence<T>(document: &[T], vocabulary: &Vocabulary) -> Vec<TermVector<u32>>
where
    T: AsRef<str>,
{
    document
        .iter()
        .map(|token| one_hot(token.as_ref(), vocabulary))
        .collect()
}

/// Bag-of-words count vector of a tokenized document.
///
/// Same counts as [`term_frequency`], and equal to the sum of [`one_hot`]
/// over the document's tokens.
#[inline]
pub fn bag_of_words<T>(document: &[T], vocabulary: &Vocabulary) -> TermVector<u32>
where
    T: AsRef<str>,
{
    term_frequency(document, vocabulary)
}

/// Sum a sequence of one-hot vectors into a count vector of length `len`.
///
/// # Errors
/// `LengthMismatch` if any vector's length differs from `len`.
pub fn bag_of_words_from_one_hots(one_hots: &[TermVector<u32>], len: usize) -> Result<TermVector<u32>> {
    one_hots
        .iter()
        .try_fold(TermVector::zeros(len), |acc, v| acc.add(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{VectorError, VectorOp};
    use crate::vectorizer::frequency::term_frequency;
    use crate::vectorizer::token::{Corpus, Tokenizer};

    fn corpus() -> Corpus {
        Corpus::from_documents(
            &[
                "Tokenization is the process of breaking text into words.",
                "Vocabulary is the collection of unique words.",
                "The process of tokenizing is essential in NLP.",
            ],
            &Tokenizer::default(),
        )
    }

    #[test]
    fn one_hot_has_single_one() {
        let vocab = Vocabulary::from_corpus(&corpus());
        let v = one_hot("process", &vocab);
        assert_eq!(v.len(), vocab.len());
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(vocab.index_of("process").unwrap()), Some(1));
    }

    #[test]
    fn one_hot_out_of_vocabulary_is_zero() {
        let vocab = Vocabulary::from_corpus(&corpus());
        // case is preserved, "the" and "The" are different tokens
        assert!(vocab.contains("The"));
        let v = one_hot("THE", &vocab);
        assert_eq!(v.len(), vocab.len());
        assert!(v.is_zero());
    }

    #[test]
    fn bag_of_words_equals_tf_and_sum_of_one_hots() {
        let corpus = corpus();
        let vocab = Vocabulary::from_corpus(&corpus);
        for doc in corpus.iter() {
            let bow = bag_of_words(doc, &vocab);
            let tf = term_frequency(doc, &vocab);
            let summed = bag_of_words_from_one_hots(&one_hot_sequence(doc, &vocab), vocab.len()).unwrap();
            assert_eq!(bow, tf);
            assert_eq!(bow, summed);
        }
    }

    #[test]
    fn one_hot_sequence_keeps_token_order() {
        let vocab = Vocabulary::build(&[vec!["a", "b"]]);
        let seq = one_hot_sequence(&["b", "a", "b"], &vocab);
        let as_idx: Vec<usize> = seq.iter().map(|v| v.raw_iter().next().unwrap().0).collect();
        assert_eq!(as_idx, vec![1, 0, 1]);
    }

    #[test]
    fn summing_one_hots_of_wrong_length_fails() {
        let one_hots = vec![TermVector::from(vec![1u32, 0])];
        assert_eq!(
            bag_of_words_from_one_hots(&one_hots, 3).unwrap_err(),
            VectorError::LengthMismatch { op: VectorOp::Add, left: 3, right: 2 }
        );
    }

    #[test]
    fn empty_sequence_sums_to_zero_vector() {
        let bow = bag_of_words_from_one_hots(&[], 4).unwrap();
        assert_eq!(bow, TermVector::zeros(4));
    }
}
