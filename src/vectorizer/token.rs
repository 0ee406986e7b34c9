use serde::{Deserialize, Serialize};

use crate::config::TokenizerConfig;

/// Tokenizer
/// Splits a document on a single delimiter character.
///
/// The split is literal: no case folding, no punctuation stripping, and
/// consecutive delimiters yield empty-string tokens. A document without any
/// delimiter is a single token. Callers that need normalization do it before
/// tokenizing.
///
/// # Examples
/// ```
/// use term_vectorizer::Tokenizer;
/// let tokens = Tokenizer::default().tokenize("the cat sat");
/// assert_eq!(tokens, vec!["the", "cat", "sat"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn delimiter(&self) -> char {
        self.config.delimiter
    }

    /// tokenize one document, order preserved
    #[inline]
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        document
            .split(self.config.delimiter)
            .map(str::to_owned)
            .collect()
    }
}

/// Corpus
/// Ordered collection of tokenized documents.
///
/// Document order only matters for vocabulary index assignment;
/// similarity never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Vec<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Tokenize every document in order
    pub fn from_documents<S>(documents: &[S], tokenizer: &Tokenizer) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            documents: documents
                .iter()
                .map(|doc| tokenizer.tokenize(doc.as_ref()))
                .collect(),
        }
    }

    /// Newline-delimited text, one document per line.
    /// Lines are split on `'\n'` only, so a `'\r'` before it stays part of
    /// the line's last token. Empty lines are dropped before tokenizing.
    pub fn from_lines(text: &str, tokenizer: &Tokenizer) -> Self {
        Self {
            documents: text
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(|line| tokenizer.tokenize(line))
                .collect(),
        }
    }

    /// already tokenized documents
    pub fn from_tokens(documents: Vec<Vec<String>>) -> Self {
        Self { documents }
    }

    /// append one tokenized document
    pub fn push(&mut self, tokens: Vec<String>) -> &mut Self {
        self.documents.push(tokens);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.documents.get(index).map(Vec::as_slice)
    }

    #[inline]
    pub fn documents(&self) -> &[Vec<String>] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.documents.iter().map(Vec::as_slice)
    }
}
