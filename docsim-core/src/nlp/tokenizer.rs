//! Word Tokenizer
//!
//! Splits text on Unicode word boundaries (UAX #29), then breaks each word
//! further at any non-alphanumeric character so that `can't` and `3.14`
//! become `can`/`t` and `3`/`14`. Combining marks stay with their base
//! letter and every token is composed to NFC, so decomposed and precomposed
//! spellings (`cafe\u{301}`, `café`) yield the same token. Every token is
//! lower-cased.
//!
//! Malformed input is never an error for in-memory text: whatever the
//! segmenter classifies as a word is a word.

use std::io::Read;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{DocsimError, Result};

/// Lazy, restartable token sequence over a borrowed text.
///
/// Nothing is allocated until [`Tokens::iter`] is driven, and every call to
/// `iter` starts again from the beginning of the text.
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    text: &'a str,
}

impl<'a> Tokens<'a> {
    /// Iterate the normalized tokens from the start of the text.
    pub fn iter(&self) -> impl Iterator<Item = String> + 'a {
        let text = self.text;
        text.unicode_words()
            .flat_map(|word| word.split(|c: char| !(c.is_alphanumeric() || is_combining_mark(c))))
            .filter(|part| part.chars().any(char::is_alphanumeric))
            .map(|part| part.nfc().collect::<String>().to_lowercase())
    }

    /// Collect the tokens in document order.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// True when the text contains no word characters at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.text
    }
}

/// Tokenize a string.
///
/// # Example
/// ```
/// use docsim_core::nlp::tokenizer::tokenize;
///
/// let tokens = tokenize("The quick, brown FOX!").to_vec();
/// assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
/// ```
#[inline]
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text }
}

/// Tokenize everything a reader yields.
///
/// The reader is drained completely before any token is produced. A read
/// failure or invalid UTF-8 discards the whole input and returns
/// [`DocsimError::Tokenization`].
pub fn tokenize_reader<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| DocsimError::Tokenization(e.to_string()))?;
    Ok(tokenize(&text).to_vec())
}
