//! Synonym Table and Token Expansion
//!
//! Synonyms let two documents match on words that share no characters at
//! all ("big" and "huge"), which the fuzzy scorer can never detect.
//!
//! # Source format
//! One equivalence group per line, comma separated, whitespace around the
//! commas ignored, case-insensitive:
//!
//! ```text
//! big, large, huge
//! fast,quick,rapid
//! ```
//!
//! Every word maps to all *other* words of its equivalence class. Lines
//! that share a word are merged into one class, so `a,b` and `b,c` make
//! `a`, `b` and `c` mutual synonyms whatever the line order.
//!
//! # Lifetime
//! Built once, then read-only. There is no mutation API after loading, so a
//! table can be shared across threads behind a plain `&` or `Arc`.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{DocsimError, Result};

// ============================================================================
// Synonym Table
// ============================================================================

/// Immutable word → synonyms lookup.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    /// Lower-cased word -> lower-cased synonyms (never contains the word itself)
    map: HashMap<String, BTreeSet<String>>,
}

impl SynonymTable {
    /// Create an empty table. Expansion becomes the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from in-memory lines.
    ///
    /// # Example
    /// ```
    /// use docsim_core::nlp::synonym::SynonymTable;
    ///
    /// let table = SynonymTable::from_lines(["a,b", "b,c"]);
    /// let b: Vec<&str> = table.synonyms("B").unwrap().iter().map(String::as_str).collect();
    /// assert_eq!(b, vec!["a", "c"]);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for line in lines {
            table.add_group(&parse_group(line.as_ref()));
        }
        table
    }

    /// Build a table from a line-oriented reader.
    ///
    /// Fails on the first read error (including invalid UTF-8); nothing read
    /// so far is kept.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut table = Self::new();
        for line in reader.lines() {
            table.add_group(&parse_group(&line?));
        }
        Ok(table)
    }

    /// Load a synonym file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let to_config_error = |source| DocsimError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_config_error)?;
        let table = Self::from_reader(BufReader::new(file)).map_err(to_config_error)?;

        info!(
            path = %path.display(),
            words = table.len(),
            "Loaded synonym table"
        );
        Ok(table)
    }

    /// Load a synonym file, degrading to an empty table if it cannot be read.
    ///
    /// The failure is logged and otherwise swallowed: similarity still
    /// works, just without synonym augmentation.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Synonym table unavailable - continuing without synonyms");
                Self::new()
            }
        }
    }

    /// Merge one equivalence group into the table.
    ///
    /// Every stored set is its word's whole class minus the word, so the
    /// class of a known word is recovered from its set plus itself.
    fn add_group(&mut self, words: &[String]) {
        // A lone word has no partners
        if words.len() < 2 {
            return;
        }
        let mut class: BTreeSet<String> = words.iter().cloned().collect();
        for word in words {
            if let Some(known) = self.map.get(word) {
                class.extend(known.iter().cloned());
            }
        }
        for word in &class {
            let others = class.iter().filter(|other| *other != word).cloned().collect();
            self.map.insert(word.clone(), others);
        }
    }

    /// Synonyms of `word`, looked up case-insensitively.
    pub fn synonyms(&self, word: &str) -> Option<&BTreeSet<String>> {
        match self.map.get(word) {
            Some(found) => Some(found),
            None => self.map.get(&word.to_lowercase()),
        }
    }

    /// Number of words that have at least one synonym.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Expand a token sequence with synonyms.
    ///
    /// Each input token is emitted, immediately followed by its synonyms in
    /// sorted order. Duplicates are kept on purpose: they raise the term
    /// frequency of words the document reinforces.
    ///
    /// # Example
    /// ```
    /// use docsim_core::nlp::synonym::SynonymTable;
    ///
    /// let table = SynonymTable::from_lines(["big, large, huge"]);
    /// let expanded = table.expand(["a", "big", "house"]);
    /// assert_eq!(expanded, vec!["a", "big", "huge", "large", "house"]);
    /// ```
    pub fn expand<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            expanded.push(token.to_string());
            if let Some(synonyms) = self.synonyms(token) {
                expanded.extend(synonyms.iter().cloned());
            }
        }
        debug!(output_len = expanded.len(), "Expanded tokens with synonyms");
        expanded
    }
}

/// Split one configuration line into its distinct lower-cased words.
///
/// Blank lines and empty fields (`"a,,b"`) contribute nothing.
pub fn parse_group(line: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for field in line.split(',') {
        let word = field.trim().to_lowercase();
        if !word.is_empty() && !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sorted(table: &SynonymTable, word: &str) -> Vec<String> {
        table
            .synonyms(word)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_group_is_symmetric() {
        let table = SynonymTable::from_lines(["big, large, huge"]);
        assert_eq!(sorted(&table, "big"), vec!["huge", "large"]);
        assert_eq!(sorted(&table, "large"), vec!["big", "huge"]);
        assert_eq!(sorted(&table, "huge"), vec!["big", "large"]);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let forward = SynonymTable::from_lines(["a,b", "b,c"]);
        let backward = SynonymTable::from_lines(["b,c", "a,b"]);

        for table in [&forward, &backward] {
            assert_eq!(sorted(table, "a"), vec!["b", "c"]);
            assert_eq!(sorted(table, "b"), vec!["a", "c"]);
            assert_eq!(sorted(table, "c"), vec!["a", "b"]);
        }
    }

    #[test]
    fn test_word_is_never_its_own_synonym() {
        let table = SynonymTable::from_lines(["Car, car, auto", "solo", "echo, ECHO"]);
        assert_eq!(sorted(&table, "car"), vec!["auto"]);
        assert!(table.synonyms("solo").is_none());
        assert!(table.synonyms("echo").is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_blank_lines_and_padding() {
        let table = SynonymTable::from_lines(["", "   ", "  Fast ,QUICK,  ,rapid  "]);
        assert_eq!(sorted(&table, "fast"), vec!["quick", "rapid"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let table = SynonymTable::from_lines(["big,huge"]);
        assert_eq!(sorted(&table, "BIG"), vec!["huge"]);
    }

    #[test]
    fn test_expand_preserves_order() {
        let table = SynonymTable::from_lines(["big,large,huge", "house,home"]);
        let expanded = table.expand(["a", "huge", "house"]);
        assert_eq!(expanded, vec!["a", "huge", "big", "large", "house", "home"]);
    }

    #[test]
    fn test_expand_empty_table_is_identity() {
        let table = SynonymTable::new();
        assert!(table.is_empty());
        assert_eq!(table.expand(["x", "y", "x"]), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "big,large,huge").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "large , grand").unwrap();

        let table = SynonymTable::load(file.path()).unwrap();
        assert_eq!(sorted(&table, "large"), vec!["big", "grand", "huge"]);
        assert_eq!(sorted(&table, "grand"), vec!["big", "huge", "large"]);
        assert_eq!(sorted(&table, "big"), vec!["grand", "huge", "large"]);
    }

    #[test]
    fn test_bridging_line_joins_classes() {
        let table = SynonymTable::from_lines(["a,b", "c,d", "b,c"]);
        assert_eq!(sorted(&table, "a"), vec!["b", "c", "d"]);
        assert_eq!(sorted(&table, "d"), vec!["a", "b", "c"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = SynonymTable::load(&missing).unwrap_err();
        assert!(matches!(err, DocsimError::ConfigLoad { .. }));
        assert!(err.is_recoverable());

        let table = SynonymTable::load_or_empty(&missing);
        assert!(table.is_empty());
    }
}
