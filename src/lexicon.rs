//! Word-list loading and stoplist/startlist membership.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::config::EngineConfig;
use crate::error::{CrocusError, Result};

/// Load a newline-delimited word-list file into an ordered set.
///
/// One line is one token; blank lines are skipped. Membership tests
/// against the loaded set are exact and case-sensitive. An unreadable
/// file is an error, never silently ignored: an engine filtering
/// against a stoplist that failed to load would quietly produce wrong
/// results.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CrocusError::word_list(path, e))?;
    let mut words = BTreeSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| CrocusError::word_list(path, e))?;
        if !line.is_empty() {
            words.insert(line);
        }
    }
    Ok(words)
}

/// The stoplist/startlist gate deciding per-token inclusion.
///
/// The stoplist is a deny-list that denies nothing when absent. The
/// startlist is an allow-list that allows everything when absent. The
/// asymmetry is deliberate: both defaults mean "no list, no filtering".
#[derive(Debug, Default)]
pub struct Lexicon {
    stopwords: Option<BTreeSet<String>>,
    startwords: Option<BTreeSet<String>>,
}

impl Lexicon {
    /// Load the word lists named by `config`, if any.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let stopwords = match &config.stoplist_file {
            Some(path) => {
                info!("using stopword file: {path}");
                Some(load_word_list(path)?)
            }
            None => None,
        };
        let startwords = match &config.startlist_file {
            Some(path) => {
                let words = load_word_list(path)?;
                info!(
                    "loaded startword file '{path}': only these {} words will be indexed",
                    words.len()
                );
                Some(words)
            }
            None => None,
        };
        Ok(Lexicon {
            stopwords,
            startwords,
        })
    }

    /// True iff a stoplist is loaded and contains `token`.
    pub fn stoplist_contains(&self, token: &str) -> bool {
        self.stopwords.as_ref().is_some_and(|s| s.contains(token))
    }

    /// False iff a startlist is loaded and does not contain `token`.
    pub fn startlist_contains(&self, token: &str) -> bool {
        self.startwords.as_ref().is_none_or(|s| s.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::EngineConfig;

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_word_list_skips_blank_lines() {
        let file = word_file("the\nand\n\nof\n\n");
        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("of"));
    }

    #[test]
    fn test_load_word_list_missing_file_is_an_error() {
        let err = load_word_list("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, CrocusError::WordList { .. }));
    }

    #[test]
    fn test_no_lists_means_no_filtering() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.stoplist_contains("the"));
        assert!(lexicon.startlist_contains("anything"));
    }

    #[test]
    fn test_stoplist_membership_is_case_sensitive() {
        let file = word_file("the\n");
        let config = EngineConfig::builder()
            .index_path("/tmp/index")
            .stoplist_file(file.path().display().to_string())
            .build();
        let lexicon = Lexicon::from_config(&config).unwrap();
        assert!(lexicon.stoplist_contains("the"));
        assert!(!lexicon.stoplist_contains("THE"));
    }

    #[test]
    fn test_startlist_restricts_to_listed_tokens() {
        let file = word_file("alpha\nbeta\n");
        let config = EngineConfig::builder()
            .index_path("/tmp/index")
            .startlist_file(file.path().display().to_string())
            .build();
        let lexicon = Lexicon::from_config(&config).unwrap();
        assert!(lexicon.startlist_contains("alpha"));
        assert!(!lexicon.startlist_contains("gamma"));
    }
}
