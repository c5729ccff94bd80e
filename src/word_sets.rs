use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use super::config::load_yaml;
use super::error::{Error, Result};
use super::mixer::deduplicate_words;
use super::types::WordSource;

#[derive(Debug, Deserialize)]
struct WordSourceEntry {
    ratio: f64,
    #[serde(default)]
    words: Vec<String>,
}

/// Named word sources as authored in YAML:
///
/// ```yaml
/// common:
///   ratio: 0.7
///   words: [the, of, and]
/// programming:
///   ratio: 0.3
///   words: [async, borrow, trait]
/// ```
///
/// Order is preserved, ratios are validated to lie in `[0, 1]` and each pool
/// is deduplicated case-insensitively.
#[derive(Debug, Clone)]
pub struct WordSourceSet {
    sources: IndexMap<String, WordSource>,
}

impl WordSourceSet {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let raw: IndexMap<String, WordSourceEntry> = serde_yaml::from_str(s)?;
        Self::from_entries(raw)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let set = Self::from_entries(load_yaml(path)?)?;
        tracing::info!(path = %path.display(), sources = set.len(), "loaded word sources");
        Ok(set)
    }

    fn from_entries(raw: IndexMap<String, WordSourceEntry>) -> Result<Self> {
        let mut sources = IndexMap::with_capacity(raw.len());
        for (name, entry) in raw {
            if !entry.ratio.is_finite() || !(0.0..=1.0).contains(&entry.ratio) {
                return Err(Error::InvalidRatio {
                    source_name: name,
                    ratio: entry.ratio,
                });
            }
            let words = deduplicate_words(entry.words.as_slice());
            if words.is_empty() {
                tracing::warn!(source = %name, "word source has no words");
            }
            sources.insert(
                name,
                WordSource {
                    words,
                    ratio: entry.ratio,
                },
            );
        }
        Ok(Self { sources })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&WordSource> {
        self.sources.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Sources in authored order, ready for [`crate::mix`].
    pub fn sources(&self) -> Vec<WordSource> {
        self.sources.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_dedups() {
        let set = WordSourceSet::from_yaml_str(
            "zeta:\n  ratio: 0.2\n  words: [Go, go, Rust]\nalpha:\n  ratio: 0.8\n  words: [the]\n",
        )
        .unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(set.get("zeta").unwrap().words, vec!["Go", "Rust"]);
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        let err = WordSourceSet::from_yaml_str("bad:\n  ratio: 1.5\n  words: [a]\n").unwrap_err();
        match err {
            Error::InvalidRatio { source_name, ratio } => {
                assert_eq!(source_name, "bad");
                assert_eq!(ratio, 1.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(WordSourceSet::from_yaml_str("neg:\n  ratio: -0.1\n").is_err());
    }

    #[test]
    fn words_default_to_empty() {
        let set = WordSourceSet::from_yaml_str("empty:\n  ratio: 0.5\n").unwrap();
        assert!(set.get("empty").unwrap().words.is_empty());
    }
}
