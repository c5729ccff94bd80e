use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Viewport widths separating the small / medium / large buckets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths strictly below this are small.
    pub small_max: u32,
    /// Widths at or above this are large.
    pub large_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small_max: 768,
            large_min: 1024,
        }
    }
}

/// Classifier tuning, normally left at its defaults.
///
/// Token fields are regex patterns matched case-insensitively anywhere in the
/// signal. Plain alternations of literals are the fast path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub breakpoints: Breakpoints,
    pub mobile_user_agents: String,
    pub tablet_user_agents: String,
    /// Desktop OS families that touch tablets disguise themselves as.
    pub desktop_os_user_agents: String,
    pub handheld_platforms: String,
    /// Platform strings shared by desktops and touch tablets; compared
    /// case-insensitively for equality.
    pub ambiguous_platforms: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            mobile_user_agents: "android|webos|iphone|ipod|blackberry|iemobile|opera mini".into(),
            tablet_user_agents: "ipad|tablet(?! pc)|playbook|silk|kindle".into(),
            desktop_os_user_agents: "macintosh".into(),
            handheld_platforms: "ipad|iphone|ipod".into(),
            ambiguous_platforms: vec!["MacIntel".into()],
        }
    }
}

impl ClassifierConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = load_yaml(path)?;
        tracing::info!(path = %path.display(), "loaded classifier config");
        Ok(config)
    }
}

pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = ClassifierConfig::from_yaml_str("breakpoints:\n  small_max: 600\n").unwrap();
        assert_eq!(cfg.breakpoints.small_max, 600);
        assert_eq!(cfg.breakpoints.large_min, 1024);
        assert_eq!(cfg.mobile_user_agents, ClassifierConfig::default().mobile_user_agents);
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = ClassifierConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, ClassifierConfig::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ClassifierConfig::from_file("does/not/exist.yml").unwrap_err();
        assert!(matches!(err, crate::Error::IO(_)));
    }
}
