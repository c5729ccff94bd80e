#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("empty token pattern for `{0}`")]
    EmptyPattern(&'static str),
    #[error("word source `{source_name}` has ratio {ratio}, expected a value in [0, 1]")]
    InvalidRatio { source_name: String, ratio: f64 },
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("invalid analytics measurement id: {0:?}")]
    InvalidMeasurementId(String),
}

pub type Result<T> = std::result::Result<T, Error>;
