#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },
    #[error("invalid version: {0:?}")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
