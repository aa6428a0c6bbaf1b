use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid configuration: {0}")]
  Configuration(#[from] serde_json::Error),
  #[error("failed to read source file `{}`: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to build a uri from `{0}`")]
  Url(String),
}
