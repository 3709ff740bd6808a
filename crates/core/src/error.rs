#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    #[error("invalid separator style: {0:?} (expected \"native\" or \"legacy\")")]
    InvalidSeparatorStyle(String),
    #[error("failed to write report: {0}")]
    Write(std::io::Error),
}

pub type PathsResult<T> = std::result::Result<T, PathsError>;
