use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdviceError {
    #[error("Unrecognized rank: {0:?}")]
    UnrecognizedRank(String),
    #[error("Invalid request: {0}")]
    Request(String),
}
