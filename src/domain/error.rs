#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid isbn: {0:?}")]
    InvalidIsbn(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
