use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("book not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// クライアント起因のエラーか（ログ対象外）。
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::NotFound(_))
    }
}
