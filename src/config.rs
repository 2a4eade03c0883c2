//! Runtime configuration
//!
//! CLI引数と環境変数から組み立てる。
//! - 第1引数: Store JSONファイルのパス（既定 `books.json`）
//! - `BOOK_GATEWAY_LOG`: ログレベル（既定 `info`）
//! - `BOOK_GATEWAY_ISBN_MATCH`: `strict` | `contains`（既定 `strict`）

use std::path::PathBuf;

use crate::domain::model::isbn::{IsbnMatch, UnknownIsbnMatch};

pub const LOG_ENV: &str = "BOOK_GATEWAY_LOG";
pub const ISBN_MATCH_ENV: &str = "BOOK_GATEWAY_ISBN_MATCH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BOOK_GATEWAY_ISBN_MATCH: {0}")]
    IsbnMatch(#[from] UnknownIsbnMatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub log_level: String,
    pub isbn_match: IsbnMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("books.json"),
            log_level: "info".to_string(),
            isbn_match: IsbnMatch::default(),
        }
    }
}

impl Config {
    /// プロセスの引数と環境変数から読み込む。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::args().nth(1),
            std::env::var(LOG_ENV).ok(),
            std::env::var(ISBN_MATCH_ENV).ok(),
        )
    }

    pub fn from_parts(
        store_path: Option<String>,
        log_level: Option<String>,
        isbn_match: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            store_path: store_path.map(PathBuf::from).unwrap_or(defaults.store_path),
            log_level: log_level
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(defaults.log_level),
            isbn_match: match isbn_match {
                Some(s) => s.trim().parse::<IsbnMatch>()?,
                None => defaults.isbn_match,
            },
        })
    }
}
