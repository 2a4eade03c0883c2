use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, NewBook};
use crate::domain::model::isbn::IsbnMatch;
use crate::domain::repository::BookRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record under key {key:?}: {source}")]
    InvalidRecord {
        key: String,
        #[source]
        source: DomainError,
    },
    #[error("record under key {key:?} has isbn {found:?}")]
    KeyMismatch { key: String, found: String },
}

/// JSONファイルによるBookRepository実装。
/// 1ファイル = ISBN → Book のマップ。ファイルが無ければ空とみなす。
/// 読み出したレコードは検証してからBookに変換する。
pub struct JsonBookRepository {
    path: PathBuf,
    isbn_match: IsbnMatch,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            isbn_match: IsbnMatch::default(),
        }
    }

    pub fn with_isbn_match(mut self, isbn_match: IsbnMatch) -> Self {
        self.isbn_match = isbn_match;
        self
    }

    fn load_all(&self) -> Result<BTreeMap<String, NewBook>, JsonStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_all(&self, books: &BTreeMap<String, NewBook>) -> Result<(), JsonStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(books)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &content)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// キーと中身のISBNが一致し、検証を通るレコードだけをBookにする。
    fn to_book(&self, key: &str, record: NewBook) -> Result<Book, JsonStoreError> {
        if record.isbn != key {
            return Err(JsonStoreError::KeyMismatch {
                key: key.to_string(),
                found: record.isbn,
            });
        }
        Book::from_new(record, self.isbn_match).map_err(|source| JsonStoreError::InvalidRecord {
            key: key.to_string(),
            source,
        })
    }
}

impl BookRepository for JsonBookRepository {
    type Error = JsonStoreError;

    fn fetch(&self, isbn: &str) -> Result<Option<Book>, Self::Error> {
        self.load_all()?
            .remove(isbn)
            .map(|record| self.to_book(isbn, record))
            .transpose()
    }

    fn store(&self, book: &Book) -> Result<(), Self::Error> {
        let mut books = self.load_all()?;
        books.insert(book.isbn().to_string(), NewBook::from(book));
        self.save_all(&books)
    }
}
