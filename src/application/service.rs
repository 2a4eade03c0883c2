use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, NewBook};
use crate::domain::model::isbn::IsbnMatch;
use crate::domain::repository::BookRepository;
use crate::domain::validation;

use super::error::AppError;

/// Book catalogのユースケース。1リクエストにつき読み込み or 書き込みを高々1回行う。
pub struct BookService<R: BookRepository> {
    repo: R,
    isbn_match: IsbnMatch,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            isbn_match: IsbnMatch::default(),
        }
    }

    pub fn with_isbn_match(mut self, isbn_match: IsbnMatch) -> Self {
        self.isbn_match = isbn_match;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// ISBNでBookを取得する。書式不正ならStoreに問い合わせない。
    pub fn get_book(&self, isbn: &str) -> Result<Book, AppError> {
        if !validation::is_valid_isbn(isbn, self.isbn_match) {
            return Err(DomainError::InvalidIsbn(isbn.to_string()).into());
        }
        self.repo
            .fetch(isbn)
            .map_err(|e| AppError::Storage(Box::new(e)))?
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    /// ペイロードを検証して永続化する。同一ISBNは上書き（last write wins）。
    pub fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = Book::from_new(new_book, self.isbn_match)?;
        self.repo
            .store(&book)
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(book)
    }
}
