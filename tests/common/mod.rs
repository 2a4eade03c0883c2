//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use book_gateway::application::service::BookService;
use book_gateway::domain::model::book::Book;
use book_gateway::domain::repository::BookRepository;
use book_gateway::interface::error_log::ErrorLog;
use book_gateway::interface::gateway::GatewayRequest;
use book_gateway::interface::router::Router;

pub const EMMA_ISBN: &str = "978-1503261969";
pub const EMMA_JSON: &str = r#"{"isbn":"978-1503261969","title":"Emma","author":"Jane Austen"}"#;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

/// ファイルI/O不要のインメモリリポジトリ。呼び出し回数も記録する。
#[derive(Default)]
pub struct InMemoryRepo {
    store: RefCell<HashMap<String, Book>>,
    fetches: Cell<usize>,
    stores: Cell<usize>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let repo = Self::new();
        for book in books {
            repo.store
                .borrow_mut()
                .insert(book.isbn().to_string(), book);
        }
        repo
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn stores(&self) -> usize {
        self.stores.get()
    }

    pub fn get(&self, isbn: &str) -> Option<Book> {
        self.store.borrow().get(isbn).cloned()
    }
}

impl BookRepository for InMemoryRepo {
    type Error = std::convert::Infallible;

    fn fetch(&self, isbn: &str) -> Result<Option<Book>, Self::Error> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.get(isbn))
    }

    fn store(&self, book: &Book) -> Result<(), Self::Error> {
        self.stores.set(self.stores.get() + 1);
        self.store
            .borrow_mut()
            .insert(book.isbn().to_string(), book.clone());
        Ok(())
    }
}

// =============================================================================
// FailingRepo — 常に失敗するリポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("backend unavailable: {0}")]
pub struct BackendError(pub &'static str);

pub struct FailingRepo(pub &'static str);

impl BookRepository for FailingRepo {
    type Error = BackendError;

    fn fetch(&self, _isbn: &str) -> Result<Option<Book>, Self::Error> {
        Err(BackendError(self.0))
    }

    fn store(&self, _book: &Book) -> Result<(), Self::Error> {
        Err(BackendError(self.0))
    }
}

// =============================================================================
// CapturingLog — ErrorLogの記録を保持する
// =============================================================================

#[derive(Default)]
pub struct CapturingLog {
    records: RefCell<Vec<String>>,
}

impl CapturingLog {
    pub fn records(&self) -> Vec<String> {
        self.records.borrow().clone()
    }
}

impl ErrorLog for CapturingLog {
    fn record(&self, message: &str) {
        self.records.borrow_mut().push(message.to_string());
    }
}

// =============================================================================
// Request helpers
// =============================================================================

pub fn router<R: BookRepository>(repo: R, log: &CapturingLog) -> Router<R, &CapturingLog> {
    Router::new(BookService::new(repo), log)
}

pub fn get(isbn: &str) -> GatewayRequest {
    GatewayRequest::new("GET").with_query("isbn", isbn)
}

pub fn post_json(body: &str) -> GatewayRequest {
    GatewayRequest::new("POST")
        .with_header("Content-Type", "application/json")
        .with_body(body)
}

pub fn emma() -> Book {
    Book::new(EMMA_ISBN, "Emma", "Jane Austen").unwrap()
}
