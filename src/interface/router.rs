//! Request router
//!
//! HTTPメソッドのみで振り分ける（パスは見ない）。
//! - `GET`  → show:   `?isbn=` のBookをJSONで返す
//! - `POST` → create: JSON bodyのBookを登録し、`Location` を返す
//! - その他 → 405

use http::StatusCode;

use crate::application::error::AppError;
use crate::application::service::BookService;
use crate::domain::model::book::NewBook;
use crate::domain::repository::BookRepository;

use super::error_log::ErrorLog;
use super::gateway::{GatewayRequest, GatewayResponse};
use super::responder::{client_error, error_response};

const JSON_CONTENT_TYPE: &str = "application/json";

pub struct Router<R: BookRepository, L: ErrorLog> {
    service: BookService<R>,
    log: L,
}

impl<R: BookRepository, L: ErrorLog> Router<R, L> {
    pub fn new(service: BookService<R>, log: L) -> Self {
        Self { service, log }
    }

    pub fn service(&self) -> &BookService<R> {
        &self.service
    }

    /// どの経路でも必ずレスポンスを返す。
    pub fn route(&self, req: &GatewayRequest) -> GatewayResponse {
        match req.http_method.as_str() {
            "GET" => self.show(req),
            "POST" => self.create(req),
            _ => client_error(StatusCode::METHOD_NOT_ALLOWED),
        }
    }

    pub fn show(&self, req: &GatewayRequest) -> GatewayResponse {
        let isbn = req.query("isbn").unwrap_or_default();
        let book = match self.service.get_book(isbn) {
            Ok(book) => book,
            Err(e) => return error_response(&self.log, &e),
        };

        match serde_json::to_string(&book) {
            Ok(js) => GatewayResponse::new(StatusCode::OK, js),
            Err(e) => error_response(&self.log, &AppError::from(e)),
        }
    }

    pub fn create(&self, req: &GatewayRequest) -> GatewayResponse {
        if req.header("Content-Type") != Some(JSON_CONTENT_TYPE) {
            return client_error(StatusCode::NOT_ACCEPTABLE);
        }

        // `null` は空のBookとして検証に回す（400）
        let new_book = match serde_json::from_str::<Option<NewBook>>(&req.body) {
            Ok(b) => b.unwrap_or_default(),
            Err(_) => return client_error(StatusCode::UNPROCESSABLE_ENTITY),
        };

        match self.service.create_book(new_book) {
            Ok(book) => {
                GatewayResponse::new(StatusCode::CREATED, "").with_header("Location", book.location())
            }
            Err(e) => error_response(&self.log, &e),
        }
    }
}
