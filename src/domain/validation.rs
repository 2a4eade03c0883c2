//! Book record validation.
//!
//! ISBN書式とtitle/authorの必須チェック。trimは行わない（空文字列のみ不可）。

use super::error::DomainError;
use super::model::book::NewBook;
use super::model::isbn::IsbnMatch;

/// `DDD-DDDDDDDDDD` に一致するか。全体一致か部分一致かは `isbn_match` による。
pub fn is_valid_isbn(s: &str, isbn_match: IsbnMatch) -> bool {
    isbn_match.matches(s)
}

/// title と author が共に空でないか。
pub fn has_required_fields(book: &NewBook) -> bool {
    !book.title.is_empty() && !book.author.is_empty()
}

/// ISBN → 必須フィールドの順に検証する。
pub fn validate(book: &NewBook, isbn_match: IsbnMatch) -> Result<(), DomainError> {
    if !is_valid_isbn(&book.isbn, isbn_match) {
        return Err(DomainError::InvalidIsbn(book.isbn.clone()));
    }
    if !has_required_fields(book) {
        let field = if book.title.is_empty() { "title" } else { "author" };
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
