use serde::{Deserialize, Serialize};

use super::isbn::IsbnMatch;
use crate::domain::error::DomainError;
use crate::domain::validation;
use crate::serde_ext::null_as_default;

/// 未検証のBook。欠落・nullのフィールドは空文字列として扱い、検証で弾く。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
}

impl From<&Book> for NewBook {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// Book record — ISBNで一意に識別される。生成後は不変。
/// 直接デシリアライズはできない。必ず `NewBook` を経由して検証する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
}

impl Book {
    /// 検証済みのBookを生成する。
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::from_new(
            NewBook {
                isbn: isbn.into(),
                title: title.into(),
                author: author.into(),
            },
            IsbnMatch::Strict,
        )
    }

    /// ペイロードを検証してBookに変換する。
    pub fn from_new(book: NewBook, isbn_match: IsbnMatch) -> Result<Self, DomainError> {
        validation::validate(&book, isbn_match)?;
        Ok(Self {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
        })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// 作成後に参照するためのパス。ISBNはエスケープせずそのまま埋め込む。
    pub fn location(&self) -> String {
        format!("/books?isbn={}", self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates() {
        let book = Book::new("978-1503261969", "Emma", "Jane Austen").unwrap();
        assert_eq!(book.isbn(), "978-1503261969");
        assert_eq!(book.title(), "Emma");
        assert_eq!(book.author(), "Jane Austen");

        assert!(Book::new("978-150326196", "Emma", "Jane Austen").is_err());
        assert!(Book::new("978-1503261969", "", "Jane Austen").is_err());
    }

    #[test]
    fn serializes_with_lowercase_fields() {
        let book = Book::new("978-1503261969", "Emma", "Jane Austen").unwrap();
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"isbn":"978-1503261969","title":"Emma","author":"Jane Austen"}"#
        );
    }

    #[test]
    fn new_book_defaults_missing_fields() {
        let draft: NewBook = serde_json::from_str(r#"{"isbn":"123-4567890123"}"#).unwrap();
        assert_eq!(draft.isbn, "123-4567890123");
        assert!(draft.title.is_empty());
        assert!(draft.author.is_empty());
    }

    #[test]
    fn new_book_treats_null_as_empty() {
        let draft: NewBook =
            serde_json::from_str(r#"{"isbn":"123-4567890123","title":null,"author":"A"}"#)
                .unwrap();
        assert!(draft.title.is_empty());
        assert_eq!(draft.author, "A");
        assert!(Book::from_new(draft, IsbnMatch::Strict).is_err());
    }

    #[test]
    fn new_book_from_book_roundtrips() {
        let book = Book::new("978-1503261969", "Emma", "Jane Austen").unwrap();
        let draft = NewBook::from(&book);
        assert_eq!(Book::from_new(draft, IsbnMatch::Strict).unwrap(), book);
    }

    #[test]
    fn location_is_verbatim() {
        let book = Book::from_new(
            NewBook {
                isbn: "x 123-4567890123&y".into(),
                title: "T".into(),
                author: "A".into(),
            },
            IsbnMatch::Contains,
        )
        .unwrap();
        assert_eq!(book.location(), "/books?isbn=x 123-4567890123&y");
    }
}
