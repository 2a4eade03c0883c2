use super::model::book::Book;

/// 永続化の抽象。ISBNをキーとするKey-Value Store。Infra層が実装する。
pub trait BookRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 該当レコードが無ければ `Ok(None)`。
    fn fetch(&self, isbn: &str) -> Result<Option<Book>, Self::Error>;
    fn store(&self, book: &Book) -> Result<(), Self::Error>;
}
