pub mod book;
pub mod isbn;
