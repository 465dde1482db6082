pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity>;
    fn search_by_title(&self, title: &str) -> Vec<BookEntity>;
    fn list_books(&self) -> Vec<BookEntity>;
    fn count(&self) -> usize;
}
