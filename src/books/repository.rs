pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // records whose title contains the substring, in insertion order
    fn find_by_title(&self, substring: &str) -> Vec<&BookEntity>;
}
