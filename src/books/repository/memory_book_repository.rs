use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps records in a vector in insertion order. Every lookup
// is a linear scan over the isbn shared by both record kinds.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn() == isbn)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if self.position(entity.isbn()).is_some() {
            return Err(LibraryError::duplicate_key("ISBN already exists"));
        }
        self.books.push(entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<&BookEntity> {
        self.position(id)
            .and_then(|ndx| self.books.get(ndx))
            .ok_or_else(|| LibraryError::not_found(format!("Book with ISBN {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        match self.position(id) {
            Some(ndx) => Ok(self.books.remove(ndx)),
            None => Err(LibraryError::not_found(format!("Book with ISBN {} not found", id).as_str())),
        }
    }

    fn all(&self) -> &[BookEntity] {
        &self.books
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, substring: &str) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.title().contains(substring)).collect()
    }
}
