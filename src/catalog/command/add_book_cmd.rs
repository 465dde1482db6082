use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, BookKind};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// AddBookCommandRequest carries the raw operator input; nothing is parsed until
// the record is built.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub kind: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub file_size: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(kind: &str, title: &str, author: &str, isbn: &str, file_size: Option<&str>) -> Self {
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            file_size: file_size.map(str::to_string),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        match BookKind::from_str(self.kind.as_str())? {
            BookKind::Physical => {
                Ok(BookEntity::physical(self.title.as_str(), self.author.as_str(), self.isbn.as_str()))
            }
            BookKind::Electronic => {
                let raw = self.file_size.as_deref().unwrap_or_default();
                let file_size_mb = raw.parse::<i64>().map_err(|err|
                    LibraryError::validation("Invalid file size input.", Some(err.to_string())))?;
                Ok(BookEntity::electronic(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), file_size_mb))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{BookEntity, BookKind};
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_add_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("E", "Dune Messiah", "Herbert", "222", Some("5")))
            .expect("should add book");
        assert_eq!(BookEntity::electronic("Dune Messiah", "Herbert", "222", 5), res.book);
        assert_eq!(BookKind::Electronic, res.book.kind());
        assert_eq!(1, svc.count());
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let mut cmd = AddBookCommand::new(svc.as_mut());
        cmd.execute(AddBookCommandRequest::new("B", "Dune", "Herbert", "111", None)).expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("B", "Dune", "Herbert", "111", None));
        assert!(matches!(res, Err(CommandError::DuplicateKey{ .. })));
        assert_eq!(1, svc.count());
    }

    #[test]
    fn test_should_reject_non_numeric_file_size() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("E", "Dune Messiah", "Herbert", "222", Some("abc")));
        assert!(matches!(res, Err(CommandError::Validation{ ref message, .. }) if message == "Invalid file size input."));
        assert_eq!(0, svc.count());
    }

    #[test]
    fn test_should_reject_unknown_kind() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("X", "Dune", "Herbert", "111", None));
        assert!(matches!(res, Err(CommandError::Validation{ ref message, .. }) if message == "Invalid book type."));
        assert_eq!(0, svc.count());
    }

    #[test]
    fn test_should_ignore_file_size_for_physical_book() {
        let req = AddBookCommandRequest::new("B", "Dune", "Herbert", "111", Some("abc"));
        let book = req.build_book().expect("should build book");
        assert_eq!(BookEntity::physical("Dune", "Herbert", "111"), book);
    }
}
