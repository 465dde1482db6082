use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(book: &BookEntity) -> HashMap<String, String> {
        HashMap::from([
            ("kind".to_string(), book.kind().to_string()),
            ("available".to_string(), book.is_available().to_string()),
        ])
    }

    // The catalog change has already happened when this runs, so a publisher
    // failure is logged and never turned into an error for the caller.
    fn publish(&mut self, event: LibraryResult<DomainEvent>) {
        let res = event.and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish catalog event: {}", err);
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity> {
        if let Err(err) = self.book_repository.create(book.clone()) {
            warn!(isbn = book.isbn(), "add rejected: {}", err);
            return Err(err);
        }
        info!(isbn = book.isbn(), kind = ?book.kind(), "added book");
        let event = DomainEvent::added(
            "books", self.branch_id.as_str(), book.id().as_str(), &Self::metadata(&book), &book);
        self.publish(event.map_err(LibraryError::from));
        Ok(book)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let removed = match self.book_repository.delete(isbn) {
            Ok(removed) => removed,
            Err(err) => {
                warn!(isbn, "remove rejected: {}", err);
                return Err(err);
            }
        };
        info!(isbn, kind = ?removed.kind(), "removed book");
        let event = DomainEvent::deleted(
            "books", self.branch_id.as_str(), removed.id().as_str(), &Self::metadata(&removed), &removed.id());
        self.publish(event.map_err(LibraryError::from));
        Ok(removed)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity> {
        self.book_repository.get(isbn).cloned()
    }

    fn search_by_title(&self, title: &str) -> Vec<BookEntity> {
        let res: Vec<BookEntity> = self.book_repository.find_by_title(title).into_iter().cloned().collect();
        debug!(title, matches = res.len(), "searched books by title");
        res
    }

    fn list_books(&self) -> Vec<BookEntity> {
        debug!(size = self.count(), "listing books");
        self.book_repository.all().to_vec()
    }

    fn count(&self) -> usize {
        self.book_repository.all().len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::events::EventPublisher;

    // RecordingPublisher keeps the kind of every event it is handed
    struct RecordingPublisher {
        kinds: Rc<RefCell<Vec<DomainEventType>>>,
        fail: bool,
    }

    impl EventPublisher for RecordingPublisher {
        fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
            self.kinds.borrow_mut().push(event.kind.clone());
            if self.fail {
                return Err(LibraryError::runtime("topic unavailable", None));
            }
            Ok(())
        }
    }

    fn recorded_sut(fail: bool) -> (CatalogServiceImpl, Rc<RefCell<Vec<DomainEventType>>>) {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let publisher = RecordingPublisher { kinds: Rc::clone(&kinds), fail };
        let svc = CatalogServiceImpl::new(
            &Configuration::new("test"), Box::new(MemoryBookRepository::new()), Box::new(publisher));
        (svc, kinds)
    }

    fn sut() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory)
    }

    fn isbns(books: &[BookEntity]) -> Vec<String> {
        books.iter().map(|b| b.isbn().to_string()).collect()
    }

    #[test]
    fn test_should_add_book() {
        let mut catalog_svc = sut();
        let book = BookEntity::physical("Dune", "Herbert", "111");
        let added = catalog_svc.add_book(book.clone()).expect("should add book");
        assert_eq!(book, added);

        let loaded = catalog_svc.find_book_by_isbn("111").expect("should return book");
        assert_eq!(book, loaded);
    }

    #[test]
    fn test_should_keep_insertion_order() {
        let mut catalog_svc = sut();
        let expected: Vec<String> = (0..25).map(|n| format!("isbn-{}", n)).collect();
        for (n, isbn) in expected.iter().enumerate() {
            let book = if n % 2 == 0 {
                BookEntity::physical("title", "author", isbn)
            } else {
                BookEntity::electronic("title", "author", isbn, n as i64)
            };
            catalog_svc.add_book(book).expect("should add book");
        }
        assert_eq!(expected.len(), catalog_svc.count());
        assert_eq!(expected, isbns(&catalog_svc.list_books()));
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut catalog_svc = sut();
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        catalog_svc.add_book(BookEntity::physical("Emma", "Austen", "333")).expect("should add book");
        let before = catalog_svc.list_books();

        let res = catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ .. })));
        let res = catalog_svc.add_book(BookEntity::electronic("Emma", "Austen", "333", 2));
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ .. })));

        assert_eq!(2, catalog_svc.count());
        assert_eq!(before, catalog_svc.list_books());
    }

    #[test]
    fn test_should_remove_book() {
        let mut catalog_svc = sut();
        for isbn in ["1", "2", "3"] {
            catalog_svc.add_book(BookEntity::physical("title", "author", isbn)).expect("should add book");
        }
        let removed = catalog_svc.remove_book("2").expect("should remove book");
        assert_eq!("2", removed.isbn());
        assert_eq!(2, catalog_svc.count());
        assert_eq!(vec!["1", "3"], isbns(&catalog_svc.list_books()));
        assert!(catalog_svc.find_book_by_isbn("2").is_err());
    }

    #[test]
    fn test_should_not_remove_missing_book() {
        let mut catalog_svc = sut();
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        let res = catalog_svc.remove_book("999");
        assert!(matches!(res, Err(LibraryError::NotFound{ .. })));
        assert_eq!(1, catalog_svc.count());
    }

    #[test]
    fn test_should_search_by_title() {
        let mut catalog_svc = sut();
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        catalog_svc.add_book(BookEntity::physical("Emma", "Austen", "333")).expect("should add book");
        catalog_svc.add_book(BookEntity::electronic("Dune Messiah", "Herbert", "222", 5)).expect("should add book");

        assert_eq!(vec!["111", "222"], isbns(&catalog_svc.search_by_title("Dune")));
        assert_eq!(vec!["111", "333", "222"], isbns(&catalog_svc.search_by_title("")));
        assert_eq!(vec!["222"], isbns(&catalog_svc.search_by_title("Messiah")));
        assert!(catalog_svc.search_by_title("DUNE").is_empty());
    }

    #[test]
    fn test_should_search_after_remove() {
        let mut catalog_svc = sut();
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        catalog_svc.add_book(BookEntity::electronic("Dune Messiah", "Herbert", "222", 5)).expect("should add book");
        assert_eq!(vec!["111", "222"], isbns(&catalog_svc.search_by_title("Dune")));

        catalog_svc.remove_book("111").expect("should remove book");
        let res = catalog_svc.search_by_title("Dune");
        assert_eq!(1, res.len());
        assert_eq!(BookEntity::electronic("Dune Messiah", "Herbert", "222", 5), res[0]);
    }

    #[test]
    fn test_should_publish_events_for_changes() {
        let (mut catalog_svc, kinds) = recorded_sut(false);
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        catalog_svc.remove_book("111").expect("should remove book");
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Deleted], *kinds.borrow());
    }

    #[test]
    fn test_should_not_publish_for_rejected_changes() {
        let (mut catalog_svc, kinds) = recorded_sut(false);
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        assert!(catalog_svc.add_book(BookEntity::electronic("Dune", "Herbert", "111", 5)).is_err());
        assert!(catalog_svc.remove_book("999").is_err());
        assert_eq!(vec![DomainEventType::Added], *kinds.borrow());
    }

    #[test]
    fn test_should_keep_change_when_publish_fails() {
        let (mut catalog_svc, kinds) = recorded_sut(true);
        catalog_svc.add_book(BookEntity::physical("Dune", "Herbert", "111")).expect("should add book");
        catalog_svc.add_book(BookEntity::physical("Emma", "Austen", "333")).expect("should add book");
        assert_eq!(2, catalog_svc.count());
        catalog_svc.remove_book("111").expect("should remove book");
        assert_eq!(1, catalog_svc.count());
        assert_eq!(3, kinds.borrow().len());
    }
}
