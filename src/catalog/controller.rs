use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ConsoleMessage};
use crate::core::library::{LibraryError, LibraryResult};

const MENU: &str = "\nLibrary Management System\n\
1. Add Book/EBook\n\
2. Remove Book/EBook\n\
3. Search Books\n\
4. List All Books/EBooks\n\
5. Exit\n\
Enter your choice: ";

// Flow tells the read loop whether to prompt again
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

// CatalogController drives the menu loop: it reads one selection at a time from
// `input`, runs the matching catalog command and writes the outcome to `output`.
pub struct CatalogController<R: BufRead, W: Write> {
    input: R,
    output: W,
    separator: String,
    catalog_service: Box<dyn CatalogService>,
}

impl<R: BufRead, W: Write> CatalogController<R, W> {
    pub fn new(state: &AppState, input: R, output: W) -> Self {
        let catalog_service = factory::create_catalog_service(&state.config, state.store);
        Self::with_service(state, catalog_service, input, output)
    }

    fn with_service(state: &AppState, catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            separator: state.config.separator.to_string(),
            catalog_service,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Runs until the exit selection or the end of input. Unreadable input aborts
    // only the current selection; a failure to write the console output ends the
    // loop with an error.
    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;
            let flow = match self.read_line() {
                Ok(Some(choice)) => self.dispatch(choice.as_str()),
                Ok(None) => return Ok(()),
                Err(err) => Err(err),
            };
            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err @ LibraryError::Validation { .. }) => self.report(CommandError::from(err))?,
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> LibraryResult<Flow> {
        debug!(choice, "menu selection");
        match choice {
            "1" => self.add_book(),
            "2" => self.remove_book(),
            "3" => self.search_books(),
            "4" => self.list_books(),
            "5" => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_book(&mut self) -> LibraryResult<Flow> {
        let Some(kind) = self.prompt("Enter Book/EBook type (B/E): \n")? else { return Ok(Flow::Exit) };
        let Some(title) = self.prompt("Enter Title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.prompt("Enter Author: ")? else { return Ok(Flow::Exit) };
        let Some(isbn) = self.prompt("Enter ISBN: ")? else { return Ok(Flow::Exit) };
        let file_size = if kind == "E" {
            let Some(size) = self.prompt("Enter File Size (MB): ")? else { return Ok(Flow::Exit) };
            Some(size)
        } else {
            None
        };

        let req = AddBookCommandRequest::new(
            kind.as_str(), title.as_str(), author.as_str(), isbn.as_str(), file_size.as_deref());
        let res = AddBookCommand::new(self.catalog_service.as_mut()).execute(req);
        match res {
            Ok(res) => writeln!(self.output, "{} added successfully!", res.book.kind().label())?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> LibraryResult<Flow> {
        let Some(isbn) = self.prompt("Enter ISBN of the book to remove: ")? else { return Ok(Flow::Exit) };
        let res = RemoveBookCommand::new(self.catalog_service.as_mut())
            .execute(RemoveBookCommandRequest::new(isbn.as_str()));
        match res {
            Ok(_) => writeln!(self.output, "Book removed successfully!")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> LibraryResult<Flow> {
        let Some(title) = self.prompt("Enter title to search: ")? else { return Ok(Flow::Exit) };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::new(title.as_str()));
        match res {
            Ok(res) if res.books.is_empty() => writeln!(self.output, "No books found.")?,
            Ok(res) => {
                writeln!(self.output, "Search Results:")?;
                self.print_books(&res.books)?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> LibraryResult<Flow> {
        let res = ListBooksCommand::new(self.catalog_service.as_ref())
            .execute(ListBooksCommandRequest::default());
        match res {
            Ok(res) => {
                writeln!(self.output, "List of all Books/EBooks:")?;
                self.print_books(&res.books)?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn print_books(&mut self, books: &[BookEntity]) -> LibraryResult<()> {
        for book in books {
            write!(self.output, "{}", book.describe())?;
            writeln!(self.output, "{}", self.separator)?;
        }
        Ok(())
    }

    fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        let ConsoleMessage(message) = ConsoleMessage::from(err);
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    // Next trimmed line, or None once the input is exhausted or unreadable. A line
    // that is not valid UTF-8 has already been consumed and is reported as invalid.
    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info!("end of input, leaving catalog console");
                Ok(None)
            }
            Ok(_) => match String::from_utf8(buf) {
                Ok(line) => Ok(Some(line.trim().to_string())),
                Err(err) => {
                    warn!("discarding console line: {}", err);
                    Err(LibraryError::validation("Invalid input.", Some(err.to_string())))
                }
            },
            Err(err) => {
                warn!("failed to read console input: {}", err);
                Ok(None)
            }
        }
    }
}
