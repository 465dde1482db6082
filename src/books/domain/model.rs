use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryError;

// BookDetails groups the fields every catalog record carries. The isbn is the
// identity key across all record kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl BookDetails {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available: true,
        }
    }

    fn describe(&self) -> String {
        format!("Title: {}\nAuthor: {}\nISBN: {}\nAvailable: {}\n",
                self.title, self.author, self.isbn, self.available)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalBook {
    #[serde(flatten)]
    pub details: BookDetails,
}

impl PhysicalBook {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            details: BookDetails::new(title, author, isbn),
        }
    }

    pub fn describe(&self) -> String {
        self.details.describe()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicBook {
    #[serde(flatten)]
    pub details: BookDetails,
    pub file_size_mb: i64,
}

impl ElectronicBook {
    pub fn new(title: &str, author: &str, isbn: &str, file_size_mb: i64) -> Self {
        Self {
            details: BookDetails::new(title, author, isbn),
            file_size_mb,
        }
    }

    pub fn describe(&self) -> String {
        let mut out = self.details.describe();
        out.push_str(format!("File Size: {} MB\n", self.file_size_mb).as_str());
        out
    }
}

// BookEntity is a single catalog record, either a physical or an electronic book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookEntity {
    Physical(PhysicalBook),
    Electronic(ElectronicBook),
}

impl BookEntity {
    pub fn physical(title: &str, author: &str, isbn: &str) -> Self {
        BookEntity::Physical(PhysicalBook::new(title, author, isbn))
    }

    pub fn electronic(title: &str, author: &str, isbn: &str, file_size_mb: i64) -> Self {
        BookEntity::Electronic(ElectronicBook::new(title, author, isbn, file_size_mb))
    }

    pub fn details(&self) -> &BookDetails {
        match self {
            BookEntity::Physical(book) => &book.details,
            BookEntity::Electronic(book) => &book.details,
        }
    }

    pub fn isbn(&self) -> &str {
        self.details().isbn.as_str()
    }

    pub fn kind(&self) -> BookKind {
        match self {
            BookEntity::Physical(_) => BookKind::Physical,
            BookEntity::Electronic(_) => BookKind::Electronic,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn().to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.details().title.as_str()
    }

    fn is_available(&self) -> bool {
        self.details().available
    }

    fn describe(&self) -> String {
        match self {
            BookEntity::Physical(book) => book.describe(),
            BookEntity::Electronic(book) => book.describe(),
        }
    }
}

// BookKind is the one-letter selector an operator types when adding a record
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    Physical,
    Electronic,
}

impl BookKind {
    pub fn label(&self) -> &'static str {
        match self {
            BookKind::Physical => "Book",
            BookKind::Electronic => "EBook",
        }
    }
}

impl FromStr for BookKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(BookKind::Physical),
            "E" => Ok(BookKind::Electronic),
            _ => Err(LibraryError::validation("Invalid book type.", Some(s.to_string()))),
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Physical => write!(f, "B"),
            BookKind::Electronic => write!(f, "E"),
        }
    }
}
