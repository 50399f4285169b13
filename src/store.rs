//! In-memory store for the library's authors and books.
//!
//! Books reference their author by name. Adding a book for an unknown author
//! creates that author, so every book's `author` always names an existing
//! [`Author`]. The per-author book count is never stored; it is computed from
//! the books every time it is read.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::datamodel::{Author, Book, SEED_AUTHORS, SEED_BOOKS};

/// Store handle shared between the schema, the loaders and `main`.
pub type SharedStore = Arc<RwLock<LibraryStore>>;

#[derive(Debug, Default)]
pub struct LibraryStore {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Restricts [`LibraryStore::list_books`]. Both conditions must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookFilter {
    fn matches(&self, book: &Book) -> bool {
        let author_matches = self
            .author
            .as_ref()
            .is_none_or(|author| book.author == *author);
        let genre_matches = self
            .genre
            .as_ref()
            .is_none_or(|genre| book.genres.contains(genre));
        author_matches && genre_matches
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub published: i32,
    pub author: String,
    pub genres: Vec<String>,
}

/// A birth year as the caller sent it, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInput {
    Int(i64),
    Text(String),
}

impl fmt::Display for YearInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearInput::Int(year) => write!(f, "{year}"),
            YearInput::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The birth year was missing or not a number.
    #[error("Invalid year")]
    InvalidInput { value: Option<YearInput> },
}

impl StoreError {
    /// Machine-readable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::InvalidInput { .. } => "BAD_USER_INPUT",
        }
    }
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the fixed initial authors and books.
    pub fn seeded() -> Self {
        Self {
            authors: SEED_AUTHORS.iter().map(Author::from).collect(),
            books: SEED_BOOKS.iter().map(Book::from).collect(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Books matching `filter`, in insertion order.
    pub fn list_books<'a>(&'a self, filter: &'a BookFilter) -> impl Iterator<Item = &'a Book> {
        self.books.iter().filter(move |book| filter.matches(book))
    }

    pub fn count_books(&self) -> usize {
        self.books.len()
    }

    pub fn list_authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn count_authors(&self) -> usize {
        self.authors.len()
    }

    pub fn book_count_for_author(&self, author: &Author) -> usize {
        self.books
            .iter()
            .filter(|book| book.author == author.name)
            .count()
    }

    /// Counts books for each of `names` in a single pass over the books.
    ///
    /// Every requested name is present in the result, with `0` for authors
    /// that have no books.
    pub fn book_counts_by_author(&self, names: Vec<String>) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = names.into_iter().map(|name| (name, 0)).collect();
        for book in &self.books {
            if let Some(count) = counts.get_mut(&book.author) {
                *count += 1;
            }
        }
        counts
    }

    /// Appends a new book, creating its author first if no author has that name.
    #[tracing::instrument(skip(self, input), fields(title = %input.title, author = %input.author))]
    pub fn add_book(&mut self, input: NewBook) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            title: input.title,
            published: input.published,
            author: input.author,
            genres: input.genres,
        };
        self.books.push(book.clone());

        if !self.authors.iter().any(|author| author.name == book.author) {
            let author = Author {
                id: Uuid::new_v4(),
                name: book.author.clone(),
                born: None,
            };
            debug!(id = %author.id, "creating author `{}` for new book", author.name);
            self.authors.push(author);
        }

        book
    }

    /// Sets the birth year of the author called `name`.
    ///
    /// Returns `Ok(None)` when no such author exists, whatever `set_born_to`
    /// holds. Every author with that name is updated and the first one is
    /// returned.
    #[tracing::instrument(skip(self))]
    pub fn edit_author(
        &mut self,
        name: &str,
        set_born_to: Option<&YearInput>,
    ) -> Result<Option<Author>, StoreError> {
        let Some(index) = self.authors.iter().position(|author| author.name == name) else {
            debug!("no author named `{name}`");
            return Ok(None);
        };

        let born = parse_year(set_born_to)?;

        for author in self.authors.iter_mut().filter(|author| author.name == name) {
            author.born = Some(born);
        }

        Ok(Some(self.authors[index].clone()))
    }
}

/// Accepts an integer, or a string holding one, that fits an `i32`.
///
/// Year `0` is a valid year here.
fn parse_year(input: Option<&YearInput>) -> Result<i32, StoreError> {
    let year = match input {
        Some(YearInput::Int(year)) => i32::try_from(*year).ok(),
        Some(YearInput::Text(text)) => text.trim().parse().ok(),
        None => None,
    };
    year.ok_or_else(|| StoreError::InvalidInput {
        value: input.cloned(),
    })
}
