//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding the record stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository seeded with the startup records
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
