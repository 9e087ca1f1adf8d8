//! Book record store
//!
//! Holds the ordered book collection and the next-id counter in memory.
//! Every operation locks the store for one linear scan or mutation, so
//! callers always observe whole records, never partially applied ones.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, UpdateBook},
};

/// First id handed out after the seed records (and after a full wipe)
const INITIAL_NEXT_ID: i32 = 4;

/// Records present at startup, before any client mutation
fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            year: 1925,
            isbn: "978-0743273565".to_string(),
        },
        Book {
            id: 2,
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            year: 1960,
            isbn: "978-0061120084".to_string(),
        },
        Book {
            id: 3,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
            isbn: "978-0451524935".to_string(),
        },
    ]
}

struct StoreInner {
    books: Vec<Book>,
    next_id: i32,
}

/// In-memory book store
#[derive(Clone)]
pub struct BooksRepository {
    inner: Arc<Mutex<StoreInner>>,
}

impl BooksRepository {
    /// Create a store seeded with the three startup records
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                books: seed_books(),
                next_id: INITIAL_NEXT_ID,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A poisoned lock only means a handler panicked mid-request;
        // the store itself is never left with a torn record.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// List all books in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// Get a book by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.lock()
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Append a new book, assigning the next id
    pub fn create(&self, title: String, author: String, year: i32, isbn: String) -> Book {
        let mut inner = self.lock();
        let book = Book {
            id: inner.next_id,
            title,
            author,
            year,
            isbn,
        };
        inner.next_id += 1;
        inner.books.push(book.clone());
        book
    }

    /// Update a book in place
    ///
    /// Only fields carrying a non-empty value are applied; absent fields,
    /// empty strings and a zero year leave the stored value untouched, so
    /// required fields can never be blanked after creation.
    pub fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        let mut inner = self.lock();
        let book = inner
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if let Some(title) = data.title.as_deref().filter(|t| !t.is_empty()) {
            book.title = title.to_string();
        }
        if let Some(author) = data.author.as_deref().filter(|a| !a.is_empty()) {
            book.author = author.to_string();
        }
        if let Some(year) = data.year.filter(|y| *y != 0) {
            book.year = year;
        }
        if let Some(isbn) = data.isbn.as_deref().filter(|i| !i.is_empty()) {
            book.isbn = isbn.to_string();
        }

        Ok(book.clone())
    }

    /// Remove a book by ID, returning the removed record
    pub fn delete(&self, id: i32) -> AppResult<Book> {
        let mut inner = self.lock();
        let index = inner
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
        Ok(inner.books.remove(index))
    }

    /// Remove every book and reset the id counter to its seed value
    pub fn delete_all(&self) -> usize {
        let mut inner = self.lock();
        let count = inner.books.len();
        inner.books.clear();
        inner.next_id = INITIAL_NEXT_ID;
        count
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_lists_three_books() {
        let repo = BooksRepository::new();
        let books = repo.list();
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[2].title, "1984");
    }

    #[test]
    fn ids_increase_and_are_never_reused() {
        let repo = BooksRepository::new();
        let a = repo.create("A".into(), "B".into(), 2000, "N/A".into());
        assert_eq!(a.id, 4);

        repo.delete(a.id).expect("delete created book");
        let b = repo.create("C".into(), "D".into(), 2001, "N/A".into());
        assert_eq!(b.id, 5);
    }

    #[test]
    fn get_by_id_round_trips_created_record() {
        let repo = BooksRepository::new();
        let created = repo.create("Dune".into(), "Herbert".into(), 1965, "N/A".into());
        let fetched = repo.get_by_id(created.id).expect("book exists");
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_by_id_unknown_is_not_found() {
        let repo = BooksRepository::new();
        assert!(matches!(repo.get_by_id(99), Err(AppError::NotFound(_))));
    }

    #[test]
    fn empty_update_leaves_record_unchanged() {
        let repo = BooksRepository::new();
        let before = repo.get_by_id(1).expect("seed book");
        let after = repo.update(1, &UpdateBook::default()).expect("book exists");
        assert_eq!(after, before);
    }

    #[test]
    fn update_ignores_empty_and_zero_values() {
        let repo = BooksRepository::new();
        let data = UpdateBook {
            title: Some(String::new()),
            author: None,
            year: Some(0),
            isbn: Some(String::new()),
        };
        let after = repo.update(1, &data).expect("book exists");
        assert_eq!(after.title, "The Great Gatsby");
        assert_eq!(after.year, 1925);
        assert_eq!(after.isbn, "978-0743273565");
    }

    #[test]
    fn update_applies_provided_fields_only() {
        let repo = BooksRepository::new();
        let data = UpdateBook {
            title: Some("Nineteen Eighty-Four".into()),
            year: Some(1950),
            ..UpdateBook::default()
        };
        let after = repo.update(3, &data).expect("book exists");
        assert_eq!(after.title, "Nineteen Eighty-Four");
        assert_eq!(after.year, 1950);
        assert_eq!(after.author, "George Orwell");
    }

    #[test]
    fn delete_is_not_repeatable() {
        let repo = BooksRepository::new();
        let removed = repo.delete(2).expect("seed book");
        assert_eq!(removed.id, 2);
        assert!(matches!(repo.get_by_id(2), Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(2), Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_all_resets_the_id_counter() {
        let repo = BooksRepository::new();
        repo.create("X".into(), "Y".into(), 2020, "N/A".into());
        assert_eq!(repo.delete_all(), 4);
        assert!(repo.list().is_empty());

        let fresh = repo.create("Z".into(), "W".into(), 2021, "N/A".into());
        assert_eq!(fresh.id, 4);
    }
}
