//! Catalog service
//!
//! Validation and defaulting on top of the book record store.

use chrono::{Datelike, Local};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Create a book, rejecting requests without a title or author
    pub fn create(&self, data: CreateBook) -> AppResult<Book> {
        let title = data.title.filter(|t| !t.is_empty());
        let author = data.author.filter(|a| !a.is_empty());

        let (title, author) = match (title, author) {
            (Some(title), Some(author)) => (title, author),
            _ => {
                return Err(AppError::Validation(
                    "Title and author are required".to_string(),
                ))
            }
        };

        let year = data.year.unwrap_or_else(|| Local::now().year());
        let isbn = data.isbn.unwrap_or_else(|| "N/A".to_string());

        Ok(self.repository.books.create(title, author, year, isbn))
    }

    pub fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        self.repository.books.update(id, data)
    }

    pub fn delete(&self, id: i32) -> AppResult<Book> {
        self.repository.books.delete(id)
    }

    pub fn delete_all(&self) -> usize {
        self.repository.books.delete_all()
    }
}
