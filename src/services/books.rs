//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput, NewBook},
    repository::BookStore,
    validation::BookValidator,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
    validator: BookValidator,
}

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>, validator: BookValidator) -> Self {
        Self { store, validator }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store.find_by_id(id).await?.ok_or_else(book_not_found)
    }

    /// Exact match on the stored isbn, no normalization
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.store.find_by_isbn(isbn).await?.ok_or_else(book_not_found)
    }

    /// Validate and insert a new book
    pub async fn create(&self, input: &BookInput) -> AppResult<Book> {
        let data = self.validate(input)?;
        let book = self.store.insert(&data).await?;
        tracing::info!(book_id = book.id, isbn = %book.isbn, "Book created");
        Ok(book)
    }

    /// Overwrite all fields of an existing book.
    ///
    /// Validation runs before the existence check, so invalid input for a
    /// missing id is reported as a validation failure.
    pub async fn update(&self, id: i32, input: &BookInput) -> AppResult<Book> {
        let data = self.validate(input)?;
        let book = self.store.update(id, &data).await?.ok_or_else(book_not_found)?;
        tracing::info!(book_id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(book_not_found());
        }
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    fn validate(&self, input: &BookInput) -> AppResult<NewBook> {
        self.validator.validate(input).map_err(|violations| {
            tracing::debug!(count = violations.len(), "Book input rejected");
            AppError::Validation(violations)
        })
    }
}
