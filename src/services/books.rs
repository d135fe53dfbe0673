//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::{validate_record, Book, Record},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list().await)
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .books
            .find(isbn)
            .await
            .ok_or_else(|| AppError::not_found(Book::ENTITY, isbn))
    }

    pub async fn create(&self, book: Book) -> AppResult<Book> {
        validate_record(&book)?;
        let created = self.repository.books.create(book).await;
        tracing::info!(isbn = %created.isbn13, "Book created");
        Ok(created)
    }

    pub async fn update(&self, isbn: &str, book: Book) -> AppResult<Book> {
        if !self.repository.books.exists(isbn).await {
            return Err(AppError::not_found(Book::ENTITY, isbn));
        }
        validate_record(&book)?;
        let updated = self
            .repository
            .books
            .update(isbn, book)
            .await
            .ok_or_else(|| AppError::not_found(Book::ENTITY, isbn))?;
        tracing::info!(isbn = %isbn, "Book updated");
        Ok(updated)
    }

    pub async fn delete(&self, isbn: &str) -> AppResult<Book> {
        let deleted = self
            .repository
            .books
            .delete(isbn)
            .await
            .ok_or_else(|| AppError::not_found(Book::ENTITY, isbn))?;
        tracing::info!(isbn = %isbn, "Book deleted");
        Ok(deleted)
    }
}
