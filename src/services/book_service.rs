use crate::data::models::book::Book;
use crate::data::repos::implementors::book_repo::{BookDetails, BookRepo};
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::BookServiceError;
use std::collections::HashMap;

pub struct BookService;

impl BookService {
    pub fn new() -> Self {
        BookService
    }

    /// Non-deleted books, each with its poster image name if it has one.
    pub async fn get_catalog(&self) -> Result<Vec<(Book, Option<String>)>, BookServiceError> {
        let repo = BookRepo::new();

        let books = repo
            .get_all()
            .await
            .map_err(|e| {
                tracing::error!("Error fetching books: {}", e);
                BookServiceError::DatabaseError
            })?
            .unwrap_or_default();

        let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
        let mut posters: HashMap<i32, String> = repo
            .get_poster_names(&ids)
            .await
            .map_err(|_| BookServiceError::DatabaseError)?;

        Ok(books
            .into_iter()
            .map(|book| {
                let poster = posters.remove(&book.id);
                (book, poster)
            })
            .collect())
    }

    pub async fn get_book(&self, book_id: i32) -> Result<BookDetails, BookServiceError> {
        BookRepo::new()
            .get_details(book_id)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching book {}: {}", book_id, e);
                BookServiceError::DatabaseError
            })?
            .ok_or(BookServiceError::BookNotFound)
    }
}

impl Default for BookService {
    fn default() -> Self {
        Self::new()
    }
}
