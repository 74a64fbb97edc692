use crate::data::models::basket_item::BasketItem;
use crate::data::models::book::Book;
use crate::data::repos::implementors::basket_repo::BasketRepo;
use crate::data::repos::implementors::book_repo::BookRepo;
use crate::services::errors::BasketServiceError;
use crate::services::pricing::{self, Priced};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the cookie holding a guest's basket.
pub const BASKET_COOKIE: &str = "basket";

/// One entry of the guest basket cookie. Both `bookId`/`count` and
/// `BookId`/`Count` spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieBasketItem {
    #[serde(alias = "BookId")]
    pub book_id: i32,
    #[serde(alias = "Count")]
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketLine {
    pub book_id: i32,
    pub book_name: String,
    /// Effective unit price.
    pub book_price: BigDecimal,
    pub count: i32,
    pub poster_image: Option<String>,
}

impl BasketLine {
    pub fn from_book(book: &Book, count: i32, poster_image: Option<String>) -> Self {
        BasketLine {
            book_id: book.id,
            book_name: book.name.clone(),
            book_price: book.effective_price(),
            count,
            poster_image,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        pricing::line_total(&self.book_price, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketView {
    pub items: Vec<BasketLine>,
    pub total_price: BigDecimal,
}

impl BasketView {
    pub fn new(items: Vec<BasketLine>) -> Self {
        let total_price = pricing::total(items.iter().map(|l| (&l.book_price, l.count)));
        BasketView { items, total_price }
    }

    pub fn empty() -> Self {
        BasketView::new(Vec::new())
    }
}

pub fn parse_basket_cookie(raw: &str) -> Result<Vec<CookieBasketItem>, BasketServiceError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("Rejecting malformed basket cookie: {}", e);
        BasketServiceError::MalformedBasketCookie
    })
}

pub fn encode_basket_cookie(items: &[CookieBasketItem]) -> Result<String, BasketServiceError> {
    serde_json::to_string(items).map_err(|e| {
        tracing::error!("Failed to encode basket cookie: {}", e);
        BasketServiceError::CookieEncoding
    })
}

/// Lines for a member basket. Every row is shown, in row order.
pub fn member_lines(rows: &[(BasketItem, Book)], posters: &HashMap<i32, String>) -> Vec<BasketLine> {
    rows.iter()
        .map(|(item, book)| BasketLine::from_book(book, item.count, posters.get(&book.id).cloned()))
        .collect()
}

/// Lines for a guest basket. Entries whose book is missing from `books`
/// (unknown or soft-deleted) or whose count is not positive are dropped.
pub fn guest_lines(
    items: &[CookieBasketItem],
    books: &HashMap<i32, Book>,
    posters: &HashMap<i32, String>,
) -> Vec<BasketLine> {
    items
        .iter()
        .filter(|item| item.count > 0)
        .filter_map(|item| {
            books
                .get(&item.book_id)
                .filter(|book| !book.is_deleted)
                .map(|book| BasketLine::from_book(book, item.count, posters.get(&book.id).cloned()))
        })
        .collect()
}

/// Adds `count` to the entry for `book_id`, appending one if absent.
/// A merged count that no longer fits in an `i32` is rejected.
pub fn add_cookie_item(
    items: &mut Vec<CookieBasketItem>,
    book_id: i32,
    count: i32,
) -> Result<(), BasketServiceError> {
    match items.iter_mut().find(|i| i.book_id == book_id) {
        Some(existing) => {
            existing.count = existing
                .count
                .checked_add(count)
                .ok_or(BasketServiceError::InvalidCount)?;
        }
        None => items.push(CookieBasketItem { book_id, count }),
    }

    Ok(())
}

pub fn remove_cookie_item(items: &mut Vec<CookieBasketItem>, book_id: i32) {
    items.retain(|i| i.book_id != book_id);
}

fn cookie_items(cookie: Option<&str>) -> Result<Vec<CookieBasketItem>, BasketServiceError> {
    match cookie {
        Some(raw) => parse_basket_cookie(raw),
        None => Ok(Vec::new()),
    }
}

pub struct BasketService;

impl BasketService {
    pub fn new() -> Self {
        BasketService
    }

    /// Members get their database basket; everyone else gets the cookie basket.
    pub async fn resolve(
        &self,
        member_id: Option<i32>,
        cookie: Option<&str>,
    ) -> Result<BasketView, BasketServiceError> {
        match member_id {
            Some(user_id) => self.resolve_member(user_id).await,
            None => self.resolve_guest(cookie).await,
        }
    }

    pub async fn resolve_member(&self, user_id: i32) -> Result<BasketView, BasketServiceError> {
        let rows = BasketRepo::new()
            .get_with_books(user_id)
            .await
            .map_err(|e| {
                tracing::error!("Error loading basket of user {}: {}", user_id, e);
                BasketServiceError::DatabaseError
            })?;

        let ids: Vec<i32> = rows.iter().map(|(_, book)| book.id).collect();
        let posters = self.posters(&ids).await?;

        Ok(BasketView::new(member_lines(&rows, &posters)))
    }

    pub async fn resolve_guest(&self, cookie: Option<&str>) -> Result<BasketView, BasketServiceError> {
        let items = cookie_items(cookie)?;
        if items.is_empty() {
            return Ok(BasketView::empty());
        }

        let ids: Vec<i32> = items.iter().map(|i| i.book_id).collect();
        let books = BookRepo::new().get_active_by_ids(&ids).await.map_err(|e| {
            tracing::error!("Error loading basket books: {}", e);
            BasketServiceError::DatabaseError
        })?;
        let posters = self.posters(&ids).await?;

        Ok(BasketView::new(guest_lines(&items, &books, &posters)))
    }

    pub async fn add_member_item(
        &self,
        user_id: i32,
        book_id: i32,
        count: i32,
    ) -> Result<(), BasketServiceError> {
        self.ensure_addable(book_id, count).await?;

        BasketRepo::new()
            .add_or_increment(user_id, book_id, count)
            .await
            .map_err(|e| {
                tracing::error!("Error adding book {} to basket of user {}: {}", book_id, user_id, e);
                BasketServiceError::DatabaseError
            })?
            .map(|_| ())
            .ok_or_else(|| {
                tracing::warn!("Basket count overflow for book {} of user {}", book_id, user_id);
                BasketServiceError::InvalidCount
            })
    }

    /// Returns the new cookie value.
    pub async fn add_guest_item(
        &self,
        cookie: Option<&str>,
        book_id: i32,
        count: i32,
    ) -> Result<String, BasketServiceError> {
        let mut items = cookie_items(cookie)?;
        self.ensure_addable(book_id, count).await?;

        add_cookie_item(&mut items, book_id, count)?;
        encode_basket_cookie(&items)
    }

    pub async fn remove_member_item(&self, user_id: i32, book_id: i32) -> Result<(), BasketServiceError> {
        BasketRepo::new()
            .remove(user_id, book_id)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!("Error removing book {} from basket of user {}: {}", book_id, user_id, e);
                BasketServiceError::DatabaseError
            })
    }

    /// Returns the new cookie value.
    pub fn remove_guest_item(&self, cookie: Option<&str>, book_id: i32) -> Result<String, BasketServiceError> {
        let mut items = cookie_items(cookie)?;
        remove_cookie_item(&mut items, book_id);
        encode_basket_cookie(&items)
    }

    async fn ensure_addable(&self, book_id: i32, count: i32) -> Result<(), BasketServiceError> {
        if count < 1 {
            return Err(BasketServiceError::InvalidCount);
        }

        BookRepo::new()
            .get_active_by_id(book_id)
            .await
            .map_err(|_| BasketServiceError::DatabaseError)?
            .map(|_| ())
            .ok_or(BasketServiceError::BookNotFound)
    }

    async fn posters(&self, ids: &[i32]) -> Result<HashMap<i32, String>, BasketServiceError> {
        BookRepo::new().get_poster_names(ids).await.map_err(|e| {
            tracing::error!("Error loading poster images: {}", e);
            BasketServiceError::DatabaseError
        })
    }
}

impl Default for BasketService {
    fn default() -> Self {
        Self::new()
    }
}
