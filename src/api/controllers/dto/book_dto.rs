use crate::data::models::book::{Book, BookImage};
use crate::data::repos::implementors::book_repo::BookDetails;
use crate::services::pricing::Priced;
use bigdecimal::BigDecimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct BookSummaryResponse {
    pub id: i32,
    pub name: String,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub price: BigDecimal,
    pub stock_status: bool,
    pub poster_image: Option<String>,
}

impl From<(Book, Option<String>)> for BookSummaryResponse {
    fn from((book, poster_image): (Book, Option<String>)) -> Self {
        Self {
            id: book.id,
            price: book.effective_price(),
            name: book.name,
            sale_price: book.sale_price,
            discount_percent: book.discount_percent,
            stock_status: book.stock_status,
            poster_image,
        }
    }
}

#[derive(Serialize)]
pub struct BookImageResponse {
    pub name: String,
    pub poster_status: Option<bool>,
}

impl From<BookImage> for BookImageResponse {
    fn from(image: BookImage) -> Self {
        Self {
            name: image.name,
            poster_status: image.poster_status,
        }
    }
}

#[derive(Serialize)]
pub struct BookDetailsResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub tags: Vec<String>,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub price: BigDecimal,
    pub stock_status: bool,
    pub images: Vec<BookImageResponse>,
}

impl From<BookDetails> for BookDetailsResponse {
    fn from(details: BookDetails) -> Self {
        let BookDetails {
            book,
            author,
            genre,
            tags,
            images,
        } = details;

        Self {
            id: book.id,
            price: book.effective_price(),
            name: book.name,
            description: book.description,
            author: author.full_name,
            genre: genre.name,
            tags: tags.into_iter().map(|t| t.name).collect(),
            sale_price: book.sale_price,
            discount_percent: book.discount_percent,
            stock_status: book.stock_status,
            images: images.into_iter().map(BookImageResponse::from).collect(),
        }
    }
}
