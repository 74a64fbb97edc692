use crate::data::database::connect;
use crate::data::models::author::Author;
use crate::data::models::book::{Book, BookImage, NewBook, UpdateBook};
use crate::data::models::genre::Genre;
use crate::data::models::schema::{authors, book_images, book_tags, books, genres, tags};
use crate::data::models::tag::Tag;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::collections::HashMap;

/// A book together with everything the detail page shows.
#[derive(Debug, Clone)]
pub struct BookDetails {
    pub book: Book,
    pub author: Author,
    pub genre: Genre,
    pub tags: Vec<Tag>,
    pub images: Vec<BookImage>,
}

pub struct BookRepo {}

impl BookRepo {
    pub fn new() -> Self {
        BookRepo {}
    }

    /// Loads the non-deleted books among `ids`. Missing and soft-deleted ids are absent from the map.
    pub async fn get_active_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Book>, result::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = connect().await?;

        let found = books::table
            .filter(books::id.eq_any(ids))
            .filter(books::is_deleted.eq(false))
            .select(Book::as_select())
            .load(&mut conn)
            .await?;

        Ok(found.into_iter().map(|b| (b.id, b)).collect())
    }

    pub async fn get_active_by_id(&self, id: i32) -> Result<Option<Book>, result::Error> {
        let mut conn = connect().await?;

        books::table
            .find(id)
            .filter(books::is_deleted.eq(false))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Poster image name per book, for the books among `ids` that have one.
    pub async fn get_poster_names(&self, ids: &[i32]) -> Result<HashMap<i32, String>, result::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = connect().await?;

        let posters = book_images::table
            .filter(book_images::book_id.eq_any(ids))
            .filter(book_images::poster_status.eq(true))
            .select(BookImage::as_select())
            .load(&mut conn)
            .await?;

        Ok(posters.into_iter().map(|i| (i.book_id, i.name)).collect())
    }

    pub async fn get_details(&self, id: i32) -> Result<Option<BookDetails>, result::Error> {
        let mut conn = connect().await?;

        let found = books::table
            .inner_join(authors::table)
            .inner_join(genres::table)
            .filter(books::id.eq(id))
            .filter(books::is_deleted.eq(false))
            .select((Book::as_select(), Author::as_select(), Genre::as_select()))
            .first::<(Book, Author, Genre)>(&mut conn)
            .await
            .optional()?;

        let Some((book, author, genre)) = found else {
            return Ok(None);
        };

        let book_tag_list = book_tags::table
            .inner_join(tags::table)
            .filter(book_tags::book_id.eq(book.id))
            .select(Tag::as_select())
            .load(&mut conn)
            .await?;

        let images = book_images::table
            .filter(book_images::book_id.eq(book.id))
            .select(BookImage::as_select())
            .order(book_images::id.asc())
            .load(&mut conn)
            .await?;

        Ok(Some(BookDetails {
            book,
            author,
            genre,
            tags: book_tag_list,
            images,
        }))
    }
}

#[async_trait]
impl Repository for BookRepo {
    type Id = i32;
    type Item = Book;
    type NewItem<'a> = NewBook<'a>;
    type UpdateForm<'a> = UpdateBook<'a>;

    /// Non-deleted books, newest first.
    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        let mut conn = connect().await?;

        match books::table
            .filter(books::is_deleted.eq(false))
            .order(books::id.desc())
            .select(Book::as_select())
            .load(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Includes soft-deleted books; use `get_active_by_id` for catalog lookups.
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        let mut conn = connect().await?;

        books::table
            .find(id)
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::insert_into(books::table)
            .values(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::update(books::table.find(id))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Soft delete: the row stays so order history keeps its book reference.
    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::update(books::table.find(id))
            .set(books::is_deleted.eq(true))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for BookRepo {
    fn default() -> Self {
        Self::new()
    }
}
