//! Persistence seam for the catalog.
//!
//! Every service operation opens one [`UnitOfWork`] through [`Store::begin`],
//! performs all of its reads and writes through it and calls
//! [`UnitOfWork::commit`] as its last step. A unit of work that is dropped
//! without being committed is rolled back.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::genre::model::Genre;
use crate::modules::movie::model::Movie;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    UniqueViolation(String),

    #[error("{0}")]
    ForeignKeyViolation(String),

    #[error("{0}")]
    CheckViolation(String),

    /// An update addressed a row that does not exist.
    #[error("{0}")]
    MissingRow(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

#[async_trait]
pub trait GenreStore: Send {
    /// Inserts when `genre.id` is `None`, otherwise updates the row with that id.
    async fn save(&mut self, genre: Genre) -> Result<Genre, StoreError>;
    async fn find_by_id(&mut self, id: i64) -> Result<Option<Genre>, StoreError>;
    /// Ordered by id ascending.
    async fn find_all(&mut self) -> Result<Vec<Genre>, StoreError>;
    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError>;
    async fn exists_by_name(&mut self, name: &str) -> Result<bool, StoreError>;
    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
pub trait MovieStore: Send {
    /// Inserts when `movie.id` is `None`, otherwise updates the row with that id.
    async fn save(&mut self, movie: Movie) -> Result<Movie, StoreError>;
    async fn find_by_id(&mut self, id: i64) -> Result<Option<Movie>, StoreError>;
    async fn find_all(&mut self) -> Result<Vec<Movie>, StoreError>;
    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError>;
    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError>;
    async fn find_by_genre_id(&mut self, genre_id: i64) -> Result<Vec<Movie>, StoreError>;
    /// Case-insensitive substring match.
    async fn find_by_title_containing(&mut self, title: &str) -> Result<Vec<Movie>, StoreError>;
    /// Case-insensitive substring match.
    async fn find_by_director_containing(
        &mut self,
        director: &str,
    ) -> Result<Vec<Movie>, StoreError>;
}

#[async_trait]
pub trait UnitOfWork: Send {
    fn genres(&mut self) -> &mut dyn GenreStore;
    fn movies(&mut self) -> &mut dyn MovieStore;
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError>;
}
