use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{Postgres, Transaction};

use super::{GenreStore, MovieStore, Store, StoreError, UnitOfWork};
use crate::infrastructure::db::pool::DbPool;
use crate::modules::genre::model::Genre;
use crate::modules::genre::repository::GenreRepository;
use crate::modules::movie::model::Movie;
use crate::modules::movie::repository::MovieRepository;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let classified = err
            .as_database_error()
            .map(|db_err| (db_err.kind(), db_err.message().to_string()));

        match classified {
            Some((ErrorKind::UniqueViolation, message)) => StoreError::UniqueViolation(message),
            Some((ErrorKind::ForeignKeyViolation, message)) => {
                StoreError::ForeignKeyViolation(message)
            }
            Some((ErrorKind::CheckViolation, message)) => StoreError::CheckViolation(message),
            _ => StoreError::Database(err),
        }
    }
}

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

/// One database transaction; sqlx rolls it back when dropped uncommitted.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn genres(&mut self) -> &mut dyn GenreStore {
        self
    }

    fn movies(&mut self) -> &mut dyn MovieStore {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl GenreStore for PgUnitOfWork {
    async fn save(&mut self, genre: Genre) -> Result<Genre, StoreError> {
        match genre.id {
            None => Ok(GenreRepository::create(&mut self.tx, &genre.name, genre.follower_count).await?),
            Some(id) => GenreRepository::update(&mut self.tx, id, &genre.name, genre.follower_count)
                .await?
                .ok_or_else(|| StoreError::MissingRow(format!("Genre not found with id: {}", id))),
        }
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Genre>, StoreError> {
        Ok(GenreRepository::find_by_id(&mut self.tx, id).await?)
    }

    async fn find_all(&mut self) -> Result<Vec<Genre>, StoreError> {
        Ok(GenreRepository::find_all(&mut self.tx).await?)
    }

    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError> {
        Ok(GenreRepository::exists_by_id(&mut self.tx, id).await?)
    }

    async fn exists_by_name(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(GenreRepository::exists_by_name(&mut self.tx, name).await?)
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        GenreRepository::delete(&mut self.tx, id).await?;
        Ok(())
    }
}

#[async_trait]
impl MovieStore for PgUnitOfWork {
    async fn save(&mut self, movie: Movie) -> Result<Movie, StoreError> {
        match movie.id {
            None => Ok(MovieRepository::create(&mut self.tx, &movie).await?),
            Some(id) => MovieRepository::update(&mut self.tx, id, &movie)
                .await?
                .ok_or_else(|| StoreError::MissingRow(format!("Movie not found with id: {}", id))),
        }
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Movie>, StoreError> {
        Ok(MovieRepository::find_by_id(&mut self.tx, id).await?)
    }

    async fn find_all(&mut self) -> Result<Vec<Movie>, StoreError> {
        Ok(MovieRepository::list_movies(&mut self.tx).await?)
    }

    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError> {
        Ok(MovieRepository::exists_by_id(&mut self.tx, id).await?)
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        MovieRepository::delete(&mut self.tx, id).await?;
        Ok(())
    }

    async fn find_by_genre_id(&mut self, genre_id: i64) -> Result<Vec<Movie>, StoreError> {
        Ok(MovieRepository::find_by_genre_id(&mut self.tx, genre_id).await?)
    }

    async fn find_by_title_containing(&mut self, title: &str) -> Result<Vec<Movie>, StoreError> {
        Ok(MovieRepository::search_by_title(&mut self.tx, title).await?)
    }

    async fn find_by_director_containing(
        &mut self,
        director: &str,
    ) -> Result<Vec<Movie>, StoreError> {
        Ok(MovieRepository::search_by_director(&mut self.tx, director).await?)
    }
}
