use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{GenreStore, MovieStore, Store, StoreError, UnitOfWork};
use crate::modules::genre::model::Genre;
use crate::modules::movie::model::Movie;

#[derive(Debug, Clone, Default)]
struct Tables {
    genres: BTreeMap<i64, Genre>,
    movies: BTreeMap<i64, Movie>,
    genre_seq: i64,
    movie_seq: i64,
}

/// Process-local store with the same constraints as the PostgreSQL schema:
/// unique genre names, non-negative follower counts, ratings in range and a
/// restricting foreign key from movies to genres.
///
/// Units of work are serialized; each one edits a staged copy of the tables
/// that replaces the shared copy on commit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryUnitOfWork { guard, staged }))
    }
}

pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn genres(&mut self) -> &mut dyn GenreStore {
        self
    }

    fn movies(&mut self) -> &mut dyn MovieStore {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let MemoryUnitOfWork { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl GenreStore for MemoryUnitOfWork {
    async fn save(&mut self, mut genre: Genre) -> Result<Genre, StoreError> {
        let tables = &mut self.staged;

        if genre.follower_count < 0 {
            return Err(StoreError::CheckViolation(
                "Follower count cannot be negative".to_string(),
            ));
        }

        let name_taken = tables
            .genres
            .values()
            .any(|other| other.name == genre.name && other.id != genre.id);
        if name_taken {
            return Err(StoreError::UniqueViolation(format!(
                "Genre with name '{}' already exists",
                genre.name
            )));
        }

        let id = match genre.id {
            Some(id) if tables.genres.contains_key(&id) => id,
            Some(id) => {
                return Err(StoreError::MissingRow(format!(
                    "Genre not found with id: {}",
                    id
                )));
            }
            None => {
                tables.genre_seq += 1;
                tables.genre_seq
            }
        };

        genre.id = Some(id);
        tables.genres.insert(id, genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Genre>, StoreError> {
        Ok(self.staged.genres.get(&id).cloned())
    }

    async fn find_all(&mut self) -> Result<Vec<Genre>, StoreError> {
        Ok(self.staged.genres.values().cloned().collect())
    }

    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError> {
        Ok(self.staged.genres.contains_key(&id))
    }

    async fn exists_by_name(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.staged.genres.values().any(|genre| genre.name == name))
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        let referenced = self
            .staged
            .movies
            .values()
            .any(|movie| movie.genre_id == id);
        if referenced {
            return Err(StoreError::ForeignKeyViolation(format!(
                "Genre {} is still referenced by movies",
                id
            )));
        }

        self.staged.genres.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl MovieStore for MemoryUnitOfWork {
    async fn save(&mut self, mut movie: Movie) -> Result<Movie, StoreError> {
        let tables = &mut self.staged;

        if !(0.0..=10.0).contains(&movie.rating) {
            return Err(StoreError::CheckViolation(
                "Rating must be between 0.0 and 10.0".to_string(),
            ));
        }

        if !tables.genres.contains_key(&movie.genre_id) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "Genre not found with id: {}",
                movie.genre_id
            )));
        }

        let id = match movie.id {
            Some(id) if tables.movies.contains_key(&id) => id,
            Some(id) => {
                return Err(StoreError::MissingRow(format!(
                    "Movie not found with id: {}",
                    id
                )));
            }
            None => {
                tables.movie_seq += 1;
                tables.movie_seq
            }
        };

        movie.id = Some(id);
        tables.movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Movie>, StoreError> {
        Ok(self.staged.movies.get(&id).cloned())
    }

    async fn find_all(&mut self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.staged.movies.values().cloned().collect())
    }

    async fn exists_by_id(&mut self, id: i64) -> Result<bool, StoreError> {
        Ok(self.staged.movies.contains_key(&id))
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        self.staged.movies.remove(&id);
        Ok(())
    }

    async fn find_by_genre_id(&mut self, genre_id: i64) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .staged
            .movies
            .values()
            .filter(|movie| movie.genre_id == genre_id)
            .cloned()
            .collect())
    }

    async fn find_by_title_containing(&mut self, title: &str) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .staged
            .movies
            .values()
            .filter(|movie| contains_ignore_case(&movie.title, title))
            .cloned()
            .collect())
    }

    async fn find_by_director_containing(
        &mut self,
        director: &str,
    ) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .staged
            .movies
            .values()
            .filter(|movie| contains_ignore_case(&movie.director, director))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, director: &str, genre_id: i64) -> Movie {
        Movie {
            id: None,
            title: title.to_string(),
            director: director.to_string(),
            rating: 8.0,
            genre_id,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_and_commits() {
        let store = MemoryStore::new();

        let mut uow = store.begin().await.unwrap();
        let action = uow.genres().save(Genre::new("Action", 10)).await.unwrap();
        let drama = uow.genres().save(Genre::new("Drama", 0)).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(action.id, Some(1));
        assert_eq!(drama.id, Some(2));

        let mut uow = store.begin().await.unwrap();
        let names: Vec<String> = uow
            .genres()
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Action", "Drama"]);
    }

    #[tokio::test]
    async fn dropped_unit_of_work_rolls_back() {
        let store = MemoryStore::new();

        {
            let mut uow = store.begin().await.unwrap();
            uow.genres().save(Genre::new("Horror", 3)).await.unwrap();
        }

        let mut uow = store.begin().await.unwrap();
        assert!(!uow.genres().exists_by_name("Horror").await.unwrap());
        assert!(uow.genres().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_duplicate_genre_names() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        uow.genres().save(Genre::new("Action", 0)).await.unwrap();

        let err = uow.genres().save(Genre::new("Action", 5)).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn genre_may_keep_its_own_name_on_update() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        let mut genre = uow.genres().save(Genre::new("Action", 0)).await.unwrap();

        genre.follower_count = 7;
        let saved = uow.genres().save(genre).await.unwrap();
        assert_eq!(saved.follower_count, 7);
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn movie_requires_existing_genre() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();

        let err = uow.movies().save(movie("Alien", "Scott", 42)).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation(_)));
    }

    #[tokio::test]
    async fn referenced_genre_cannot_be_deleted() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        let genre = uow.genres().save(Genre::new("Sci-Fi", 0)).await.unwrap();
        let genre_id = genre.id.unwrap();
        uow.movies().save(movie("Alien", "Scott", genre_id)).await.unwrap();

        let err = uow.genres().delete_by_id(genre_id).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation(_)));
    }

    #[tokio::test]
    async fn searches_ignore_case() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        let genre_id = uow
            .genres()
            .save(Genre::new("Sci-Fi", 0))
            .await
            .unwrap()
            .id
            .unwrap();
        uow.movies().save(movie("The Matrix", "Wachowski", genre_id)).await.unwrap();
        uow.movies().save(movie("Alien", "Ridley Scott", genre_id)).await.unwrap();

        let by_title = uow.movies().find_by_title_containing("MATRIX").await.unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "The Matrix");

        let by_director = uow.movies().find_by_director_containing("scott").await.unwrap();
        assert_eq!(by_director.len(), 1);
        assert_eq!(by_director[0].title, "Alien");
    }

    #[tokio::test]
    async fn update_of_unknown_row_is_reported() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        let mut genre = Genre::new("Western", 0);
        genre.id = Some(99);

        let err = uow.genres().save(genre).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingRow(_)));
    }
}
