use super::dto::{MovieSearchQuery, MovieView};
use super::mapper;
use super::model::Movie;
use crate::common::error::{MappingError, ServiceError};
use crate::common::validation::{validate_not_blank, validate_rating};
use crate::infrastructure::store::UnitOfWork;
use crate::modules::genre::model::Genre;
use crate::state::AppState;
use std::collections::HashMap;
use tracing::info;

pub struct MovieService;

impl MovieService {
    fn validate(view: &MovieView) -> Result<(), ServiceError> {
        validate_not_blank("Movie title", &view.title)?;
        validate_not_blank("Director name", &view.director)?;
        validate_rating(view.rating)?;
        Ok(())
    }

    async fn resolve_genre(uow: &mut dyn UnitOfWork, genre_id: i64) -> Result<Genre, ServiceError> {
        uow.genres()
            .find_by_id(genre_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", genre_id))
    }

    /// Maps movies that may span several genres, loading each genre once.
    async fn to_views(
        uow: &mut dyn UnitOfWork,
        movies: &[Movie],
    ) -> Result<Vec<MovieView>, ServiceError> {
        let genres: HashMap<i64, Genre> = uow
            .genres()
            .find_all()
            .await?
            .into_iter()
            .filter_map(|genre| genre.id.map(|id| (id, genre)))
            .collect();

        movies
            .iter()
            .map(|movie| -> Result<MovieView, ServiceError> {
                let genre = genres.get(&movie.genre_id).ok_or_else(|| {
                    MappingError(format!(
                        "Movie {:?} references missing genre {}",
                        movie.id, movie.genre_id
                    ))
                })?;
                Ok(mapper::to_view(movie, genre)?)
            })
            .collect()
    }

    pub async fn create(state: &AppState, view: MovieView) -> Result<MovieView, ServiceError> {
        Self::validate(&view)?;

        let mut uow = state.store.begin().await?;
        let genre = Self::resolve_genre(&mut *uow, view.genre_id).await?;

        let movie = mapper::to_entity(&MovieView { id: None, ..view }, &genre)?;
        let saved = uow.movies().save(movie).await?;
        let created = mapper::to_view(&saved, &genre)?;
        uow.commit().await?;

        info!(movie_id = ?created.id, genre_id = created.genre_id, "Movie created");
        Ok(created)
    }

    pub async fn find_all(state: &AppState) -> Result<Vec<MovieView>, ServiceError> {
        let mut uow = state.store.begin().await?;
        let movies = uow.movies().find_all().await?;

        Self::to_views(&mut *uow, &movies).await
    }

    pub async fn find_by_id(state: &AppState, id: i64) -> Result<MovieView, ServiceError> {
        let mut uow = state.store.begin().await?;
        let movie = uow
            .movies()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Movie", id))?;
        let genre = Self::resolve_genre(&mut *uow, movie.genre_id).await?;

        Ok(mapper::to_view(&movie, &genre)?)
    }

    pub async fn find_by_genre(
        state: &AppState,
        genre_id: i64,
    ) -> Result<Vec<MovieView>, ServiceError> {
        let mut uow = state.store.begin().await?;
        let genre = Self::resolve_genre(&mut *uow, genre_id).await?;
        let movies = uow.movies().find_by_genre_id(genre_id).await?;

        movies
            .iter()
            .map(|movie| mapper::to_view(movie, &genre).map_err(ServiceError::from))
            .collect()
    }

    /// Blank filters are ignored; with no filters every movie matches.
    pub async fn search(
        state: &AppState,
        query: MovieSearchQuery,
    ) -> Result<Vec<MovieView>, ServiceError> {
        let title = query.title.as_deref().map(str::trim).filter(|t| !t.is_empty());
        let director = query
            .director
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        let mut uow = state.store.begin().await?;
        let movies: Vec<Movie> = match (title, director) {
            (Some(title), Some(director)) => {
                let director = director.to_lowercase();
                uow.movies()
                    .find_by_title_containing(title)
                    .await?
                    .into_iter()
                    .filter(|movie| movie.director.to_lowercase().contains(&director))
                    .collect()
            }
            (Some(title), None) => uow.movies().find_by_title_containing(title).await?,
            (None, Some(director)) => uow.movies().find_by_director_containing(director).await?,
            (None, None) => uow.movies().find_all().await?,
        };

        Self::to_views(&mut *uow, &movies).await
    }

    pub async fn update(
        state: &AppState,
        id: i64,
        view: MovieView,
    ) -> Result<MovieView, ServiceError> {
        Self::validate(&view)?;

        let mut uow = state.store.begin().await?;
        let mut movie = uow
            .movies()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Movie", id))?;
        let genre = Self::resolve_genre(&mut *uow, view.genre_id).await?;

        mapper::update_entity(&view, &mut movie, &genre)?;
        let saved = uow.movies().save(movie).await?;
        let updated = mapper::to_view(&saved, &genre)?;
        uow.commit().await?;

        info!(movie_id = id, genre_id = updated.genre_id, "Movie updated");
        Ok(updated)
    }

    pub async fn delete(state: &AppState, id: i64) -> Result<(), ServiceError> {
        let mut uow = state.store.begin().await?;

        if !uow.movies().exists_by_id(id).await? {
            return Err(ServiceError::not_found("Movie", id));
        }

        uow.movies().delete_by_id(id).await?;
        uow.commit().await?;

        info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}
