//! Conversions between [`Movie`] and [`MovieView`].
//!
//! A movie only stores its genre's id, so every conversion takes the resolved
//! [`Genre`] from the caller. The mapper never looks genres up itself.

use super::dto::MovieView;
use super::model::Movie;
use crate::common::error::MappingError;
use crate::modules::genre::model::Genre;

fn persisted_genre_id(genre: &Genre) -> Result<i64, MappingError> {
    genre.id.ok_or_else(|| {
        MappingError(format!(
            "Genre '{}' must be persisted before a movie can reference it",
            genre.name
        ))
    })
}

pub fn to_view(movie: &Movie, genre: &Genre) -> Result<MovieView, MappingError> {
    if genre.id != Some(movie.genre_id) {
        return Err(MappingError(format!(
            "Movie {:?} references genre {} but genre {:?} was supplied",
            movie.id, movie.genre_id, genre.id
        )));
    }

    Ok(MovieView {
        id: movie.id,
        title: movie.title.clone(),
        director: movie.director.clone(),
        rating: movie.rating,
        genre_id: movie.genre_id,
        genre_name: Some(genre.name.clone()),
    })
}

pub fn to_entity(view: &MovieView, genre: &Genre) -> Result<Movie, MappingError> {
    Ok(Movie {
        id: view.id,
        title: view.title.clone(),
        director: view.director.clone(),
        rating: view.rating,
        genre_id: persisted_genre_id(genre)?,
    })
}

/// Replaces title, director, rating and genre; `movie.id` is left alone.
pub fn update_entity(view: &MovieView, movie: &mut Movie, genre: &Genre) -> Result<(), MappingError> {
    let genre_id = persisted_genre_id(genre)?;

    movie.title = view.title.clone();
    movie.director = view.director.clone();
    movie.rating = view.rating;
    movie.genre_id = genre_id;
    Ok(())
}
