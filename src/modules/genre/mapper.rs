//! Conversions between [`Genre`] and [`GenreView`].

use super::dto::GenreView;
use super::model::Genre;

pub fn to_view(genre: &Genre) -> GenreView {
    GenreView {
        id: genre.id,
        name: genre.name.clone(),
        follower_count: genre.follower_count,
    }
}

pub fn to_entity(view: &GenreView) -> Genre {
    Genre {
        id: view.id,
        name: view.name.clone(),
        follower_count: view.follower_count,
    }
}

/// Copies the mutable fields; `genre.id` is left alone.
pub fn update_entity(view: &GenreView, genre: &mut Genre) {
    genre.name = view.name.clone();
    genre.follower_count = view.follower_count;
}
