use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::validation::not_blank;

/// Transfer form of a movie. `genre_name` is filled in from the referenced
/// genre on the way out and ignored on the way in, as is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(custom(function = "not_blank", message = "Movie title cannot be blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Director name cannot be blank"))]
    pub director: String,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0.0 and 10.0"))]
    pub rating: f64,
    pub genre_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
}

impl MovieView {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        rating: f64,
        genre_id: i64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            director: director.into(),
            rating,
            genre_id,
            genre_name: None,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the director's name
    pub director: Option<String>,
}
