use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::not_blank;

/// Transfer form of a genre, used for request bodies and responses alike.
/// `id` is ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(
        custom(function = "not_blank", message = "Genre name cannot be blank"),
        length(max = 100, message = "Genre name cannot exceed 100 characters")
    )]
    pub name: String,
    #[validate(range(min = 0, message = "Follower count must be non-negative"))]
    pub follower_count: i32,
}

impl GenreView {
    pub fn new(name: impl Into<String>, follower_count: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            follower_count,
        }
    }
}
