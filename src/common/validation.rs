use thiserror::Error;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;
pub const MIN_FOLLOWERS: i32 = 0;
pub const MAX_GENRE_NAME_LENGTH: usize = 100;

/// A single field value that breaks one of the catalog's field rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub fn validate_rating(rating: f64) -> Result<f64, ValidationError> {
    // `contains` is false for NaN as well
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::new(format!(
            "Rating must be between {:.1} and {:.1}",
            MIN_RATING, MAX_RATING
        )));
    }

    Ok(rating)
}

pub fn validate_genre_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Genre name cannot be empty"));
    }

    if name.chars().count() > MAX_GENRE_NAME_LENGTH {
        return Err(ValidationError::new(format!(
            "Genre name cannot exceed {} characters",
            MAX_GENRE_NAME_LENGTH
        )));
    }

    Ok(name)
}

pub fn validate_follower_count(count: i32) -> Result<i32, ValidationError> {
    if count < MIN_FOLLOWERS {
        return Err(ValidationError::new("Follower count cannot be negative"));
    }

    Ok(count)
}

/// Rejects empty and whitespace-only text. `label` names the field in the
/// error, e.g. "Movie title".
pub fn validate_not_blank<'a>(label: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{} cannot be blank", label)));
    }

    Ok(value)
}

/// Adapter for `#[validate(custom(function = ...))]` on request DTOs.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
