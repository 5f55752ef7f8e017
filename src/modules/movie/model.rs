use sqlx::FromRow;

/// Persisted movie. The genre is held as a plain foreign key; resolve it
/// through the store when the genre itself is needed.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: Option<i64>,
    pub title: String,
    pub director: String,
    pub rating: f64,
    pub genre_id: i64,
}
