use sqlx::FromRow;

/// Persisted genre. `id` is `None` until the store has assigned one.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Genre {
    pub id: Option<i64>,
    pub name: String,
    pub follower_count: i32,
}

impl Genre {
    pub fn new(name: impl Into<String>, follower_count: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            follower_count,
        }
    }

    pub fn increment_follower_count(&mut self) {
        self.follower_count = self.follower_count.saturating_add(1);
    }

    /// Never goes below zero.
    pub fn decrement_follower_count(&mut self) {
        if self.follower_count > 0 {
            self.follower_count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_count_moves_by_one() {
        let mut genre = Genre::new("Drama", 1);
        genre.increment_follower_count();
        assert_eq!(genre.follower_count, 2);
        genre.decrement_follower_count();
        genre.decrement_follower_count();
        assert_eq!(genre.follower_count, 0);
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut genre = Genre::new("Drama", 0);
        genre.decrement_follower_count();
        assert_eq!(genre.follower_count, 0);
    }
}
