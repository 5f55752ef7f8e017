use super::model::Movie;
use sqlx::PgConnection;

pub struct MovieRepository;

impl MovieRepository {
    pub async fn create(conn: &mut PgConnection, movie: &Movie) -> Result<Movie, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, director, rating, genre_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, director, rating, genre_id
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.rating)
        .bind(movie.genre_id)
        .fetch_one(conn)
        .await
    }

    /// `None` when no row has that id.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        movie: &Movie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET
                title = $1,
                director = $2,
                rating = $3,
                genre_id = $4
            WHERE id = $5
            RETURNING id, title, director, rating, genre_id
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.rating)
        .bind(movie.genre_id)
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, rating, genre_id FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn list_movies(conn: &mut PgConnection) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, rating, genre_id FROM movies ORDER BY id ASC",
        )
        .fetch_all(conn)
        .await
    }

    pub async fn exists_by_id(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(conn)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_genre_id(
        conn: &mut PgConnection,
        genre_id: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, rating, genre_id
            FROM movies
            WHERE genre_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(genre_id)
        .fetch_all(conn)
        .await
    }

    pub async fn search_by_title(
        conn: &mut PgConnection,
        title: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, rating, genre_id
            FROM movies
            WHERE title ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(like_pattern(title))
        .fetch_all(conn)
        .await
    }

    pub async fn search_by_director(
        conn: &mut PgConnection,
        director: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, rating, genre_id
            FROM movies
            WHERE director ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(like_pattern(director))
        .fetch_all(conn)
        .await
    }
}

/// Escapes LIKE metacharacters and wraps the term for a substring match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("matrix"), "%matrix%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
