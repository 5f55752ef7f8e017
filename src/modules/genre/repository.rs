use super::model::Genre;
use sqlx::PgConnection;

pub struct GenreRepository;

impl GenreRepository {
    pub async fn create(
        conn: &mut PgConnection,
        name: &str,
        follower_count: i32,
    ) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name, follower_count)
            VALUES ($1, $2)
            RETURNING id, name, follower_count
            "#,
        )
        .bind(name)
        .bind(follower_count)
        .fetch_one(conn)
        .await
    }

    pub async fn find_all(conn: &mut PgConnection) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name, follower_count
            FROM genres
            ORDER BY id ASC
            "#,
        )
        .fetch_all(conn)
        .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name, follower_count
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn exists_by_id(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(conn)
            .await
    }

    pub async fn exists_by_name(conn: &mut PgConnection, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM genres WHERE name = $1)")
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// `None` when no row has that id.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        name: &str,
        follower_count: i32,
    ) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET
                name = $1,
                follower_count = $2
            WHERE id = $3
            RETURNING id, name, follower_count
            "#,
        )
        .bind(name)
        .bind(follower_count)
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }
}
