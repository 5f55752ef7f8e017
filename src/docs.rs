use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::genre::handler::follow_genre,
        crate::modules::genre::handler::unfollow_genre,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::search_movies,
        crate::modules::movie::handler::list_movies_by_genre,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::genre::dto::GenreView,
            crate::modules::movie::dto::MovieView,
        )
    ),
    tags(
        (name = "Genres", description = "Genre management"),
        (name = "Movies", description = "Movie management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/v1/genres",
            "/api/v1/genres/{id}",
            "/api/v1/genres/{id}/follow",
            "/api/v1/genres/{id}/unfollow",
            "/api/v1/movies",
            "/api/v1/movies/search",
            "/api/v1/movies/genre/{genre_id}",
            "/api/v1/movies/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
