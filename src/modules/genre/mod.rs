use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_genres).post(handler::create_genre))
        .route(
            "/{id}",
            get(handler::get_genre)
                .put(handler::update_genre)
                .delete(handler::delete_genre),
        )
        .route("/{id}/follow", post(handler::follow_genre))
        .route("/{id}/unfollow", post(handler::unfollow_genre))
}
