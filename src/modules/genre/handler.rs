use super::dto::GenreView;
use super::service::GenreService;
use crate::common::extract::ValidatedJson;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreView>>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(&state).await {
        Ok(genres) => ApiSuccess(
            ApiResponse::success(genres, "Genres retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = GenreView,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreView>),
        (status = 400, description = "Invalid body or name already taken")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenreView>,
) -> impl IntoResponse {
    match GenreService::create(&state, payload).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = ApiResponse<GenreView>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GenreService::find_by_id(&state, id).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Update genre
#[utoipa::path(
    put,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    request_body = GenreView,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreView>),
        (status = 400, description = "Invalid body or name already taken"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<GenreView>,
) -> impl IntoResponse {
    match GenreService::update(&state, id, payload).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Delete genre and every movie in it
#[utoipa::path(
    delete,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre and its movies deleted"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GenreService::delete(&state, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Follow a genre
#[utoipa::path(
    post,
    path = "/api/v1/genres/{id}/follow",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Follower count incremented", body = ApiResponse<GenreView>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn follow_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GenreService::follow(&state, id).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre followed successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Unfollow a genre
#[utoipa::path(
    post,
    path = "/api/v1/genres/{id}/unfollow",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Follower count decremented", body = ApiResponse<GenreView>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn unfollow_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GenreService::unfollow(&state, id).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre unfollowed successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
