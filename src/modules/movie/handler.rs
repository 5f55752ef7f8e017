use crate::common::extract::ValidatedJson;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::movie::dto::{MovieSearchQuery, MovieView};
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = MovieView,
    responses(
        (status = 201, description = "Movie Created", body = ApiResponse<MovieView>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Genre Not Found")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MovieView>,
) -> impl IntoResponse {
    match MovieService::create(&state, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie created successfully"), StatusCode::CREATED).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies",
    responses(
        (status = 200, description = "List Movies", body = ApiResponse<Vec<MovieView>>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::find_all(&state).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/search",
    params(MovieSearchQuery),
    responses(
        (status = 200, description = "Matching Movies", body = ApiResponse<Vec<MovieView>>)
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieSearchQuery>,
) -> impl IntoResponse {
    match MovieService::search(&state, query).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/genre/{genre_id}",
    params(
        ("genre_id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Movies of the Genre", body = ApiResponse<Vec<MovieView>>),
        (status = 404, description = "Genre Not Found")
    ),
    tag = "Movies"
)]
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<i64>,
) -> impl IntoResponse {
    match MovieService::find_by_genre(&state, genre_id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Get Movie", body = ApiResponse<MovieView>),
        (status = 404, description = "Movie Not Found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MovieService::find_by_id(&state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = MovieView,
    responses(
        (status = 200, description = "Movie Updated", body = ApiResponse<MovieView>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Movie or Genre Not Found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<MovieView>,
) -> impl IntoResponse {
    match MovieService::update(&state, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie updated successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie Deleted"),
        (status = 404, description = "Movie Not Found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MovieService::delete(&state, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
