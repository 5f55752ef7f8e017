use super::dto::GenreView;
use super::mapper;
use super::model::Genre;
use crate::common::error::ServiceError;
use crate::common::validation::{validate_follower_count, validate_genre_name};
use crate::state::AppState;
use tracing::info;

pub struct GenreService;

impl GenreService {
    pub async fn create(state: &AppState, view: GenreView) -> Result<GenreView, ServiceError> {
        validate_genre_name(&view.name)?;
        validate_follower_count(view.follower_count)?;

        let mut uow = state.store.begin().await?;

        if uow.genres().exists_by_name(&view.name).await? {
            return Err(ServiceError::genre_name_taken(&view.name));
        }

        let genre = mapper::to_entity(&GenreView { id: None, ..view });
        let saved = uow.genres().save(genre).await?;
        uow.commit().await?;

        info!(genre_id = ?saved.id, name = %saved.name, "Genre created");
        Ok(mapper::to_view(&saved))
    }

    pub async fn find_all(state: &AppState) -> Result<Vec<GenreView>, ServiceError> {
        let mut uow = state.store.begin().await?;
        let genres = uow.genres().find_all().await?;

        Ok(genres.iter().map(mapper::to_view).collect())
    }

    pub async fn find_by_id(state: &AppState, id: i64) -> Result<GenreView, ServiceError> {
        let mut uow = state.store.begin().await?;
        let genre = uow
            .genres()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", id))?;

        Ok(mapper::to_view(&genre))
    }

    pub async fn update(
        state: &AppState,
        id: i64,
        view: GenreView,
    ) -> Result<GenreView, ServiceError> {
        validate_genre_name(&view.name)?;
        validate_follower_count(view.follower_count)?;

        let mut uow = state.store.begin().await?;
        let mut genre = uow
            .genres()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", id))?;

        // Keeping its own name is not a collision.
        if genre.name != view.name && uow.genres().exists_by_name(&view.name).await? {
            return Err(ServiceError::genre_name_taken(&view.name));
        }

        mapper::update_entity(&view, &mut genre);
        let saved = uow.genres().save(genre).await?;
        uow.commit().await?;

        info!(genre_id = id, name = %saved.name, "Genre updated");
        Ok(mapper::to_view(&saved))
    }

    /// Deletes the genre together with every movie that references it.
    pub async fn delete(state: &AppState, id: i64) -> Result<(), ServiceError> {
        let mut uow = state.store.begin().await?;

        if !uow.genres().exists_by_id(id).await? {
            return Err(ServiceError::not_found("Genre", id));
        }

        let dependents = uow.movies().find_by_genre_id(id).await?;
        for movie_id in dependents.iter().filter_map(|movie| movie.id) {
            uow.movies().delete_by_id(movie_id).await?;
        }
        uow.genres().delete_by_id(id).await?;
        uow.commit().await?;

        info!(genre_id = id, removed_movies = dependents.len(), "Genre deleted");
        Ok(())
    }

    pub async fn follow(state: &AppState, id: i64) -> Result<GenreView, ServiceError> {
        Self::adjust_followers(state, id, Genre::increment_follower_count).await
    }

    pub async fn unfollow(state: &AppState, id: i64) -> Result<GenreView, ServiceError> {
        Self::adjust_followers(state, id, Genre::decrement_follower_count).await
    }

    async fn adjust_followers(
        state: &AppState,
        id: i64,
        adjust: fn(&mut Genre),
    ) -> Result<GenreView, ServiceError> {
        let mut uow = state.store.begin().await?;
        let mut genre = uow
            .genres()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", id))?;

        adjust(&mut genre);
        let saved = uow.genres().save(genre).await?;
        uow.commit().await?;

        info!(genre_id = id, follower_count = saved.follower_count, "Genre followers changed");
        Ok(mapper::to_view(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::infrastructure::store::MemoryStore;
    use crate::modules::movie::model::Movie;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Arc::new(MemoryStore::new()))
    }

    async fn seed_movie(state: &AppState, title: &str, genre_id: i64) -> i64 {
        let mut uow = state.store.begin().await.unwrap();
        let movie = uow
            .movies()
            .save(Movie {
                id: None,
                title: title.to_string(),
                director: "Someone".to_string(),
                rating: 7.0,
                genre_id,
            })
            .await
            .unwrap();
        uow.commit().await.unwrap();
        movie.id.unwrap()
    }

    async fn movie_count(state: &AppState) -> usize {
        let mut uow = state.store.begin().await.unwrap();
        uow.movies().find_all().await.unwrap().len()
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let state = state();

        let created = GenreService::create(&state, GenreView::new("Action", 1000))
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));

        let fetched = GenreService::find_by_id(&state, 1).await.unwrap();
        assert_eq!(fetched, GenreView { id: Some(1), ..GenreView::new("Action", 1000) });
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let state = state();
        let view = GenreView {
            id: Some(42),
            ..GenreView::new("Drama", 5)
        };

        let created = GenreService::create(&state, view).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn duplicate_name_conflicts_and_keeps_one_genre() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 1)).await.unwrap();

        let err = GenreService::create(&state, GenreView::new("Action", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "Genre with name 'Action' already exists");

        let all = GenreService::find_all(&state).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].follower_count, 1);
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 1)).await.unwrap();

        assert!(GenreService::create(&state, GenreView::new("action", 1)).await.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_before_touching_the_store() {
        let state = state();

        let blank = GenreService::create(&state, GenreView::new("  ", 1)).await.unwrap_err();
        assert!(matches!(blank, ServiceError::Validation(_)));

        let negative = GenreService::create(&state, GenreView::new("Noir", -1))
            .await
            .unwrap_err();
        assert!(matches!(negative, ServiceError::Validation(_)));

        let long = GenreService::create(&state, GenreView::new("x".repeat(101), 0))
            .await
            .unwrap_err();
        assert!(matches!(long, ServiceError::Validation(_)));

        assert!(GenreService::find_all(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_genre() {
        let err = GenreService::find_by_id(&state(), 999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Genre not found with id: 999");
    }

    #[tokio::test]
    async fn find_all_lists_in_id_order() {
        let state = state();
        for name in ["Western", "Action", "Horror"] {
            GenreService::create(&state, GenreView::new(name, 0)).await.unwrap();
        }

        let names: Vec<String> = GenreService::find_all(&state)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Western", "Action", "Horror"]);
    }

    #[tokio::test]
    async fn update_keeping_own_name_is_not_a_conflict() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 10)).await.unwrap();

        let updated = GenreService::update(&state, 1, GenreView::new("Action", 20))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.follower_count, 20);
    }

    #[tokio::test]
    async fn update_to_another_genres_name_conflicts() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 10)).await.unwrap();
        GenreService::create(&state, GenreView::new("Drama", 10)).await.unwrap();

        let err = GenreService::update(&state, 2, GenreView::new("Action", 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let drama = GenreService::find_by_id(&state, 2).await.unwrap();
        assert_eq!(drama.name, "Drama");
    }

    #[tokio::test]
    async fn update_missing_genre_is_not_found() {
        let err = GenreService::update(&state(), 5, GenreView::new("Action", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_preserves_identifier() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 1000)).await.unwrap();

        let view = GenreView {
            id: Some(50),
            ..GenreView::new("Action/Adventure", 1500)
        };
        let updated = GenreService::update(&state, 1, view).await.unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name, "Action/Adventure");
        assert!(GenreService::find_by_id(&state, 50).await.is_err());
    }

    #[tokio::test]
    async fn delete_cascades_to_movies_of_that_genre_only() {
        let state = state();
        GenreService::create(&state, GenreView::new("Action", 0)).await.unwrap();
        GenreService::create(&state, GenreView::new("Drama", 0)).await.unwrap();
        seed_movie(&state, "Die Hard", 1).await;
        seed_movie(&state, "Speed", 1).await;
        let kept = seed_movie(&state, "Amadeus", 2).await;

        GenreService::delete(&state, 1).await.unwrap();

        assert!(GenreService::find_by_id(&state, 1).await.is_err());
        assert_eq!(movie_count(&state).await, 1);

        let mut uow = state.store.begin().await.unwrap();
        assert!(uow.movies().exists_by_id(kept).await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_genre_is_not_found() {
        let err = GenreService::delete(&state(), 3).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn follow_and_unfollow_adjust_count_with_floor_at_zero() {
        let state = state();
        GenreService::create(&state, GenreView::new("Anime", 0)).await.unwrap();

        let followed = GenreService::follow(&state, 1).await.unwrap();
        assert_eq!(followed.follower_count, 1);

        GenreService::unfollow(&state, 1).await.unwrap();
        let floored = GenreService::unfollow(&state, 1).await.unwrap();
        assert_eq!(floored.follower_count, 0);

        let err = GenreService::follow(&state, 9).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
