pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::endorsements::handlers as endorsements;
use crate::ranking::handlers as ranking;
use crate::state::AppState;
use crate::talents::handlers as talents;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Talents & tokens
        .route("/api/talents", get(talents::handle_list_talents))
        .route("/api/talents/ranked", get(ranking::handle_ranked))
        .route("/api/talents/:id", patch(talents::handle_update_profile))
        .route("/api/talents/:id/tokens", get(talents::handle_get_token))
        .route(
            "/api/investments/:user_id",
            get(talents::handle_get_investments),
        )
        // Endorsements
        .route(
            "/api/talents/:id/endorsements",
            post(endorsements::handle_create_endorsement)
                .get(endorsements::handle_list_endorsements),
        )
        .route(
            "/api/talents/:id/endorsements/:skill",
            get(endorsements::handle_list_endorsements_by_skill),
        )
        // AI
        .route(
            "/api/talents/:id/recommendations",
            get(ranking::handle_recommendations),
        )
        .route("/api/marketplace", get(ranking::handle_marketplace))
        .with_state(state)
}
