mod check_ins;
mod profile;
mod push_subscriptions;
mod recommendations;
mod tasks;
mod work_sessions;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::state::AppState;

/// The full `/api` surface with tracing and CORS applied.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(profile::router())
        .merge(check_ins::router())
        .merge(tasks::router())
        .merge(work_sessions::router())
        .merge(recommendations::router())
        .merge(push_subscriptions::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
