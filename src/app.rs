use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/view", get(handlers::get_view))
        .route("/activities/add", post(handlers::add_activity))
        .route("/activities/add-json", post(handlers::add_activity_json))
        .route("/activities/import", post(handlers::import_activities))
        .route("/activities/edit", post(handlers::edit_activity))
        .route("/activities/remove", post(handlers::remove_activity))
        .route("/activities/reset", post(handlers::reset_activities))
        .route("/activities/refresh", post(handlers::refresh_table))
        .route("/panels/group/:name", post(handlers::toggle_group))
        .route("/panels/input/:name", post(handlers::toggle_input))
        .with_state(state)
}
