use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/items/:id/:action", post(handlers::line_action_form))
        .route("/select-all", post(handlers::select_all_form))
        .route("/delete-selected", post(handlers::delete_selected_form))
        .route("/api/cart", get(handlers::get_cart))
        .route("/api/items/:id/:action", post(handlers::line_action))
        .route("/api/select-all", post(handlers::select_all))
        .route("/api/delete-selected", post(handlers::delete_selected))
        .with_state(state)
}
