pub mod users;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Method and path of every registered route, logged at startup.
pub const ROUTES: [(&str, &str); 4] = [
    ("GET", "/v1/users"),
    ("POST", "/v1/users"),
    ("GET", "/v1/users/:id"),
    ("DELETE", "/v1/users/:id"),
];

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user).delete(users::delete_user),
        );

    Router::new()
        .nest("/v1", v1)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
