/**
 * Account Route Configuration
 *
 * # Routes
 *
 * - `GET /` - liveness text
 * - `POST /api/users` - registration
 * - `POST /api/auth` - login
 * - `GET /api/auth` - current user (private)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure registration and login routes
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(|| async { "API Running" }))
        .route("/api/users", post(register))
        .route("/api/auth", post(login));

    let private = Router::new()
        .route("/api/auth", get(get_me))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.merge(public).merge(private)
}
