/**
 * Profile Route Configuration
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/profile` - all profiles
 * - `GET /api/profile/user/{user_id}` - profile by user id
 * - `GET /api/profile/github/{username}` - latest GitHub repositories
 *
 * ## Private (`x-auth-token`)
 * - `GET /api/profile/me`
 * - `POST /api/profile`, `DELETE /api/profile`
 * - `PUT /api/profile/experience`, `DELETE /api/profile/experience/{exp_id}`
 * - `PUT /api/profile/education`, `DELETE /api/profile/education/{edu_id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::profile::{
    add_education, add_experience, delete_account, delete_education, delete_experience,
    get_my_profile, get_profile_by_user, github_repos, list_profiles, upsert_profile,
};
use crate::backend::server::state::AppState;

/// Configure profile routes
pub fn configure_profile_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/profile", get(list_profiles))
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
        .route("/api/profile/github/{username}", get(github_repos));

    let private = Router::new()
        .route("/api/profile", post(upsert_profile).delete(delete_account))
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile/experience", put(add_experience))
        .route("/api/profile/experience/{exp_id}", delete(delete_experience))
        .route("/api/profile/education", put(add_education))
        .route("/api/profile/education/{edu_id}", delete(delete_education))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.merge(public).merge(private)
}
