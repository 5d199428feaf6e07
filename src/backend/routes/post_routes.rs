/**
 * Post Route Configuration
 *
 * Every post route requires `x-auth-token`.
 *
 * # Routes
 *
 * - `GET /api/posts`, `POST /api/posts`
 * - `GET /api/posts/{id}`, `DELETE /api/posts/{id}`
 * - `PUT /api/posts/like/{id}`, `PUT /api/posts/unlike/{id}`
 * - `POST /api/posts/comment/{id}`
 * - `DELETE /api/posts/comment/{id}/{comment_id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{
    add_comment, create_post, delete_comment, delete_post, get_post, like_post, list_posts,
    unlike_post,
};
use crate::backend::server::state::AppState;

/// Configure post routes
pub fn configure_post_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let private = Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post).delete(delete_post))
        .route("/api/posts/like/{id}", put(like_post))
        .route("/api/posts/unlike/{id}", put(unlike_post))
        .route("/api/posts/comment/{id}", post(add_comment))
        .route("/api/posts/comment/{id}/{comment_id}", delete(delete_comment))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.merge(private)
}
