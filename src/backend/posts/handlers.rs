/**
 * Post Handlers
 *
 * HTTP handlers for `/api/posts`. All routes are private. The author's
 * name and avatar are copied into posts and comments when written.
 *
 * Unknown and malformed post ids both answer 404 "Post not found".
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use super::types::TextRequest;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, ValidatedJson};
use crate::backend::profile::types::MessageResponse;
use crate::backend::server::state::AppState;
use crate::backend::store::SharedStore;
use crate::shared::{AuthorSnapshot, Comment, Like, Post, PostError};

const POST_NOT_FOUND: &str = "Post not found";

fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(POST_NOT_FOUND))
}

async fn load_post(store: &SharedStore, id: Uuid) -> Result<Post, BackendError> {
    store
        .find_post(id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))
}

async fn load_author(store: &SharedStore, user_id: Uuid) -> Result<AuthorSnapshot, BackendError> {
    let user = store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(user.snapshot())
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<TextRequest>,
) -> Result<Json<Post>, BackendError> {
    let author = load_author(&state.store, auth.user_id).await?;

    let post = Post::new(&author, request.text);
    state.store.save_post(&post).await?;

    tracing::info!("Post {} created by {}", post.id, auth.user_id);

    Ok(Json(post))
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(_auth): AuthUser,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(state.store.list_posts().await?))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    let id = parse_post_id(&id)?;
    Ok(Json(load_post(&state.store, id).await?))
}

/// DELETE /api/posts/{id}
///
/// Only the author may delete a post.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_post_id(&id)?;
    let post = load_post(&state.store, id).await?;

    if !post.is_author(auth.user_id) {
        tracing::warn!("User {} tried to delete post {} by {}", auth.user_id, id, post.user);
        return Err(PostError::NotAuthorized.into());
    }

    if !state.store.delete_post(id).await? {
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!("Post {} removed", id);

    Ok(Json(MessageResponse::new("Post removed")))
}

/// PUT /api/posts/like/{id}
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let id = parse_post_id(&id)?;
    let mut post = load_post(&state.store, id).await?;

    post.like(auth.user_id)?;
    state.store.save_post(&post).await?;

    Ok(Json(post.likes))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let id = parse_post_id(&id)?;
    let mut post = load_post(&state.store, id).await?;

    post.unlike(auth.user_id)?;
    state.store.save_post(&post).await?;

    Ok(Json(post.likes))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<TextRequest>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let id = parse_post_id(&id)?;
    let author = load_author(&state.store, auth.user_id).await?;
    let mut post = load_post(&state.store, id).await?;

    let comment = Comment::new(&author, request.text);
    tracing::info!("Comment {} on post {} by {}", comment.id, id, auth.user_id);
    post.add_comment(comment);
    state.store.save_post(&post).await?;

    Ok(Json(post.comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
///
/// Allowed for the comment's author and for the post's author.
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let id = parse_post_id(&id)?;
    let comment_id = Uuid::parse_str(&comment_id)
        .map_err(|_| BackendError::from(PostError::CommentNotFound))?;
    let mut post = load_post(&state.store, id).await?;

    post.remove_comment(comment_id, auth.user_id)?;
    state.store.save_post(&post).await?;

    tracing::info!("Comment {} removed from post {}", comment_id, id);

    Ok(Json(post.comments))
}
