/**
 * Profile Handlers
 *
 * HTTP handlers for `/api/profile`. Every mutation loads the caller's
 * profile, changes it in memory and writes the whole document back.
 *
 * # Endpoints
 *
 * - `GET /api/profile/me` (private) - own profile
 * - `POST /api/profile` (private) - create or partially update own profile
 * - `GET /api/profile` - all profiles
 * - `GET /api/profile/user/{user_id}` - one user's profile
 * - `DELETE /api/profile` (private) - delete profile, posts and account
 * - `PUT /api/profile/experience`, `DELETE /api/profile/experience/{exp_id}` (private)
 * - `PUT /api/profile/education`, `DELETE /api/profile/education/{edu_id}` (private)
 * - `GET /api/profile/github/{username}` - latest GitHub repositories
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use std::collections::HashMap;
use uuid::Uuid;

use super::github::GithubError;
use super::types::{
    EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest, ProfileResponse,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, ValidatedJson};
use crate::backend::server::state::AppState;
use crate::backend::store::SharedStore;
use crate::shared::Profile;

const NO_PROFILE: &str = "There is no profile for this user";
const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Attach the owner's summary to a profile
async fn with_owner(store: &SharedStore, profile: Profile) -> Result<ProfileResponse, BackendError> {
    let user = store
        .find_user_summaries(&[profile.user])
        .await?
        .into_iter()
        .next();
    Ok(ProfileResponse { profile, user })
}

async fn load_own_profile(store: &SharedStore, user_id: Uuid) -> Result<Profile, BackendError> {
    store.find_profile_by_user(user_id).await?.ok_or_else(|| {
        tracing::debug!("No profile for user {}", user_id);
        BackendError::not_found(NO_PROFILE)
    })
}

/// GET /api/profile/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileResponse>, BackendError> {
    let profile = load_own_profile(&state.store, auth.user_id).await?;
    Ok(Json(with_owner(&state.store, profile).await?))
}

/// POST /api/profile
///
/// Creates the caller's profile on first use; afterwards only supplied
/// fields are overwritten. Submitting the same body twice yields the same
/// stored state.
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<ProfileRequest>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let existing = state.store.find_profile_by_user(auth.user_id).await?;
    let created = existing.is_none();
    let mut profile = existing.unwrap_or_else(|| Profile::new(auth.user_id));

    profile.apply(request.into_update());
    state.store.save_profile(&profile).await?;

    if created {
        tracing::info!("Profile created for user {}", auth.user_id);
    } else {
        tracing::info!("Profile updated for user {}", auth.user_id);
    }

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// GET /api/profile
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileResponse>>, BackendError> {
    let profiles = state.store.list_profiles().await?;

    let ids: Vec<Uuid> = profiles.iter().map(|p| p.user).collect();
    let mut owners: HashMap<Uuid, _> = state
        .store
        .find_user_summaries(&ids)
        .await?
        .into_iter()
        .map(|summary| (summary.id, summary))
        .collect();

    let response = profiles
        .into_iter()
        .map(|profile| {
            let user = owners.remove(&profile.user);
            ProfileResponse { profile, user }
        })
        .collect();

    Ok(Json(response))
}

/// GET /api/profile/user/{user_id}
///
/// A malformed id is reported the same way as an unknown one.
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let user_id =
        Uuid::parse_str(&user_id).map_err(|_| BackendError::not_found(PROFILE_NOT_FOUND))?;

    let profile = state
        .store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(PROFILE_NOT_FOUND))?;

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// DELETE /api/profile
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let posts = state.store.delete_posts_by_user(auth.user_id).await?;
    state.store.delete_profile_by_user(auth.user_id).await?;
    state.store.delete_user(auth.user_id).await?;

    tracing::info!("User {} deleted along with {} post(s)", auth.user_id, posts);

    Ok(Json(MessageResponse::new("User deleted")))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<ExperienceRequest>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let mut profile = load_own_profile(&state.store, auth.user_id).await?;

    let entry = request.into_entry()?;
    tracing::info!("Adding experience {} for user {}", entry.id, auth.user_id);
    profile.add_experience(entry);
    state.store.save_profile(&profile).await?;

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn delete_experience(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    const NOT_FOUND: &str = "Experience not found";

    let exp_id = Uuid::parse_str(&exp_id).map_err(|_| BackendError::not_found(NOT_FOUND))?;
    let mut profile = load_own_profile(&state.store, auth.user_id).await?;

    profile
        .remove_experience(exp_id)
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;
    state.store.save_profile(&profile).await?;

    tracing::info!("Removed experience {} for user {}", exp_id, auth.user_id);

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// PUT /api/profile/education
pub async fn add_education(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<EducationRequest>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let mut profile = load_own_profile(&state.store, auth.user_id).await?;

    let entry = request.into_entry()?;
    tracing::info!("Adding education {} for user {}", entry.id, auth.user_id);
    profile.add_education(entry);
    state.store.save_profile(&profile).await?;

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn delete_education(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    const NOT_FOUND: &str = "Education not found";

    let edu_id = Uuid::parse_str(&edu_id).map_err(|_| BackendError::not_found(NOT_FOUND))?;
    let mut profile = load_own_profile(&state.store, auth.user_id).await?;

    profile
        .remove_education(edu_id)
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;
    state.store.save_profile(&profile).await?;

    tracing::info!("Removed education {} for user {}", edu_id, auth.user_id);

    Ok(Json(with_owner(&state.store, profile).await?))
}

/// GET /api/profile/github/{username}
pub async fn github_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, BackendError> {
    match state.github.latest_repos(&username).await {
        Ok(repos) => Ok(Json(repos)),
        Err(GithubError::NotFound(_)) | Err(GithubError::InvalidUsername(_)) => {
            Err(BackendError::not_found("No GitHub profile found"))
        }
        Err(GithubError::Transport(e)) => {
            tracing::error!("GitHub request failed for {}: {}", username, e);
            Err(BackendError::upstream("GitHub request failed"))
        }
    }
}
