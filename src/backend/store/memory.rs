/**
 * In-Memory Store
 *
 * `HashMap`s behind a single mutex. Used when no `DATABASE_URL` is
 * configured and by the integration tests. Nothing survives a restart.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use super::{PostRepository, ProfileRepository, StoreError, UserRepository};
use crate::backend::auth::users::{User, UserSummary};
use crate::shared::{Post, Profile};

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    /// Keyed by owning user id
    profiles: HashMap<Uuid, Profile>,
    posts: HashMap<Uuid, Post>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // a panic while holding the lock cannot leave the maps half-written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut data = self.lock();
        if data.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::conflict("User already exists"));
        }
        data.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_user_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, StoreError> {
        let data = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| data.users.get(id))
            .map(User::summary)
            .collect())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        self.lock().users.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.lock().profiles.get(&user).cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles: Vec<Profile> = self.lock().profiles.values().cloned().collect();
        profiles.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(profiles)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.lock().profiles.insert(profile.user, profile.clone());
        Ok(())
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError> {
        self.lock().profiles.remove(&user);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.lock().posts.get(&id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts: Vec<Post> = self.lock().posts.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        self.lock().posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.lock().posts.remove(&id).is_some())
    }

    async fn delete_posts_by_user(&self, user: Uuid) -> Result<u64, StoreError> {
        let mut data = self.lock();
        let before = data.posts.len();
        data.posts.retain(|_, post| post.user != user);
        Ok((before - data.posts.len()) as u64)
    }
}
