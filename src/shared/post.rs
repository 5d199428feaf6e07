//! Post Data Structure
//!
//! Posts embed their likes and comments. Author name and avatar are copied
//! into the post (and into every comment) when it is written, so later
//! profile changes do not rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Display data captured from the author at write time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

/// One user's like; a user appears at most once per post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

/// Rule violations when mutating a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("Post already liked")]
    AlreadyLiked,
    #[error("Post has not yet been liked")]
    NotLiked,
    #[error("Comment does not exist")]
    CommentNotFound,
    #[error("User not authorized")]
    NotAuthorized,
}

impl Comment {
    pub fn new(author: &AuthorSnapshot, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

impl Post {
    pub fn new(author: &AuthorSnapshot, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_author(&self, user: Uuid) -> bool {
        self.user == user
    }

    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    pub fn like(&mut self, user: Uuid) -> Result<(), PostError> {
        if self.is_liked_by(user) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// Remove the first like belonging to `user`
    pub fn unlike(&mut self, user: Uuid) -> Result<(), PostError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user)
            .ok_or(PostError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove a comment by its own id
    ///
    /// Allowed for the comment's author and for the post's author.
    pub fn remove_comment(&mut self, comment_id: Uuid, requester: Uuid) -> Result<Comment, PostError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        if self.comments[index].user != requester && !self.is_author(requester) {
            return Err(PostError::NotAuthorized);
        }
        Ok(self.comments.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> AuthorSnapshot {
        AuthorSnapshot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            avatar: format!("https://www.gravatar.com/avatar/{}", name),
        }
    }

    #[test]
    fn test_new_post_snapshots_author() {
        let alice = author("alice");
        let post = Post::new(&alice, "Hello".to_string());
        assert_eq!(post.user, alice.id);
        assert_eq!(post.name, "alice");
        assert_eq!(post.avatar, alice.avatar);
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_like_twice_is_rejected() {
        let mut post = Post::new(&author("alice"), "Hello".to_string());
        let bob = Uuid::new_v4();

        assert_eq!(post.like(bob), Ok(()));
        assert_eq!(post.like(bob), Err(PostError::AlreadyLiked));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn test_likes_are_prepended() {
        let mut post = Post::new(&author("alice"), "Hello".to_string());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        post.like(first).unwrap();
        post.like(second).unwrap();
        assert_eq!(post.likes, vec![Like { user: second }, Like { user: first }]);
    }

    #[test]
    fn test_unlike_removes_only_that_user() {
        let mut post = Post::new(&author("alice"), "Hello".to_string());
        let bob = Uuid::new_v4();
        let carol = Uuid::new_v4();
        post.like(bob).unwrap();
        post.like(carol).unwrap();

        assert_eq!(post.unlike(bob), Ok(()));
        assert_eq!(post.likes, vec![Like { user: carol }]);
        assert_eq!(post.unlike(bob), Err(PostError::NotLiked));
    }

    #[test]
    fn test_comment_removal_rules() {
        let alice = author("alice");
        let bob = author("bob");
        let mallory = author("mallory");
        let mut post = Post::new(&alice, "Hello".to_string());

        let first = Comment::new(&bob, "first".to_string());
        let second = Comment::new(&bob, "second".to_string());
        let (first_id, second_id) = (first.id, second.id);
        post.add_comment(first);
        post.add_comment(second);

        assert_eq!(post.remove_comment(first_id, mallory.id), Err(PostError::NotAuthorized));
        assert_eq!(post.remove_comment(Uuid::new_v4(), bob.id), Err(PostError::CommentNotFound));

        // comment author
        let removed = post.remove_comment(first_id, bob.id).unwrap();
        assert_eq!(removed.text, "first");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].id, second_id);

        // post author moderating someone else's comment
        post.remove_comment(second_id, alice.id).unwrap();
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PostError::AlreadyLiked.to_string(), "Post already liked");
        assert_eq!(PostError::NotLiked.to_string(), "Post has not yet been liked");
    }
}
