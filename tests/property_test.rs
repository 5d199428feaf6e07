//! Property-based tests for tokens, skills parsing and post rules
//!
//! Uses proptest to generate random inputs and verify properties

use chrono::Utc;
use devconnector::backend::auth::TokenKeys;
use devconnector::shared::profile::parse_skills;
use devconnector::shared::{AuthorSnapshot, Post, PostError};
use proptest::prelude::*;
use uuid::Uuid;

fn any_uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

proptest! {
    #[test]
    fn test_token_verifies_to_same_user(id in any_uuid(), secret in "[a-zA-Z0-9]{8,32}") {
        let keys = TokenKeys::new(&secret, 3600);
        let token = keys.issue(id).unwrap();
        let claims = keys.verify(&token).unwrap();
        prop_assert_eq!(claims.user_id().unwrap(), id);
    }

    #[test]
    fn test_token_rejected_with_other_secret(
        id in any_uuid(),
        secret in "[a-z]{8,16}",
        other in "[A-Z]{8,16}",
    ) {
        let token = TokenKeys::new(&secret, 3600).issue(id).unwrap();
        prop_assert!(TokenKeys::new(&other, 3600).verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected(id in any_uuid(), seconds_past_exp in 2u64..100_000) {
        let keys = TokenKeys::new("secret", 60);
        let issued_at = Utc::now().timestamp() as u64 - 60 - seconds_past_exp;
        let token = keys.issue_at(id, issued_at).unwrap();
        prop_assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_skills_are_trimmed_and_non_empty(raw in "[ a-z,]{0,64}") {
        let skills = parse_skills(&raw);
        for skill in &skills {
            prop_assert!(!skill.is_empty());
            prop_assert_eq!(skill.trim(), skill.as_str());
            prop_assert!(!skill.contains(','));
        }
        let expected = raw.split(',').filter(|s| !s.trim().is_empty()).count();
        prop_assert_eq!(skills.len(), expected);
    }

    #[test]
    fn test_like_then_unlike_restores_likes(users in prop::collection::vec(any_uuid(), 1..8)) {
        let author = AuthorSnapshot { id: Uuid::new_v4(), name: "A".into(), avatar: String::new() };
        let mut post = Post::new(&author, "text".into());
        let mut liked = Vec::new();
        for user in &users {
            match post.like(*user) {
                Ok(()) => liked.push(*user),
                Err(e) => prop_assert_eq!(e, PostError::AlreadyLiked),
            }
        }
        prop_assert_eq!(post.likes.len(), liked.len());

        let snapshot = post.likes.clone();
        let extra = Uuid::new_v4();
        post.like(extra).unwrap();
        post.unlike(extra).unwrap();
        prop_assert_eq!(&post.likes, &snapshot);
        prop_assert_eq!(post.unlike(extra), Err(PostError::NotLiked));
    }
}
