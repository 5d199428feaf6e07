//! Posts Module
//!
//! Posts with embedded likes and comments. The like/unlike and comment
//! ownership rules live on [`crate::shared::Post`]; handlers load, apply and
//! save.

pub mod types;

pub mod handlers;

pub use handlers::{
    add_comment, create_post, delete_comment, delete_post, get_post, like_post, list_posts,
    unlike_post,
};
