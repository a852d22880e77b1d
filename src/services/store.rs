//! In-memory blog and user storage.
//!
//! Both stores keep their records in a `Vec` behind an `RwLock`, so
//! iteration order is insertion order. That ordering is part of the
//! contract: the statistics aggregation breaks ties by first-seen
//! position.

use crate::models::{Blog, NewBlogRequest, User};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Errors returned by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("user does not own this record")]
    NotOwner,
    #[error("username is already taken")]
    DuplicateUsername,
}

/// Insertion-ordered in-memory collection of blog posts
#[derive(Clone, Default)]
pub struct BlogStore {
    blogs: Arc<RwLock<Vec<Blog>>>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all posts in insertion order
    pub fn list(&self) -> Vec<Blog> {
        self.blogs.read().unwrap().clone()
    }

    /// Insert a new post, assigning it a fresh ID
    pub fn create(&self, request: NewBlogRequest, owner: Option<String>) -> Blog {
        let blog = Blog {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            author: request.author,
            url: request.url,
            likes: request.likes,
            user_id: owner,
        };

        self.blogs.write().unwrap().push(blog.clone());
        blog
    }

    /// Replace the like count of an existing post
    pub fn update_likes(&self, id: &str, likes: u64) -> Result<Blog, StoreError> {
        let mut blogs = self.blogs.write().unwrap();
        let blog = blogs
            .iter_mut()
            .find(|blog| blog.id == id)
            .ok_or(StoreError::NotFound)?;

        blog.likes = likes;
        Ok(blog.clone())
    }

    /// Remove a post on behalf of `user_id`
    ///
    /// Posts that carry an owner can only be removed by that owner. Posts
    /// without one (seeded outside the API) can be removed by anyone
    /// authenticated.
    pub fn delete(&self, id: &str, user_id: &str) -> Result<(), StoreError> {
        let mut blogs = self.blogs.write().unwrap();
        let position = blogs
            .iter()
            .position(|blog| blog.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(owner) = &blogs[position].user_id
            && owner != user_id
        {
            return Err(StoreError::NotOwner);
        }

        blogs.remove(position);
        Ok(())
    }
}

/// Insertion-ordered in-memory collection of user accounts
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all accounts in registration order
    pub fn list(&self) -> Vec<User> {
        self.users.read().unwrap().clone()
    }

    /// Insert a new account, rejecting duplicate usernames
    pub fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap();
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(StoreError::DuplicateUsername);
        }

        users.push(user.clone());
        Ok(user)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }
}
