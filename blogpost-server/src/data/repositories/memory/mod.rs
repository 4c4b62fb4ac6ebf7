//! In-process store used by router and server tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::User;

#[derive(Default)]
pub(crate) struct MemoryPostRepository {
    rows: Mutex<Vec<Post>>,
    last_id: AtomicI64,
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut rows = self.rows.lock().expect("posts mutex poisoned");
        // как BIGSERIAL: id не переиспользуются после удаления
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = Post {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            created: Utc::now(),
        };
        rows.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let rows = self.rows.lock().expect("posts mutex poisoned");
        Ok(rows.iter().find(|post| post.id == id).cloned())
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let mut rows = self.rows.lock().expect("posts mutex poisoned");
        let Some(post) = rows.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.lock().expect("posts mutex poisoned");
        let before = rows.len();
        rows.retain(|post| post.id != id);
        Ok(rows.len() < before)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.rows.lock().expect("posts mutex poisoned").clone())
    }
}

#[derive(Default)]
pub(crate) struct MemoryUserRepository {
    rows: Mutex<Vec<UserCredentials>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut rows = self.rows.lock().expect("users mutex poisoned");
        if rows.iter().any(|row| row.user.username == input.username) {
            return Err(DomainError::AlreadyExists("Username".to_string()));
        }
        let user = User {
            id: rows.len() as i64 + 1,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        rows.push(UserCredentials {
            user: user.clone(),
            password_hash: input.password_hash,
        });
        Ok(user)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let rows = self.rows.lock().expect("users mutex poisoned");
        Ok(rows.iter().find(|row| row.user.username == username).cloned())
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, DomainError> {
        let rows = self.rows.lock().expect("users mutex poisoned");
        Ok(rows.iter().filter(|row| row.user.username == username).count() as i64)
    }
}
