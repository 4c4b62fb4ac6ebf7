use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::display_name;
use super::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Author {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

impl Author {
    pub(crate) fn full_name(&self) -> String {
        display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: Author,
    pub(crate) created: DateTime<Utc>,
}

impl Post {
    pub(crate) fn author_name(&self) -> String {
        self.author.full_name()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct PostDraft {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<PostDraft, DomainError> {
        let title = self.title.ok_or(DomainError::MissingField("title"))?;
        let content = self.content.ok_or(DomainError::MissingField("content"))?;
        ensure_title(&title)?;
        Ok(PostDraft { title, content })
    }
}

/// Partial update. `id` is whatever the body carried, rendered as text.
#[derive(Debug, Clone, Default)]
pub(crate) struct UpdatePostRequest {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<Author>,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self, path_id: &str) -> Result<Self, DomainError> {
        match self.id.as_deref() {
            Some(body_id) if !path_id.is_empty() && body_id == path_id => {}
            _ => return Err(DomainError::IdMismatch),
        }
        if let Some(title) = &self.title {
            ensure_title(title)?;
        }
        Ok(self)
    }
}

/// Store ids are positive integers; anything else can never match a post.
pub(crate) fn parse_post_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn ensure_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "title",
            message: "must not be empty",
        });
    }
    Ok(())
}
