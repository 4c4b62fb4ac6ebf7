use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Author, CreatePostRequest, Post, UpdatePostRequest, parse_post_id};
use crate::domain::user::User;

pub(crate) struct BlogService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> BlogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }

    pub(crate) async fn get_post(&self, raw_id: &str) -> Result<Post, DomainError> {
        let Some(id) = parse_post_id(raw_id) else {
            return Err(post_not_found(raw_id));
        };
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| post_not_found(raw_id))
    }

    /// The author is always the authenticated user, whatever the request carried.
    pub(crate) async fn create_post(
        &self,
        author: &User,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let draft = req.validate()?;

        let new_post = NewPost {
            title: draft.title,
            content: draft.content,
            author: Author {
                first_name: Some(author.first_name.clone()),
                last_name: Some(author.last_name.clone()),
            },
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn update_post(
        &self,
        raw_id: &str,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate(raw_id)?;
        let Some(id) = parse_post_id(raw_id) else {
            return Err(post_not_found(raw_id));
        };

        let patch = PostPatch {
            title: req.title,
            content: req.content,
            author: req.author,
        };
        self.repo
            .update_post(id, patch)
            .await?
            .ok_or_else(|| post_not_found(raw_id))
    }

    /// Succeeds whether or not the post existed.
    pub(crate) async fn delete_post(&self, raw_id: &str) -> Result<(), DomainError> {
        if let Some(id) = parse_post_id(raw_id) {
            self.repo.delete_post(id).await?;
        }
        Ok(())
    }
}

fn post_not_found(raw_id: &str) -> DomainError {
    DomainError::NotFound(format!("post id: {raw_id}"))
}
