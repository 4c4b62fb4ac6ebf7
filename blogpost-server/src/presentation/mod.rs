use sqlx::PgPool;
use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::data::post_repository::DynPostRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::data::user_repository::DynUserRepository;
use crate::infrastructure::password::Argon2Hasher;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<DynUserRepository, Argon2Hasher>>,
    pub(crate) blog_service: Arc<BlogService<DynPostRepository>>,
}

impl AppState {
    pub(crate) fn new(posts: DynPostRepository, users: DynUserRepository) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, Argon2Hasher)),
            blog_service: Arc::new(BlogService::new(posts)),
        }
    }

    pub(crate) fn with_pool(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PostgresPostRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool.clone())),
        )
    }
}
