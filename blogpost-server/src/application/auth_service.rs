use tracing::info;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::{AuthRejection, DomainError};
use crate::domain::user::{RegisterRequest, Registration, User};
use crate::infrastructure::password::CredentialHasher;

pub(crate) struct AuthService<R: UserRepository, H: CredentialHasher> {
    repo: R,
    hasher: H,
}

impl<R: UserRepository, H: CredentialHasher> AuthService<R, H> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub(crate) fn new(repo: R, hasher: H) -> Self {
        Self { repo, hasher }
    }

    /// Basic-auth check: lookup first, then password verification.
    pub(crate) async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let Some(user_creds) = self.repo.find_by_username(username).await? else {
            // стремимся к одинаковому времени проверки если user не найден
            self.hasher.verify(password, Self::DUMMY_PASSWORD_HASH);
            return Err(DomainError::InvalidCredentials(
                AuthRejection::IncorrectUsername,
            ));
        };

        if !self.hasher.verify(password, &user_creds.password_hash) {
            return Err(DomainError::InvalidCredentials(
                AuthRejection::IncorrectPassword,
            ));
        }

        Ok(user_creds.user)
    }

    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        if self.repo.count_by_username(&req.username).await? > 0 {
            return Err(DomainError::AlreadyExists("Username".to_string()));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .repo
            .create_user(Self::into_new_user(req, password_hash))
            .await?;

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    fn into_new_user(req: Registration, password_hash: String) -> NewUser {
        NewUser {
            username: req.username,
            password_hash,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}
