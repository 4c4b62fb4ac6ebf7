use async_trait::async_trait;
use sqlx::PgPool;

use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
}

#[derive(sqlx::FromRow)]
struct UserCredentialsRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, first_name, last_name
            "#,
        )
        .bind(input.username)
        .bind(input.password_hash)
        .bind(input.first_name)
        .bind(input.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.into())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(
            r#"
            SELECT
            id,
            username,
            first_name,
            last_name,
            password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|r| UserCredentials {
            user: User {
                id: r.id,
                username: r.username,
                first_name: r.first_name,
                last_name: r.last_name,
            },
            password_hash: r.password_hash,
        }))
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)
    }
}

const UNIQUE_VIOLATION: &str = "23505";

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && let Some(resource) =
            unique_violation_resource(db_err.code().as_deref(), db_err.constraint())
    {
        return DomainError::AlreadyExists(resource.to_string());
    }
    DomainError::Unexpected(err.to_string())
}

/// Which resource a Postgres error reports as duplicated, if it is a unique violation.
fn unique_violation_resource(code: Option<&str>, constraint: Option<&str>) -> Option<&'static str> {
    if code != Some(UNIQUE_VIOLATION) {
        return None;
    }
    match constraint {
        Some("users_username_key") => Some("Username"),
        _ => Some("User"),
    }
}

#[cfg(test)]
mod tests {
    use super::{map_user_db_error, unique_violation_resource};
    use crate::domain::error::DomainError;

    #[test]
    fn username_constraint_maps_to_username_conflict() {
        assert_eq!(
            unique_violation_resource(Some("23505"), Some("users_username_key")),
            Some("Username")
        );
        // текст ошибки совпадает с предварительной проверкой в AuthService::register
        assert_eq!(
            DomainError::AlreadyExists("Username".to_string()).to_string(),
            "Username already exists"
        );
    }

    #[test]
    fn other_unique_constraint_is_still_a_conflict() {
        assert_eq!(
            unique_violation_resource(Some("23505"), Some("users_pkey")),
            Some("User")
        );
        assert_eq!(unique_violation_resource(Some("23505"), None), Some("User"));
    }

    #[test]
    fn other_database_errors_are_not_conflicts() {
        // 23502 not_null_violation, 23514 check_violation
        assert_eq!(
            unique_violation_resource(Some("23502"), Some("users_username_key")),
            None
        );
        assert_eq!(unique_violation_resource(Some("23514"), None), None);
        assert_eq!(unique_violation_resource(None, None), None);
    }

    #[test]
    fn non_database_errors_are_unexpected() {
        let err = map_user_db_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Unexpected(_)));
    }
}
