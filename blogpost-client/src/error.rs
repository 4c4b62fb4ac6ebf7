use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blogpost-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется авторизация: учётные данные не заданы или отклонены сервером.
    #[error("unauthorized")]
    Unauthorized,

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или бизнес-ошибка валидации.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `blogpost-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::BlogClientError;

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = BlogClientError::from_http_status(status, Some("Unauthorized".into()));
            assert!(matches!(err, BlogClientError::Unauthorized));
        }
    }

    #[test]
    fn not_found_ignores_message() {
        let err = BlogClientError::from_http_status(StatusCode::NOT_FOUND, Some("x".into()));
        assert!(matches!(err, BlogClientError::NotFound));
    }

    #[test]
    fn other_statuses_keep_server_message() {
        let err = BlogClientError::from_http_status(
            StatusCode::BAD_REQUEST,
            Some("Username already exists".into()),
        );
        match err {
            BlogClientError::InvalidRequest(message) => {
                assert_eq!(message, "Username already exists")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = BlogClientError::from_http_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(
            matches!(err, BlogClientError::InvalidRequest(message) if message.contains("500"))
        );
    }
}
