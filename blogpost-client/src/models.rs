use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичное представление пользователя, как его отдаёт сервер.
pub struct User {
    /// Логин.
    pub username: String,
    /// Имя и фамилия через пробел.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичное представление поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Имя автора (имя и фамилия через пробел).
    pub author: String,
    /// Содержимое поста.
    pub content: String,
    /// Заголовок поста.
    pub title: String,
    /// Дата и время создания поста (UTC).
    pub created: DateTime<Utc>,
}
