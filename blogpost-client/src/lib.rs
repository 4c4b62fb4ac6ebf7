//! Клиентская библиотека для работы с blogpost-server по HTTP.
//!
//! `BlogClient` хранит логин и пароль после `set_credentials` и передаёт их
//! заголовком `Authorization: Basic ...` в защищённых операциях
//! (создание, изменение и удаление постов).
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{Post, User};

use http_client::{Credentials, HttpClient};

#[derive(Debug, Clone)]
/// Клиент для работы с блог-сервисом.
pub struct BlogClient {
    http_client: HttpClient,
    credentials: Option<Credentials>,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
            credentials: None,
        })
    }

    /// Запоминает логин и пароль для защищённых операций.
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
    }

    /// Возвращает логин из сохранённых учётных данных.
    pub fn username(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .map(|credentials| credentials.username.as_str())
    }

    /// Забывает сохранённые учётные данные.
    pub fn clear_credentials(&mut self) {
        self.credentials = None;
    }

    /// Регистрирует пользователя. Учётные данные клиента не меняются.
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> BlogClientResult<User> {
        self.http_client
            .register_user(username, password, first_name, last_name)
            .await
    }

    /// Возвращает все посты в порядке создания.
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.http_client.list_posts().await
    }

    /// Возвращает пост по идентификатору.
    pub async fn get_post(&self, id: i64) -> BlogClientResult<Post> {
        self.http_client.get_post(id).await
    }

    /// Создаёт пост. Автором становится владелец учётных данных.
    pub async fn create_post(&self, title: &str, content: &str) -> BlogClientResult<Post> {
        let credentials = self.require_credentials()?;
        self.http_client
            .create_post(credentials, title, content)
            .await
    }

    /// Обновляет пост. Поля, переданные как `None`, сервер оставляет без изменений.
    pub async fn update_post(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> BlogClientResult<Post> {
        let credentials = self.require_credentials()?;
        self.http_client
            .update_post(credentials, id, title, content)
            .await
    }

    /// Удаляет пост. Удаление несуществующего поста не считается ошибкой.
    pub async fn delete_post(&self, id: i64) -> BlogClientResult<()> {
        let credentials = self.require_credentials()?;
        self.http_client.delete_post(credentials, id).await
    }

    fn require_credentials(&self) -> BlogClientResult<&Credentials> {
        self.credentials.as_ref().ok_or(BlogClientError::Unauthorized)
    }
}
