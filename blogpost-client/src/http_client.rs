use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Post, User};

/// Логин и пароль для Basic-авторизации.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterUserRequestDto<'a> {
    username: &'a str,
    password: &'a str,
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdatePostRequestDto<'a> {
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    message: Option<String>,
}

/// Достаёт `message` из тела ошибки сервера, если оно в ожидаемом формате.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponseDto>(body)
        .ok()
        .and_then(|dto| dto.message)
        .unwrap_or_else(|| format!("http status {status}"))
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API `blogpost-server`.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        credentials: Option<&Credentials>,
    ) -> RequestBuilder {
        let request = self.client.request(method, self.endpoint(path));
        match credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => request,
        }
    }

    async fn decode_error(response: Response) -> BlogClientError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => error_message(status, &body),
            Err(_) => format!("http status {status}"),
        };
        BlogClientError::from_http_status(status, Some(message))
    }

    async fn execute(request: RequestBuilder) -> BlogClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(request: RequestBuilder) -> BlogClientResult<T> {
        Self::execute(request)
            .await?
            .json::<T>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    pub(crate) async fn register_user(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> BlogClientResult<User> {
        let payload = RegisterUserRequestDto {
            username,
            password,
            first_name,
            last_name,
        };
        Self::execute_json(self.request(Method::POST, "/users", None).json(&payload)).await
    }

    pub(crate) async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        Self::execute_json(self.request(Method::GET, "/posts", None)).await
    }

    pub(crate) async fn get_post(&self, id: i64) -> BlogClientResult<Post> {
        Self::execute_json(self.request(Method::GET, &format!("/posts/{id}"), None)).await
    }

    pub(crate) async fn create_post(
        &self,
        credentials: &Credentials,
        title: &str,
        content: &str,
    ) -> BlogClientResult<Post> {
        let payload = CreatePostRequestDto { title, content };
        Self::execute_json(
            self.request(Method::POST, "/posts", Some(credentials))
                .json(&payload),
        )
        .await
    }

    pub(crate) async fn update_post(
        &self,
        credentials: &Credentials,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> BlogClientResult<Post> {
        let payload = UpdatePostRequestDto { id, title, content };
        Self::execute_json(
            self.request(Method::PUT, &format!("/posts/{id}"), Some(credentials))
                .json(&payload),
        )
        .await
    }

    pub(crate) async fn delete_post(
        &self,
        credentials: &Credentials,
        id: i64,
    ) -> BlogClientResult<()> {
        Self::execute(self.request(Method::DELETE, &format!("/posts/{id}"), Some(credentials)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must be built");
        assert_eq!(client.endpoint("/posts/1"), "http://localhost:8080/posts/1");
        assert_eq!(client.endpoint("users"), "http://localhost:8080/users");
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let payload = UpdatePostRequestDto {
            id: 7,
            title: Some("new"),
            content: None,
        };
        let value = serde_json::to_value(&payload).expect("payload must serialize");
        assert_eq!(value, json!({"id": 7, "title": "new"}));
    }

    #[test]
    fn register_payload_uses_camel_case() {
        let payload = RegisterUserRequestDto {
            username: "ann",
            password: "x",
            first_name: "Ann",
            last_name: "Lee",
        };
        let value = serde_json::to_value(&payload).expect("payload must serialize");
        assert_eq!(
            value,
            json!({"username": "ann", "password": "x", "firstName": "Ann", "lastName": "Lee"})
        );
    }

    #[test]
    fn error_message_prefers_server_text() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(status, r#"{"message":"Missing `title` in request body"}"#),
            "Missing `title` in request body"
        );
        assert_eq!(error_message(status, "<html>"), "http status 400 Bad Request");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials {
            username: "ann".to_string(),
            password: "secret".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("ann"));
        assert!(!rendered.contains("secret"));
    }
}
