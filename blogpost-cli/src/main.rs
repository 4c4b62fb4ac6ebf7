use std::env;
use std::process;

use anyhow::{Result, bail};
use blogpost_client::{BlogClient, BlogClientError, Post, User};
use clap::{Parser, Subcommand};

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";
const USERNAME_ENV: &str = "BLOG_USERNAME";
const PASSWORD_ENV: &str = "BLOG_PASSWORD";

#[derive(Debug, Parser)]
#[command(name = "blogpost-cli", version, about = "CLI клиент для blogpost-server")]
struct Cli {
    /// Адрес сервера.
    #[arg(long, global = true)]
    server: Option<String>,

    /// Логин для Basic-авторизации (по умолчанию из BLOG_USERNAME).
    #[arg(long, global = true)]
    username: Option<String>,

    /// Пароль для Basic-авторизации (по умолчанию из BLOG_PASSWORD).
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя с логином и паролем из --username/--password.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Список всех постов.
    List,
    /// Получение поста по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Создание поста (требует логин и пароль).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Обновление поста (требует логин и пароль).
    ///
    /// Неуказанные поля остаются без изменений.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Удаление поста (требует логин и пароль).
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let mut client = BlogClient::new(server).map_err(map_client_error)?;

    let credentials = resolve_credentials(cli.username, cli.password, |key| env::var(key).ok());
    if let Some((username, password)) = &credentials {
        client.set_credentials(username, password);
    }

    match cli.command {
        Command::Register {
            first_name,
            last_name,
        } => {
            let Some((username, password)) = &credentials else {
                bail!("для регистрации укажите --username и --password");
            };
            let user = client
                .register_user(username, password, &first_name, &last_name)
                .await
                .map_err(map_client_error)?;
            print_user("Регистрация успешна", &user);
        }
        Command::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_list(&posts);
        }
        Command::Get { id } => {
            let post = client.get_post(id).await.map_err(map_client_error)?;
            print_post("Пост", &post);
        }
        Command::Create { title, content } => {
            let post = client
                .create_post(&title, &content)
                .await
                .map_err(map_client_error)?;
            print_post("Пост создан", &post);
        }
        Command::Update { id, title, content } => {
            let post = client
                .update_post(id, title.as_deref(), content.as_deref())
                .await
                .map_err(map_client_error)?;
            print_post("Пост обновлён", &post);
        }
        Command::Delete { id } => {
            client.delete_post(id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

/// Аргументы командной строки важнее переменных окружения; без обеих частей пары
/// учётных данных нет.
fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<(String, String)> {
    let username = username.or_else(|| lookup(USERNAME_ENV))?;
    let password = password.or_else(|| lookup(PASSWORD_ENV))?;
    Some((username, password))
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::Unauthorized => {
            "требуется авторизация: укажите --username/--password или BLOG_USERNAME/BLOG_PASSWORD"
                .to_string()
        }
        BlogClientError::NotFound => "ресурс не найден".to_string(),
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_user(title: &str, user: &User) {
    println!("{title}");
    println!("username: {}", user.username);
    println!("name: {}", user.name);
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("content: {}", post.content);
    println!("author: {}", post.author);
    println!("created: {}", post.created);
}

fn print_list(posts: &[Post]) {
    println!("Постов: {}", posts.len());

    for post in posts {
        println!("- [{}] {} ({})", post.id, post.title, post.author);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use clap::CommandFactory;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8080".to_string());
        assert_eq!(s, "http://127.0.0.1:8080");
    }

    #[test]
    fn arguments_win_over_environment() {
        let env = env_of(&[(USERNAME_ENV, "env-user"), (PASSWORD_ENV, "env-pass")]);
        let creds = resolve_credentials(Some("ann".into()), None, env);
        assert_eq!(creds, Some(("ann".to_string(), "env-pass".to_string())));
    }

    #[test]
    fn environment_fills_missing_credentials() {
        let env = env_of(&[(USERNAME_ENV, "env-user"), (PASSWORD_ENV, "env-pass")]);
        let creds = resolve_credentials(None, None, env);
        assert_eq!(
            creds,
            Some(("env-user".to_string(), "env-pass".to_string()))
        );
    }

    #[test]
    fn half_a_pair_is_no_credentials() {
        assert!(resolve_credentials(Some("ann".into()), None, env_of(&[])).is_none());
        assert!(resolve_credentials(None, Some("p".into()), env_of(&[])).is_none());
    }

    #[test]
    fn update_accepts_partial_fields() {
        let cli = Cli::try_parse_from(["blogpost-cli", "update", "--id", "3", "--title", "new"])
            .expect("arguments must parse");
        match cli.command {
            Command::Update { id, title, content } => {
                assert_eq!(id, 3);
                assert_eq!(title.as_deref(), Some("new"));
                assert!(content.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_credentials_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "blogpost-cli",
            "register",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
            "--username",
            "ann",
            "--password",
            "x",
        ])
        .expect("arguments must parse");
        assert_eq!(cli.username.as_deref(), Some("ann"));
        assert_eq!(cli.password.as_deref(), Some("x"));
    }
}
