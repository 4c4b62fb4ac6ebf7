use std::time::{SystemTime, UNIX_EPOCH};

use blogpost_client::{BlogClient, BlogClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("BLOG_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut client = BlogClient::new(base_url).expect("client must be built");

    let username = format!("smoke_user_{}", unique_suffix());
    let password = "password123";

    let user = client
        .register_user(&username, password, "Smoke", "Tester")
        .await
        .expect("register must succeed");
    assert_eq!(user.username, username);
    assert_eq!(user.name, "Smoke Tester");

    let duplicate = client
        .register_user(&username, password, "Smoke", "Tester")
        .await;
    assert!(matches!(duplicate, Err(BlogClientError::InvalidRequest(_))));

    let anonymous = client.create_post("smoke title", "smoke content").await;
    assert!(matches!(anonymous, Err(BlogClientError::Unauthorized)));

    client.set_credentials(&username, "wrong password");
    let rejected = client.create_post("smoke title", "smoke content").await;
    assert!(matches!(rejected, Err(BlogClientError::Unauthorized)));

    client.set_credentials(&username, password);
    let created = client
        .create_post("smoke title", "smoke content")
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, "smoke title");
    assert_eq!(created.author, "Smoke Tester");

    let fetched = client
        .get_post(created.id)
        .await
        .expect("get_post must succeed");
    assert_eq!(fetched, created);

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == created.id));

    let updated = client
        .update_post(created.id, Some("smoke title updated"), None)
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "smoke title updated");
    assert_eq!(updated.content, "smoke content");

    client
        .delete_post(created.id)
        .await
        .expect("delete_post must succeed");
    client
        .delete_post(created.id)
        .await
        .expect("repeated delete must succeed");

    let after_delete = client.get_post(created.id).await;
    assert!(matches!(after_delete, Err(BlogClientError::NotFound)));
}
