//! Blog API 集成测试
//!
//! 运行方式:
//! ```bash
//! BLOG_CONSOLE_BASE_URL=https://cms.example.com/service BLOG_CONSOLE_SITE=test-site \
//!     cargo test -p blog-console-client --test api_test -- --ignored --nocapture --test-threads=1
//! ```

use blog_console_client::{BlogApiClient, PublishingAction, SavePostRequest};

/// 跳过测试的宏（当环境变量缺失时）
macro_rules! skip_if_no_server {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

const CONTAINER: &str = "blog";

fn test_client() -> (BlogApiClient, String) {
    let base_url =
        std::env::var("BLOG_CONSOLE_BASE_URL").unwrap_or_else(|_| "http://localhost".into());
    let site = std::env::var("BLOG_CONSOLE_SITE").unwrap_or_else(|_| "test-site".into());
    (BlogApiClient::new(base_url), site)
}

#[tokio::test]
#[ignore]
async fn test_list_posts() {
    skip_if_no_server!("BLOG_CONSOLE_BASE_URL", "BLOG_CONSOLE_SITE");

    let (client, site) = test_client();
    let result = client.list_posts(&site, CONTAINER).await;
    assert!(result.is_ok(), "list_posts 调用失败: {result:?}");

    println!("✓ list_posts 测试通过，共 {} 篇文章", result.unwrap().len());
}

#[tokio::test]
#[ignore]
async fn test_create_edit_delete_cycle() {
    skip_if_no_server!("BLOG_CONSOLE_BASE_URL", "BLOG_CONSOLE_SITE");

    let (client, site) = test_client();

    // 创建草稿
    let req = SavePostRequest {
        title: "integration test post".to_string(),
        content: "<p>created by api_test</p>".to_string(),
        draft: true,
    };
    let created = client.create_post(&site, CONTAINER, &req).await;
    assert!(created.is_ok(), "create_post 调用失败: {created:?}");
    let created = created.unwrap();
    assert!(!created.name.is_empty(), "服务器未返回文章标识");

    // 修改
    let req = SavePostRequest {
        title: "integration test post (edited)".to_string(),
        content: "<p>edited by api_test</p>".to_string(),
        draft: true,
    };
    let saved = client.save_post(&site, CONTAINER, &created.name, &req).await;
    assert!(saved.is_ok(), "save_post 调用失败: {saved:?}");
    assert_eq!(saved.unwrap().title, "integration test post (edited)");

    // 读取
    let fetched = client.get_post(&site, CONTAINER, &created.name).await;
    assert!(fetched.is_ok(), "get_post 调用失败: {fetched:?}");

    // 删除
    let deleted = client.delete_post(&site, CONTAINER, &created.name).await;
    assert!(deleted.is_ok(), "delete_post 调用失败: {deleted:?}");

    println!("✓ create/save/get/delete 测试通过: {}", created.name);
}

#[tokio::test]
#[ignore]
async fn test_publishing_round_trip() {
    skip_if_no_server!(
        "BLOG_CONSOLE_BASE_URL",
        "BLOG_CONSOLE_SITE",
        "BLOG_CONSOLE_EXTERNAL_BLOG"
    );

    let (client, site) = test_client();

    let req = SavePostRequest {
        title: "publishing test post".to_string(),
        content: "<p>publishing round trip</p>".to_string(),
        draft: false,
    };
    let created = client
        .create_post(&site, CONTAINER, &req)
        .await
        .expect("create_post 调用失败");

    let published = client
        .publishing(&site, CONTAINER, &created.name, PublishingAction::Publish)
        .await;
    assert!(published.is_ok(), "publish 调用失败: {published:?}");

    let updated = client
        .publishing(&site, CONTAINER, &created.name, PublishingAction::Update)
        .await;
    assert!(updated.is_ok(), "update 调用失败: {updated:?}");

    let unpublished = client
        .publishing(&site, CONTAINER, &created.name, PublishingAction::Unpublish)
        .await;
    assert!(unpublished.is_ok(), "unpublish 调用失败: {unpublished:?}");

    client
        .delete_post(&site, CONTAINER, &created.name)
        .await
        .expect("清理测试文章失败");

    println!("✓ publishing 测试通过: {}", created.name);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_post_is_not_found() {
    skip_if_no_server!("BLOG_CONSOLE_BASE_URL", "BLOG_CONSOLE_SITE");

    let (client, site) = test_client();
    let result = client
        .get_post(&site, CONTAINER, "no-such-post-xyzzy")
        .await;

    assert!(
        matches!(
            &result,
            Err(blog_console_client::ApiError::PostNotFound { .. })
        ),
        "期望 PostNotFound，实际为: {result:?}"
    );

    println!("✓ 缺失文章返回 PostNotFound");
}
