//! Blog API client: construction, URL building and the public operations.

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http::RequestContext;
use crate::types::{
    BlogPost, ItemResponse, PostListResponse, PublishingAction, PublishingRequest, SavePostRequest,
};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Async client for the blog endpoints of a content-management server.
///
/// One instance per process; share it behind an `Arc`. Every operation is a
/// single attempt — a failed call is terminal and is never retried internally.
pub struct BlogApiClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl BlogApiClient {
    /// Create a client against the given service base URL
    /// (e.g. `https://cms.example.com/service`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: create_http_client(),
            base_url,
        }
    }

    // ============ URL 构造 ============

    /// `/blog/post/site/{site}/{container}/{postId}`
    pub(crate) fn post_url(&self, site: &str, container: &str, post_id: &str) -> String {
        format!(
            "{}/blog/post/site/{}/{}/{}",
            self.base_url,
            urlencoding::encode(site),
            urlencoding::encode(container),
            urlencoding::encode(post_id)
        )
    }

    /// `/blog/post/site/{site}/{container}/{postId}/publishing`
    pub(crate) fn publishing_url(&self, site: &str, container: &str, post_id: &str) -> String {
        format!("{}/publishing", self.post_url(site, container, post_id))
    }

    /// `/blog/site/{site}/{container}/posts`
    pub(crate) fn posts_url(&self, site: &str, container: &str) -> String {
        format!(
            "{}/blog/site/{}/{}/posts",
            self.base_url,
            urlencoding::encode(site),
            urlencoding::encode(container)
        )
    }

    fn require_post_id(post_id: &str) -> Result<()> {
        if post_id.is_empty() {
            return Err(ApiError::InvalidParameter {
                param: "post_id".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    // ============ 操作 ============

    /// List the posts of a site's blog container.
    pub async fn list_posts(&self, site: &str, container: &str) -> Result<Vec<BlogPost>> {
        let url = self.posts_url(site, container);
        let ctx = RequestContext::site(site);
        let resp: PostListResponse = self.get_json(&url, &ctx).await?;
        Ok(resp.items)
    }

    /// Fetch a single post.
    pub async fn get_post(&self, site: &str, container: &str, post_id: &str) -> Result<BlogPost> {
        Self::require_post_id(post_id)?;
        let url = self.post_url(site, container, post_id);
        let ctx = RequestContext::post(site, post_id);
        let resp: ItemResponse = self.get_json(&url, &ctx).await?;
        Ok(resp.item)
    }

    /// Create a new post. Returns the stored post, whose `name` is the
    /// server-assigned identifier for subsequent navigation.
    pub async fn create_post(
        &self,
        site: &str,
        container: &str,
        req: &SavePostRequest,
    ) -> Result<BlogPost> {
        let url = self.posts_url(site, container);
        let ctx = RequestContext::site(site);
        let resp: ItemResponse = self.post_json(&url, req, &ctx).await?;
        Ok(resp.item)
    }

    /// Save changes to an existing post.
    pub async fn save_post(
        &self,
        site: &str,
        container: &str,
        post_id: &str,
        req: &SavePostRequest,
    ) -> Result<BlogPost> {
        Self::require_post_id(post_id)?;
        let url = self.post_url(site, container, post_id);
        let ctx = RequestContext::post(site, post_id);
        let resp: ItemResponse = self.put_json(&url, req, &ctx).await?;
        Ok(resp.item)
    }

    /// Delete a post.
    pub async fn delete_post(&self, site: &str, container: &str, post_id: &str) -> Result<()> {
        Self::require_post_id(post_id)?;
        let url = self.post_url(site, container, post_id);
        let ctx = RequestContext::post(site, post_id);
        self.delete_unit(&url, &ctx).await
    }

    /// Drive the external-publishing state of a post
    /// (`publish`, `update` or `unpublish`).
    pub async fn publishing(
        &self,
        site: &str,
        container: &str,
        post_id: &str,
        action: PublishingAction,
    ) -> Result<()> {
        Self::require_post_id(post_id)?;
        let url = self.publishing_url(site, container, post_id);
        let ctx = RequestContext::post(site, post_id);
        let body = PublishingRequest { action };
        log::debug!("publishing action '{}' for post '{post_id}'", action.as_str());
        self.post_unit(&url, &body, &ctx).await
    }
}
