//! HTTP 请求方法
//!
//! Unified request execution for the blog endpoints: send, log, map the HTTP
//! status to a structured error, decode JSON. Requests are deliberately
//! single-shot — a network failure is reported as-is and never retried.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::BlogApiClient;
use crate::error::{ApiError, Result};

/// Identifiers the current request is about, used to build precise
/// not-found errors from a bare 404.
pub(crate) struct RequestContext<'a> {
    pub site: &'a str,
    pub post_id: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn site(site: &'a str) -> Self {
        Self {
            site,
            post_id: None,
        }
    }

    pub fn post(site: &'a str, post_id: &'a str) -> Self {
        Self {
            site,
            post_id: Some(post_id),
        }
    }
}

impl BlogApiClient {
    /// 执行 GET 请求并解析 JSON 响应
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        ctx: &RequestContext<'_>,
    ) -> Result<T> {
        let text = self.execute(self.http.get(url), "GET", url, ctx).await?;
        parse_json(&text)
    }

    /// 执行 POST 请求并解析 JSON 响应
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        ctx: &RequestContext<'_>,
    ) -> Result<T> {
        let text = self
            .execute(self.http.post(url).json(body), "POST", url, ctx)
            .await?;
        parse_json(&text)
    }

    /// 执行 PUT 请求并解析 JSON 响应
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        ctx: &RequestContext<'_>,
    ) -> Result<T> {
        let text = self
            .execute(self.http.put(url).json(body), "PUT", url, ctx)
            .await?;
        parse_json(&text)
    }

    /// 执行 POST 请求，忽略响应体
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        ctx: &RequestContext<'_>,
    ) -> Result<()> {
        self.execute(self.http.post(url).json(body), "POST", url, ctx)
            .await?;
        Ok(())
    }

    /// 执行 DELETE 请求，忽略响应体
    pub(crate) async fn delete_unit(&self, url: &str, ctx: &RequestContext<'_>) -> Result<()> {
        self.execute(self.http.delete(url), "DELETE", url, ctx)
            .await?;
        Ok(())
    }

    /// 发送请求，返回成功响应的正文
    ///
    /// Unified processing: send the request, log, read the body and map
    /// non-success statuses to [`ApiError`] variants.
    async fn execute(
        &self,
        request_builder: RequestBuilder,
        method: &str,
        url: &str,
        ctx: &RequestContext<'_>,
    ) -> Result<String> {
        log::debug!("{method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| ApiError::NetworkError {
            detail: format!("读取响应失败: {e}"),
        })?;

        if !(200..300).contains(&status) {
            let err = status_error(status, body, ctx);
            if err.is_expected() {
                log::warn!("{method} {url} failed: {err}");
            } else {
                log::error!("{method} {url} failed: {err}");
            }
            return Err(err);
        }

        Ok(body)
    }
}

/// 将非 2xx 状态码映射为结构化错误
fn status_error(status: u16, body: String, ctx: &RequestContext<'_>) -> ApiError {
    let raw_message = if body.is_empty() { None } else { Some(body) };
    match status {
        404 => match ctx.post_id {
            Some(post_id) => ApiError::PostNotFound {
                post_id: post_id.to_string(),
                raw_message,
            },
            None => ApiError::SiteNotFound {
                site: ctx.site.to_string(),
                raw_message,
            },
        },
        401 | 403 => ApiError::PermissionDenied { raw_message },
        _ => ApiError::Unknown {
            status: Some(status),
            raw_message: raw_message.unwrap_or_default(),
        },
    }
}

/// 解析 JSON 响应
pub(crate) fn parse_json<T: DeserializeOwned>(response_text: &str) -> Result<T> {
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON 解析失败: {e}");
        log::error!("原始响应: {response_text}");
        ApiError::ParseError {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- status_error ----

    #[test]
    fn status_404_with_post_id_maps_to_post_not_found() {
        let ctx = RequestContext::post("S", "abc123");
        let err = status_error(404, String::new(), &ctx);
        assert!(
            matches!(&err, ApiError::PostNotFound { post_id, .. } if post_id == "abc123"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn status_404_without_post_id_maps_to_site_not_found() {
        let ctx = RequestContext::site("marketing");
        let err = status_error(404, "no such site".to_string(), &ctx);
        assert!(
            matches!(&err, ApiError::SiteNotFound { site, raw_message }
                if site == "marketing" && raw_message.as_deref() == Some("no such site")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn status_401_maps_to_permission_denied() {
        let ctx = RequestContext::site("S");
        let err = status_error(401, String::new(), &ctx);
        assert!(matches!(err, ApiError::PermissionDenied { .. }));
    }

    #[test]
    fn status_403_maps_to_permission_denied() {
        let ctx = RequestContext::post("S", "p");
        let err = status_error(403, String::new(), &ctx);
        assert!(matches!(err, ApiError::PermissionDenied { .. }));
    }

    #[test]
    fn other_statuses_map_to_unknown() {
        let ctx = RequestContext::site("S");
        let err = status_error(500, "boom".to_string(), &ctx);
        assert!(
            matches!(&err, ApiError::Unknown { status: Some(500), raw_message } if raw_message == "boom"),
            "unexpected error: {err:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
