//! 博客服务
//!
//! 封装 blog-console-client，把每个操作放到 tokio 运行时上执行，
//! 完成后通过 channel 把 `BackendEvent` 发回主循环。
//! 站点与容器来自启动选项，此后不变。
//!
//! 不做在途请求的取消：每个操作都跑到完成，由 Update 层决定
//! 结果落地时如何处理。

use std::sync::Arc;

use blog_console_client::{BlogApiClient, PublishingAction, SavePostRequest};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::BackendEvent;
use crate::model::Options;

/// TUI 的博客服务入口
///
/// 持有 API 客户端与结果通道的发送端，提供给 Update 层调用。
pub struct BlogService {
    client: Arc<BlogApiClient>,
    site: String,
    container: String,
    handle: Handle,
    tx: UnboundedSender<BackendEvent>,
}

impl BlogService {
    /// 创建服务实例，返回 (服务, 结果接收端)
    ///
    /// 接收端由主循环持有，每轮循环排空一次。
    pub fn new(options: &Options, handle: Handle) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            client: Arc::new(BlogApiClient::new(options.base_url.clone())),
            site: options.site_id.clone(),
            container: options.container_id.clone(),
            handle,
            tx,
        };
        (service, rx)
    }

    /// 加载文章列表
    pub fn load_posts(&self) {
        let client = self.client.clone();
        let site = self.site.clone();
        let container = self.container.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.list_posts(&site, &container).await;
            tx.send(BackendEvent::PostsLoaded(result)).ok();
        });
    }

    /// 加载单篇文章
    pub fn load_post(&self, post_id: &str) {
        let client = self.client.clone();
        let site = self.site.clone();
        let container = self.container.clone();
        let post_id = post_id.to_string();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.get_post(&site, &container, &post_id).await;
            tx.send(BackendEvent::PostLoaded(result)).ok();
        });
    }

    /// 删除文章
    pub fn delete_post(&self, post_id: &str) {
        let client = self.client.clone();
        let site = self.site.clone();
        let container = self.container.clone();
        let post_id = post_id.to_string();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.delete_post(&site, &container, &post_id).await;
            tx.send(BackendEvent::PostDeleted { post_id, result }).ok();
        });
    }

    /// 外部发布操作（publish / update / unpublish）
    pub fn publishing(&self, post_id: &str, action: PublishingAction) {
        let client = self.client.clone();
        let site = self.site.clone();
        let container = self.container.clone();
        let post_id = post_id.to_string();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client
                .publishing(&site, &container, &post_id, action)
                .await;
            tx.send(BackendEvent::PublishingDone {
                action,
                post_id,
                result,
            })
            .ok();
        });
    }

    /// 提交表单：`post_id` 为 `None` 时新建，否则保存
    pub fn submit(&self, post_id: Option<String>, req: SavePostRequest) {
        let client = self.client.clone();
        let site = self.site.clone();
        let container = self.container.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let (created, result) = match post_id {
                None => (true, client.create_post(&site, &container, &req).await),
                Some(id) => (false, client.save_post(&site, &container, &id, &req).await),
            };
            tx.send(BackendEvent::PostSaved { created, result }).ok();
        });
    }
}
