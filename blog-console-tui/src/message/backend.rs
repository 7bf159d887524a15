//! 后台调用结果消息
//!
//! Backend 层把每次异步调用的结果包成一个事件发回主循环，
//! 由 Update 层统一消费 —— 回调只在对应请求完成后触发，
//! 不同请求之间没有顺序保证。

use blog_console_client::{ApiError, BlogPost, PublishingAction};

/// 后台调用结果
#[derive(Debug)]
pub enum BackendEvent {
    /// 文章列表加载完成
    PostsLoaded(Result<Vec<BlogPost>, ApiError>),

    /// 单篇文章加载完成
    PostLoaded(Result<BlogPost, ApiError>),

    /// 删除完成
    PostDeleted {
        post_id: String,
        result: Result<(), ApiError>,
    },

    /// 外部发布操作完成
    PublishingDone {
        action: PublishingAction,
        post_id: String,
        result: Result<(), ApiError>,
    },

    /// 表单提交完成（新建或保存）
    PostSaved {
        created: bool,
        result: Result<BlogPost, ApiError>,
    },
}
