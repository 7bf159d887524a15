//! 文章查看页面状态

use blog_console_client::BlogPost;

/// 文章查看页面状态
#[derive(Debug, Default)]
pub struct PostViewState {
    /// 已加载的文章
    pub post: Option<BlogPost>,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
}

impl PostViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始加载（清掉上一篇的内容）
    pub fn begin_loading(&mut self) {
        self.post = None;
        self.loading = true;
        self.error = None;
    }

    /// 设置加载结果
    pub fn set_post(&mut self, post: BlogPost) {
        self.post = Some(post);
        self.loading = false;
        self.error = None;
    }

    /// 记录加载失败
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
