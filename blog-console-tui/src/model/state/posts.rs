//! 文章列表页面状态

use blog_console_client::BlogPost;

/// 文章列表页面状态
#[derive(Debug, Default)]
pub struct PostsState {
    /// 文章列表
    pub posts: Vec<BlogPost>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
}

impl PostsState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.posts.is_empty() && self.selected < self.posts.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.posts.is_empty() {
            self.selected = self.posts.len() - 1;
        }
    }

    /// 选中指定索引（鼠标点击行时使用）
    pub fn select(&mut self, index: usize) {
        if index < self.posts.len() {
            self.selected = index;
        }
    }

    /// 获取当前选中的文章
    pub fn selected_post(&self) -> Option<&BlogPost> {
        self.posts.get(self.selected)
    }

    /// 按标识查找文章
    pub fn post_by_name(&self, name: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.name == name)
    }

    /// 设置文章列表（整体替换，选中项回到第一项）
    pub fn set_posts(&mut self, posts: Vec<BlogPost>) {
        self.posts = posts;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// 记录加载失败
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
