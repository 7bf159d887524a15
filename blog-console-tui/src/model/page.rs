//! 页面状态定义

/// 页面枚举
///
/// 对应服务器端的三个博客页面（列表 / 查看 / 编辑）加本地设置页。
/// 站点与容器参数由 `Options` 携带，不进入页面枚举。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 文章列表
    #[default]
    PostList,
    /// 查看单篇文章
    PostView {
        post_id: String,
    },
    /// 编辑 / 新建文章（`post_id` 为 `None` 时是新建）
    PostEdit {
        post_id: Option<String>,
    },
    /// 设置
    Settings,
}

impl Page {
    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::PostView { .. } | Page::PostEdit { .. })
    }

    /// 是否是新建表单页
    pub fn is_create_form(&self) -> bool {
        matches!(self, Page::PostEdit { post_id: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages() {
        assert!(!Page::PostList.is_detail_page());
        assert!(!Page::Settings.is_detail_page());
        assert!(
            Page::PostView {
                post_id: "p".into()
            }
            .is_detail_page()
        );
        assert!(Page::PostEdit { post_id: None }.is_detail_page());
    }

    #[test]
    fn create_form_detection() {
        assert!(Page::PostEdit { post_id: None }.is_create_form());
        assert!(
            !Page::PostEdit {
                post_id: Some("p".into())
            }
            .is_create_form()
        );
    }
}
