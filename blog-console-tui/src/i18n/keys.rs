//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `post_list.*`, `post_form.*`
//! 3. **操作结果提示归 `messages.*`**：状态栏 toast 使用的文本
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 文章列表页面文本
    pub post_list: PostListTexts,
    /// 文章查看页面文本
    pub post_view: PostViewTexts,
    /// 文章编辑表单文本
    pub post_form: PostFormTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 操作结果提示（状态栏 toast）
    pub messages: MessageTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub edit: &'static str,
    pub delete: &'static str,
    pub publish: &'static str,
    pub update: &'static str,
    pub unpublish: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub ok: &'static str,
    pub quit: &'static str,
    // 状态词
    pub loading: &'static str,
    pub error: &'static str,
    pub draft: &'static str,
    pub published: &'static str,
    // 导航词
    pub back: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub arrows_lr: &'static str, // "←→"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub switch_panel: &'static str,
    pub open: &'static str,
    pub submit: &'static str,
    pub new_post: &'static str,
    pub edit_post: &'static str,
    pub delete_post: &'static str,
    pub next_field: &'static str,
    pub modify: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub posts: &'static str,
    pub new_post: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 文章列表页面文本
pub struct PostListTexts {
    pub title: &'static str,
    pub no_posts: &'static str,
    pub by: &'static str,
    pub external_tag: &'static str,
}

/// 文章查看页面文本
pub struct PostViewTexts {
    pub title: &'static str,
    pub author: &'static str,
    pub status: &'static str,
    pub status_external: &'static str,
    pub not_loaded: &'static str,
}

/// 文章编辑表单文本
pub struct PostFormTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub content_label: &'static str,
    pub draft_label: &'static str,
    // 编辑器工具栏分组
    pub font_group: &'static str,
    pub list_group: &'static str,
    pub link_group: &'static str,
    // 工具栏按钮
    pub bold: &'static str,
    pub italic: &'static str,
    pub underline: &'static str,
    pub bulleted: &'static str,
    pub numbered: &'static str,
    pub link: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

// ============================================================================
// 操作结果提示
// ============================================================================

/// 操作结果提示（状态栏 toast 使用）
pub struct MessageTexts {
    pub failed_delete: &'static str,
    pub failed_submit: &'static str,
    pub published: &'static str,
    pub updated: &'static str,
    pub unpublished: &'static str,
    pub publish_failed: &'static str,
    pub update_failed: &'static str,
    pub unpublish_failed: &'static str,
    pub deleted: &'static str,
    pub loading_posts: &'static str,
    pub loading_post: &'static str,
    pub load_failed: &'static str,
    pub saving: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub error_title: &'static str,
    pub help_title: &'static str,
    pub help_global: &'static str,
    pub help_list: &'static str,
    pub help_form: &'static str,
    pub press_any_key: &'static str,
}
