//! 应用主状态结构

use crate::i18n::{self, Language};
use crate::interact::{ActionTable, HitAreaRegistry, RolloverTracker};
use crate::view::theme;

use super::state::{FormState, ModalState, PostViewState, PostsState, SettingsState};
use super::{FocusPanel, History, Mode, NavItemId, NavigationState, Options, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 页面历史（支撑"返回上一页"）
    pub history: History,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 启动选项（构造后只读）
    pub options: Options,

    // === 各页面状态 ===
    /// 文章列表页面状态
    pub posts: PostsState,
    /// 文章查看页面状态
    pub post_view: PostViewState,
    /// 编辑表单状态（只在 edit/create 注册）
    pub form: Option<FormState>,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    // === 交互基础设施 ===
    /// 操作命令表（绑定后点击才会分发）
    pub actions: ActionTable,
    /// 悬停追踪器
    pub rollover: RolloverTracker,
    /// 可点击区域注册表（每帧由 View 层重建）
    pub hit_areas: HitAreaRegistry,
}

impl App {
    /// 按启动选项创建应用实例
    ///
    /// 模式决定初始页面与表单注册；操作表和悬停订阅只在存在文章上下文时
    /// 建立（纯新建表单没有可操作的文章）。
    pub fn from_options(options: Options) -> Self {
        // 语言、主题在进入主循环之前生效
        if let Some(code) = options.language.as_deref() {
            match Language::from_code(code) {
                Some(lang) => i18n::set_language(lang),
                None => log::warn!("unknown language code '{code}', keeping default"),
            }
        }
        if let Some(name) = options.theme.as_deref() {
            theme::set_theme_by_name(name);
        }

        let (current_page, form) = Self::initial_page(&options);

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page,
            history: History::new(),
            status_message: None,
            options,
            posts: PostsState::new(),
            post_view: PostViewState::new(),
            form,
            settings: SettingsState::new(),
            modal: ModalState::new(),
            actions: ActionTable::new(),
            rollover: RolloverTracker::new(),
            hit_areas: HitAreaRegistry::new(),
        };

        if !app.options.post_id.is_empty() {
            app.wire_post_context();
        }

        app.sync_navigation_selection();
        app
    }

    /// 模式 → 初始页面与表单
    fn initial_page(options: &Options) -> (Page, Option<FormState>) {
        match options.mode {
            Mode::Create => (Page::PostEdit { post_id: None }, Some(FormState::new_create())),
            Mode::Edit if !options.post_id.is_empty() => (
                Page::PostEdit {
                    post_id: Some(options.post_id.clone()),
                },
                Some(FormState::new_edit(options.post_id.clone())),
            ),
            // 没有目标文章的编辑退化为新建
            Mode::Edit => (Page::PostEdit { post_id: None }, Some(FormState::new_create())),
            Mode::View if !options.post_id.is_empty() => (
                Page::PostView {
                    post_id: options.post_id.clone(),
                },
                None,
            ),
            // 未指定模式（或没有目标的查看）落在文章列表
            Mode::View | Mode::Unset => (Page::PostList, None),
        }
    }

    /// 建立文章上下文的交互：绑定操作表、安装悬停订阅
    ///
    /// 可以重复调用（列表每次加载后都会再走一遍）；
    /// 操作绑定与订阅安装各自幂等。
    pub fn wire_post_context(&mut self) {
        if !self.actions.is_bound() {
            self.actions = ActionTable::bind_defaults();
        }
        if self.rollover.install_handlers() {
            log::debug!("rollover handlers installed");
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 跳转到新页面（旧页面入栈）
    pub fn navigate(&mut self, page: Page) {
        if self.current_page == page {
            return;
        }
        let old = std::mem::replace(&mut self.current_page, page);
        self.history.push(old);
        self.rollover.clear_hover();
        self.clear_status();
        self.sync_navigation_selection();
    }

    /// 返回上一页；没有历史时返回 `false`
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(page) => {
                self.current_page = page;
                self.rollover.clear_hover();
                self.clear_status();
                self.sync_navigation_selection();
                true
            }
            None => false,
        }
    }

    /// 让左侧导航高亮跟随当前页面
    fn sync_navigation_selection(&mut self) {
        let id = match &self.current_page {
            Page::PostList | Page::PostView { .. } => NavItemId::Posts,
            Page::PostEdit { .. } => NavItemId::NewPost,
            Page::Settings => NavItemId::Settings,
        };
        if let Some(index) = self.navigation.items.iter().position(|item| item.id == id) {
            self.navigation.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    fn options(mode: Mode, post_id: &str) -> Options {
        Options {
            site_id: "S".to_string(),
            post_id: post_id.to_string(),
            mode,
            ..Options::default()
        }
    }

    #[test]
    fn unset_mode_starts_on_list_without_form_or_wiring() {
        let app = App::from_options(options(Mode::Unset, ""));
        assert_eq!(app.current_page, Page::PostList);
        assert!(app.form.is_none());
        assert!(!app.actions.is_bound());
        assert!(!app.rollover.handlers_installed());
    }

    #[test]
    fn create_mode_registers_form_but_no_post_wiring() {
        let app = App::from_options(options(Mode::Create, ""));
        assert_eq!(app.current_page, Page::PostEdit { post_id: None });
        assert!(app.form.as_ref().is_some_and(super::FormState::is_create));
        assert!(!app.actions.is_bound());
        assert!(!app.rollover.handlers_installed());
    }

    #[test]
    fn edit_mode_with_post_registers_form_and_wires_actions() {
        let app = App::from_options(options(Mode::Edit, "abc123"));
        assert_eq!(
            app.current_page,
            Page::PostEdit {
                post_id: Some("abc123".to_string())
            }
        );
        let form = app.form.as_ref().unwrap();
        assert!(!form.is_create());
        assert!(form.loading);
        assert!(app.actions.is_bound());
        assert!(app.rollover.handlers_installed());
    }

    #[test]
    fn view_mode_with_post_opens_view_page() {
        let app = App::from_options(options(Mode::View, "abc123"));
        assert_eq!(
            app.current_page,
            Page::PostView {
                post_id: "abc123".to_string()
            }
        );
        assert!(app.form.is_none());
        assert!(app.actions.is_bound());
    }

    #[test]
    fn navigate_and_go_back_round_trip() {
        let mut app = App::from_options(options(Mode::Unset, ""));
        app.navigate(Page::PostView {
            post_id: "a".to_string(),
        });
        assert!(app.current_page.is_detail_page());
        assert!(app.go_back());
        assert_eq!(app.current_page, Page::PostList);
        assert!(!app.go_back());
    }

    #[test]
    fn navigate_to_same_page_does_not_stack_history() {
        let mut app = App::from_options(options(Mode::Unset, ""));
        app.navigate(Page::PostList);
        assert!(app.history.is_empty());
    }

    #[test]
    fn wire_post_context_is_idempotent() {
        let mut app = App::from_options(options(Mode::Unset, ""));
        app.wire_post_context();
        app.wire_post_context();
        assert!(app.actions.is_bound());
        assert!(app.rollover.handlers_installed());
    }
}
