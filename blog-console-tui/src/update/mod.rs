//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层消费 Message，是唯一可以修改 Model 的地方。
//! 需要副作用（网络调用）的分支通过 `BlogService` 发起异步操作，
//! 结果稍后以 `BackendEvent` 回到这里的 `backend` 子模块。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod actions;        // 操作命令的执行（删除/发布/编辑跳转）
//!         mod backend;        // 后台调用结果落地
//!         mod content;        // 内容面板子消息处理
//!         mod form;           // 编辑表单子消息处理
//!         mod navigation;     // 导航子消息处理
//!
//! 鼠标的两类消息也在这里消费：
//!     - `MouseMoved` 交给悬停追踪器，跨行边界时更新悬停状态
//!     - `MouseDown` 做一次命中测试，把命中目标翻译成对应的语义操作
//!       （整个应用只有这一个点击分发入口）
//!

mod actions;
mod backend;
mod content;
mod form;
mod navigation;

use crate::backend::BlogService;
use crate::i18n::t;
use crate::interact::ClickTarget;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, FocusPanel, Page};

pub use actions::apply as apply_action;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, service: &BlogService, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, service, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, service, content_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, service, form_msg);
        }

        AppMessage::Backend(event) => {
            backend::apply(app, service, event);
        }

        AppMessage::MouseMoved { column, row } => {
            handle_mouse_move(app, column, row);
        }

        AppMessage::MouseDown { column, row } => {
            handle_mouse_down(app, service, column, row);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.go_back() {
                refresh_current_page(app, service);
            }
        }

        AppMessage::Refresh => {
            refresh_current_page(app, service);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 鼠标移动：悬停追踪
///
/// 真正的进入/离开事件只在跨越行边界时产生；悬停行的高亮与
/// 编辑控件的显示由 View 层根据追踪器状态渲染。
fn handle_mouse_move(app: &mut App, column: u16, row: u16) {
    for event in app.rollover.track_move(column, row) {
        log::debug!("rollover: {event:?}");
    }
}

/// 鼠标按下：命中测试后统一分发
fn handle_mouse_down(app: &mut App, service: &BlogService, column: u16, row: u16) {
    if app.modal.is_open() {
        // 弹窗打开时点击视为关闭
        app.modal.close();
        return;
    }

    let Some(target) = app.hit_areas.hit_test(column, row).cloned() else {
        return;
    };

    match target {
        ClickTarget::NavItem(index) => {
            app.focus = FocusPanel::Navigation;
            navigation::update(
                app,
                service,
                crate::message::NavigationMessage::Activate(index),
            );
        }

        ClickTarget::PostRow(index) => {
            app.focus = FocusPanel::Content;
            content::update(
                app,
                service,
                crate::message::ContentMessage::SelectRow(index),
            );
            content::open_selected(app, service);
        }

        ClickTarget::ActionLink {
            class_name,
            element_id,
        } => {
            app.focus = FocusPanel::Content;
            if let Some(cmd) = app.actions.dispatch(class_name, &element_id) {
                actions::apply(app, service, cmd);
            }
        }

        ClickTarget::FormOk => {
            form::update(app, service, FormMessage::Submit);
        }

        ClickTarget::FormCancel => {
            form::update(app, service, FormMessage::Cancel);
        }

        ClickTarget::FormStyle(tag) => {
            form::update(app, service, FormMessage::ApplyStyle(tag));
        }
    }
}

/// 重新拉取当前页面的数据（整页刷新语义）
pub(crate) fn refresh_current_page(app: &mut App, service: &BlogService) {
    match app.current_page.clone() {
        Page::PostList => begin_list_load(app, service),
        Page::PostView { post_id } => begin_view_load(app, service, &post_id),
        Page::PostEdit {
            post_id: Some(post_id),
        } => {
            if let Some(form) = app.form.as_mut() {
                form.loading = true;
            }
            service.load_post(&post_id);
        }
        _ => {}
    }
}

/// 发起文章列表加载
pub(crate) fn begin_list_load(app: &mut App, service: &BlogService) {
    app.posts.loading = true;
    app.set_status(t().messages.loading_posts);
    service.load_posts();
}

/// 发起单篇文章加载（查看页）
pub(crate) fn begin_view_load(app: &mut App, service: &BlogService, post_id: &str) {
    app.post_view.begin_loading();
    app.set_status(t().messages.loading_post);
    service.load_post(post_id);
}
