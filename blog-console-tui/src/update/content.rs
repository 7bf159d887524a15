//! 内容面板更新逻辑
//!
//! 列表导航直接改状态；选中项的操作（编辑/删除/发布等）不直接执行，
//! 而是组装成操作链接的 class + 元素 id，走命令表分发 ——
//! 和鼠标点击操作链接是同一条路径。

use crate::backend::BlogService;
use crate::i18n::{self, t};
use crate::interact::PostAction;
use crate::message::ContentMessage;
use crate::model::state::FormState;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme;

/// 处理内容面板消息
pub fn update(app: &mut App, service: &BlogService, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => match &app.current_page {
            Page::Settings => app.settings.select_previous(),
            _ => app.posts.select_previous(),
        },
        ContentMessage::SelectNext => match &app.current_page {
            Page::Settings => app.settings.select_next(),
            _ => app.posts.select_next(),
        },
        ContentMessage::SelectFirst => {
            app.posts.select_first();
        }
        ContentMessage::SelectLast => {
            app.posts.select_last();
        }
        ContentMessage::SelectRow(index) => {
            app.posts.select(index);
        }
        ContentMessage::Confirm => {
            open_selected(app, service);
        }

        // ========== 选中项操作 ==========
        ContentMessage::Add => {
            app.form = Some(FormState::new_create());
            app.navigate(Page::PostEdit { post_id: None });
            app.focus = FocusPanel::Content;
        }
        ContentMessage::Edit => {
            dispatch_for_target(app, service, PostAction::Edit);
        }
        ContentMessage::Delete => {
            dispatch_for_target(app, service, PostAction::Delete);
        }
        ContentMessage::Publish => {
            dispatch_for_target(app, service, PostAction::PublishExternal);
        }
        ContentMessage::UpdateExternal => {
            dispatch_for_target(app, service, PostAction::UpdateExternal);
        }
        ContentMessage::Unpublish => {
            dispatch_for_target(app, service, PostAction::UnpublishExternal);
        }

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => {
            toggle_setting(app, false);
        }
        ContentMessage::ToggleNext => {
            toggle_setting(app, true);
        }
    }
}

/// 打开当前选中的文章（列表页 Enter / 点击行）
pub(crate) fn open_selected(app: &mut App, service: &BlogService) {
    if !matches!(app.current_page, Page::PostList) {
        return;
    }
    if let Some(post) = app.posts.selected_post() {
        let post_id = post.name.clone();
        app.navigate(Page::PostView {
            post_id: post_id.clone(),
        });
        super::begin_view_load(app, service, &post_id);
    }
}

/// 当前操作针对的文章标识（列表页取选中行，查看页取正在看的文章）
fn target_post_id(app: &App) -> Option<String> {
    match &app.current_page {
        Page::PostList => app.posts.selected_post().map(|p| p.name.clone()),
        Page::PostView { post_id } => Some(post_id.clone()),
        _ => None,
    }
}

/// 把键盘操作走到命令表：组装操作链接的 class 和元素 id 再分发
///
/// 操作表未绑定（没有文章上下文）时分发会被拒绝，与点击路径一致。
fn dispatch_for_target(app: &mut App, service: &BlogService, action: PostAction) {
    let Some(post_id) = target_post_id(app) else {
        return;
    };
    let element_id = action.element_id(&post_id);
    if let Some(cmd) = app.actions.dispatch(action.class_name(), &element_id) {
        super::apply_action(app, service, cmd);
    }
}

/// 设置页：切换当前设置项的取值
fn toggle_setting(app: &mut App, forward: bool) {
    if !matches!(app.current_page, Page::Settings) {
        return;
    }
    match app.settings.selected {
        // 语言
        0 => {
            let lang = if forward {
                i18n::current_language().next()
            } else {
                i18n::current_language().prev()
            };
            i18n::set_language(lang);
            app.set_status(format!("Language: {}", lang.display_name()));
        }
        // 主题
        1 => {
            theme::toggle_theme();
            let name = match theme::current_theme_index() {
                0 => t().settings.theme_dark,
                _ => t().settings.theme_light,
            };
            app.set_status(format!("{}: {name}", t().settings.theme));
        }
        _ => {}
    }
}
