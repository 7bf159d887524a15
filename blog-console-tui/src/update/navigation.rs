//! 导航栏更新逻辑

use crate::backend::BlogService;
use crate::message::NavigationMessage;
use crate::model::state::FormState;
use crate::model::{App, FocusPanel, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, service: &BlogService, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }
        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }
        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }
        NavigationMessage::Confirm => {
            enter_selected(app, service);
        }
        NavigationMessage::Activate(index) => {
            if index < app.navigation.items.len() {
                app.navigation.selected = index;
                enter_selected(app, service);
            }
        }
    }
}

/// 进入当前选中的导航项
fn enter_selected(app: &mut App, service: &BlogService) {
    match app.navigation.current_id() {
        Some(NavItemId::Posts) => {
            app.navigate(Page::PostList);
            super::begin_list_load(app, service);
            app.focus = FocusPanel::Content;
        }
        Some(NavItemId::NewPost) => {
            app.form = Some(FormState::new_create());
            app.navigate(Page::PostEdit { post_id: None });
            app.focus = FocusPanel::Content;
        }
        Some(NavItemId::Settings) => {
            app.navigate(Page::Settings);
            app.focus = FocusPanel::Content;
        }
        None => {}
    }
}
