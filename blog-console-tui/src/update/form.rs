//! 编辑表单更新逻辑
//!
//! 提交走 JSON：组装负载时把编辑器内容同步进去。提交在途时表单锁定，
//! 失败后表单保持打开、允许再次提交 —— 每次提交都是独立的单次尝试。

use crate::backend::BlogService;
use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::state::FormField;
use crate::model::{App, Page};

/// 处理编辑表单消息
pub fn update(app: &mut App, service: &BlogService, msg: FormMessage) {
    let Some(form) = app.form.as_mut() else {
        return;
    };

    match msg {
        FormMessage::Input(ch) => match form.focus {
            FormField::Title => form.title.push(ch),
            FormField::Content => form.editor.insert_char(ch),
            _ => {}
        },

        FormMessage::Backspace => match form.focus {
            FormField::Title => {
                form.title.pop();
            }
            FormField::Content => form.editor.backspace(),
            _ => {}
        },

        FormMessage::Delete => {
            if form.focus == FormField::Content {
                form.editor.delete();
            }
        }

        FormMessage::Newline => {
            if form.focus == FormField::Content {
                form.editor.newline();
            }
        }

        FormMessage::CursorLeft => form.editor.move_left(),
        FormMessage::CursorRight => form.editor.move_right(),
        FormMessage::CursorUp => form.editor.move_up(),
        FormMessage::CursorDown => form.editor.move_down(),

        FormMessage::NextField => form.focus = form.focus.next(),
        FormMessage::PrevField => form.focus = form.focus.prev(),

        FormMessage::ToggleDraft => form.draft = !form.draft,

        FormMessage::ApplyStyle(tag) => {
            if form.focus == FormField::Content {
                form.editor.apply_style(tag);
            }
        }

        FormMessage::Submit => {
            if !form.can_submit() {
                return;
            }
            form.submitting = true;
            form.error = None;
            let post_id = form.post_id.clone();
            let request = form.build_request();
            app.set_status(t().messages.saving);
            service.submit(post_id, request);
        }

        FormMessage::Cancel => {
            // 返回上一历史记录；直接以表单启动时没有历史，退到列表
            if app.go_back() {
                super::refresh_current_page(app, service);
            } else {
                app.navigate(Page::PostList);
                super::begin_list_load(app, service);
            }
        }
    }
}
