//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, NavigationMessage};
use crate::model::state::{FormField, StyleTag};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
///
/// 移动交给悬停追踪器，左键按下走统一的命中测试分发；
/// 其余（滚轮、拖动等）暂不处理。
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Moved => AppMessage::MouseMoved {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Down(MouseButton::Left) => AppMessage::MouseDown {
            column: mouse.column,
            row: mouse.row,
        },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 无条件退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 编辑表单获得内容焦点时，按键优先进表单（字符要进编辑器）
    if matches!(app.current_page, Page::PostEdit { .. }) && app.focus.is_content() {
        return handle_form_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_PUBLISH.matches(&key) {
        return AppMessage::Content(ContentMessage::Publish);
    }
    if DefaultKeymap::ACTION_UPDATE.matches(&key) {
        return AppMessage::Content(ContentMessage::UpdateExternal);
    }
    if DefaultKeymap::ACTION_UNPUBLISH.matches(&key) {
        return AppMessage::Content(ContentMessage::Unpublish);
    }

    // 根据当前页面处理特定按键
    match &app.current_page {
        Page::Settings => handle_settings_keys(key),
        _ => handle_list_keys(key),
    }
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ←: 切换到上一个值
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        // →: 切换到下一个值
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理编辑表单的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    let Some(form) = app.form.as_ref() else {
        return AppMessage::Noop;
    };

    // 提交 / 取消
    if DefaultKeymap::FORM_SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    // 格式标记（只对正文有意义）
    if form.focus == FormField::Content {
        if DefaultKeymap::STYLE_BOLD.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::Bold));
        }
        if DefaultKeymap::STYLE_ITALIC.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::Italic));
        }
        if DefaultKeymap::STYLE_UNDERLINE.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::Underline));
        }
        if DefaultKeymap::STYLE_BULLETED.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::BulletedList));
        }
        if DefaultKeymap::STYLE_NUMBERED.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::NumberedList));
        }
        if DefaultKeymap::STYLE_LINK.matches(&key) {
            return AppMessage::Form(FormMessage::ApplyStyle(StyleTag::Link));
        }
    }

    match key.code {
        // Tab / Shift+Tab: 字段循环
        KeyCode::Tab => AppMessage::Form(FormMessage::NextField),
        KeyCode::BackTab => AppMessage::Form(FormMessage::PrevField),

        // Enter 的含义取决于焦点
        KeyCode::Enter => match form.focus {
            FormField::Ok => AppMessage::Form(FormMessage::Submit),
            FormField::Cancel => AppMessage::Form(FormMessage::Cancel),
            FormField::Draft => AppMessage::Form(FormMessage::ToggleDraft),
            FormField::Title => AppMessage::Form(FormMessage::NextField),
            FormField::Content => AppMessage::Form(FormMessage::Newline),
        },

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Delete => AppMessage::Form(FormMessage::Delete),

        // 光标移动：正文内移动光标，其他字段上下移动焦点
        KeyCode::Left if form.focus == FormField::Content => {
            AppMessage::Form(FormMessage::CursorLeft)
        }
        KeyCode::Right if form.focus == FormField::Content => {
            AppMessage::Form(FormMessage::CursorRight)
        }
        KeyCode::Up => {
            if form.focus == FormField::Content {
                AppMessage::Form(FormMessage::CursorUp)
            } else {
                AppMessage::Form(FormMessage::PrevField)
            }
        }
        KeyCode::Down => {
            if form.focus == FormField::Content {
                AppMessage::Form(FormMessage::CursorDown)
            } else {
                AppMessage::Form(FormMessage::NextField)
            }
        }

        // 空格在草稿开关/按钮上是激活，在输入字段里是普通字符
        KeyCode::Char(' ') if form.focus == FormField::Draft => {
            AppMessage::Form(FormMessage::ToggleDraft)
        }
        KeyCode::Char(' ') if form.focus == FormField::Ok => AppMessage::Form(FormMessage::Submit),
        KeyCode::Char(' ') if form.focus == FormField::Cancel => {
            AppMessage::Form(FormMessage::Cancel)
        }

        // 字符输入
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
///
/// 帮助和错误弹窗只响应关闭按键。
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::CloseModal,
        _ => AppMessage::Noop,
    }
}
