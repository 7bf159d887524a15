//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((texts.hints.keys.tab, texts.hints.actions.switch_panel));
            hints.push((texts.hints.keys.arrows_ud, texts.hints.actions.navigate));
            hints.push((texts.hints.keys.enter, texts.hints.actions.open));
        }
        FocusPanel::Content => match &app.current_page {
            Page::PostList => {
                hints.push((texts.hints.keys.arrows_ud, texts.hints.actions.select));
                hints.push((texts.hints.keys.enter, texts.hints.actions.open));
                hints.push(("Alt+a", texts.hints.actions.new_post));
                hints.push(("Alt+e", texts.hints.actions.edit_post));
                hints.push(("Alt+d", texts.hints.actions.delete_post));
            }
            Page::PostView { .. } => {
                hints.push(("Alt+e", texts.hints.actions.edit_post));
                hints.push(("Alt+d", texts.hints.actions.delete_post));
                hints.push((texts.hints.keys.esc, texts.common.back));
            }
            Page::PostEdit { .. } => {
                hints.push((texts.hints.keys.tab, texts.hints.actions.next_field));
                hints.push(("Ctrl+s", texts.hints.actions.submit));
                hints.push((texts.hints.keys.esc, texts.common.cancel));
            }
            Page::Settings => {
                hints.push((texts.hints.keys.arrows_ud, texts.hints.actions.select));
                hints.push((texts.hints.keys.arrows_lr, texts.hints.actions.modify));
            }
        },
    }

    // Quit
    hints.push(("Alt+q", texts.common.quit));

    hints
}
