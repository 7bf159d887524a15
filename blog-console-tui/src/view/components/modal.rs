//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::i18n::t;
use crate::model::App;
use crate::model::state::Modal;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { message } => render_error(frame, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, message: &str) {
    let texts = t();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.error_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(texts.modal.press_any_key, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(55, 28, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section(texts.modal.help_global),
        Line::from(""),
        entry(texts.hints.keys.tab, texts.hints.actions.switch_panel),
        entry(texts.hints.keys.arrows_ud, texts.hints.actions.navigate),
        entry(texts.hints.keys.enter, texts.hints.actions.select),
        entry(texts.hints.keys.esc, texts.common.back),
        entry("Alt+q", texts.common.quit),
        Line::from(""),
        section(texts.modal.help_list),
        Line::from(""),
        entry("Alt+a", texts.hints.actions.new_post),
        entry("Alt+e", texts.common.edit),
        entry("Alt+d", texts.common.delete),
        entry("Alt+p", texts.common.publish),
        entry("Alt+u", texts.common.update),
        entry("Alt+n", texts.common.unpublish),
        Line::from(""),
        section(texts.modal.help_form),
        Line::from(""),
        entry("Ctrl+s", texts.hints.actions.submit),
        entry(texts.hints.keys.tab, texts.hints.actions.next_field),
        entry("Alt+b", texts.post_form.bold),
        entry("Alt+i", texts.post_form.italic),
        entry("Alt+s", texts.post_form.underline),
        entry("Alt+l", texts.post_form.bulleted),
        entry("Alt+o", texts.post_form.numbered),
        entry("Alt+k", texts.post_form.link),
        Line::from(""),
        Line::styled(texts.modal.press_any_key, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
