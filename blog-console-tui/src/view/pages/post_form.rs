//! 文章编辑表单视图
//!
//! 标题输入、格式工具栏、多行正文编辑器、草稿开关和确定/取消按钮。
//! 工具栏按钮与确定/取消登记为可点击区域，点击与键盘走同一条消息路径。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::interact::{ClickTarget, HitAreaRegistry};
use crate::model::App;
use crate::model::state::{FormField, FormState, StyleTag};
use crate::view::theme::colors;

/// 渲染文章编辑表单
pub fn render(app: &App, frame: &mut Frame, area: Rect, hit_areas: &mut HitAreaRegistry) {
    let texts = t();
    let c = colors();

    let Some(form) = app.form.as_ref() else {
        return;
    };

    if form.loading {
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("  {}", texts.common.loading),
                Style::default().fg(c.muted),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 标题（标签 + 输入）
            Constraint::Length(1), // 格式工具栏
            Constraint::Length(1), // 正文标签
            Constraint::Min(3),    // 正文编辑器
            Constraint::Length(1), // 草稿开关
            Constraint::Length(1), // 按钮行
            Constraint::Length(1), // 错误信息
        ])
        .split(area);

    render_title_field(form, frame, rows[0]);
    render_toolbar(form, frame, rows[1], hit_areas);
    render_content_label(frame, rows[2]);
    render_editor(form, frame, rows[3]);
    render_draft_toggle(form, frame, rows[4]);
    render_buttons(form, frame, rows[5], hit_areas);
    render_error_line(form, frame, rows[6]);
}

/// 标题输入
fn render_title_field(form: &FormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = form.focus == FormField::Title;

    let label_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value = if form.title.is_empty() && !focused {
        Line::styled(
            format!("  {}", texts.post_form.title_placeholder),
            Style::default().fg(c.muted),
        )
    } else if focused {
        Line::styled(format!("  {}▎", form.title), Style::default().fg(c.fg))
    } else {
        Line::styled(format!("  {}", form.title), Style::default().fg(c.fg))
    };

    let lines = vec![
        Line::styled(format!(" {}", texts.post_form.title_label), label_style),
        value,
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 工具栏按钮（格式标记）
const TOOLBAR: &[(StyleTag, &str)] = &[
    (StyleTag::Bold, "B"),
    (StyleTag::Italic, "I"),
    (StyleTag::Underline, "U"),
    (StyleTag::BulletedList, "•≡"),
    (StyleTag::NumberedList, "1≡"),
    (StyleTag::Link, "🔗"),
];

/// 工具栏按钮对应的 i18n 名称（悬浮提示的替代：跟在按钮后的组标签）
fn toolbar_groups() -> [(&'static str, std::ops::Range<usize>); 3] {
    let texts = t();
    [
        (texts.post_form.font_group, 0..3),
        (texts.post_form.list_group, 3..5),
        (texts.post_form.link_group, 5..6),
    ]
}

/// 渲染格式工具栏
fn render_toolbar(form: &FormState, frame: &mut Frame, area: Rect, hit_areas: &mut HitAreaRegistry) {
    let c = colors();
    let enabled = form.focus == FormField::Content;

    let button_style = if enabled {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.muted)
    };
    let group_style = Style::default().fg(c.muted);

    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;

    for (group_label, range) in toolbar_groups() {
        for (tag, label) in &TOOLBAR[range] {
            let text = format!("[{label}]");
            let width = text.width() as u16;
            hit_areas.register(
                Rect::new(x, area.y, width, 1),
                ClickTarget::FormStyle(*tag),
            );
            spans.push(Span::styled(text, button_style));
            x += width;
        }
        let group = format!(" {group_label}  ");
        x += group.width() as u16;
        spans.push(Span::styled(group, group_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 正文标签
fn render_content_label(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {}", texts.post_form.content_label),
            Style::default().fg(c.muted),
        )),
        area,
    );
}

/// 渲染正文编辑器
///
/// 光标行在字符边界处拆开，中间画一个竖线光标；
/// 行窗口跟随光标滚动。
fn render_editor(form: &FormState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = form.focus == FormField::Content;
    let (cursor_row, cursor_col) = form.editor.cursor();

    if area.height == 0 {
        return;
    }
    let height = area.height as usize;
    let first = cursor_row.saturating_sub(height.saturating_sub(1));

    let text_style = Style::default().fg(c.fg);
    let mut lines: Vec<Line> = Vec::new();

    for (row, content) in form
        .editor
        .lines()
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
    {
        if focused && row == cursor_row {
            let split = content
                .char_indices()
                .nth(cursor_col)
                .map_or(content.len(), |(idx, _)| idx);
            let (before, after) = content.split_at(split);
            lines.push(Line::from(vec![
                Span::styled(format!("  {before}"), text_style),
                Span::styled("▎", Style::default().fg(c.highlight)),
                Span::styled(after.to_string(), text_style),
            ]));
        } else {
            lines.push(Line::styled(format!("  {content}"), text_style));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 草稿开关
fn render_draft_toggle(form: &FormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = form.focus == FormField::Draft;

    let mark = if form.draft { "x" } else { " " };
    let style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" [{mark}] {}", texts.post_form.draft_label),
            style,
        )),
        area,
    );
}

/// 确定/取消按钮
fn render_buttons(form: &FormState, frame: &mut Frame, area: Rect, hit_areas: &mut HitAreaRegistry) {
    let texts = t();
    let c = colors();

    // 新建用"确定"，编辑已有文章用"保存"
    let ok_label = if form.is_create() {
        format!("[ {} ]", texts.common.ok)
    } else {
        format!("[ {} ]", texts.common.save)
    };
    let cancel_label = format!("[ {} ]", texts.common.cancel);

    // 提交不可用（标题为空 / 在途提交）时确定按钮置灰
    let ok_style = if !form.can_submit() {
        Style::default().fg(c.muted)
    } else if form.focus == FormField::Ok {
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.success)
    };

    let cancel_style = if form.focus == FormField::Cancel {
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let ok_width = ok_label.width() as u16;
    let cancel_width = cancel_label.width() as u16;
    let ok_x = area.x + 1;
    let cancel_x = ok_x + ok_width + 2;

    hit_areas.register(Rect::new(ok_x, area.y, ok_width, 1), ClickTarget::FormOk);
    hit_areas.register(
        Rect::new(cancel_x, area.y, cancel_width, 1),
        ClickTarget::FormCancel,
    );

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(ok_label, ok_style),
        Span::raw("  "),
        Span::styled(cancel_label, cancel_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 表单级错误信息
fn render_error_line(form: &FormState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let Some(ref error) = form.error else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" ⚠ {error}"),
            Style::default().fg(c.error),
        )),
        area,
    );
}
