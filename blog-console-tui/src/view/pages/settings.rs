//! 设置页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{self, t};
use crate::model::App;
use crate::view::theme::{self, colors};

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 16;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    // === 语言设置 ===
    let lang_value = i18n::current_language().display_name();
    lines.push(render_setting_row(
        texts.settings.language,
        lang_value,
        settings.selected == 0,
    ));

    // === 主题设置 ===
    let theme_value = match theme::current_theme_index() {
        0 => texts.settings.theme_dark,
        _ => texts.settings.theme_light,
    };
    lines.push(render_setting_row(
        texts.settings.theme,
        theme_value,
        settings.selected == 1,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", texts.hints.keys.arrows_ud),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.select),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            texts.hints.keys.arrows_lr,
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.modify),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.tab, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.actions.switch_panel),
            Style::default().fg(c.muted),
        ),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    if is_selected {
        // 选中时显示 ◀ value ▶
        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(label, label_style),
            Span::raw(format!("{:width$}", "", width = label_padding)),
            Span::styled(": ", Style::default().fg(c.muted)),
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::styled(value, value_style),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        // 未选中时只显示值，但保持对齐
        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(label, label_style),
            Span::raw(format!("{:width$}", "", width = label_padding)),
            Span::styled(": ", Style::default().fg(c.muted)),
            Span::raw("  "), // 占位符，与 "◀ " 对齐
            Span::styled(value, value_style),
        ])
    }
}
