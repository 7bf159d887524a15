//! 文章查看页面视图
//!
//! 查看页的操作工具栏是列表行悬停控件的对应物：同一组操作链接，
//! 这里始终可见。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::interact::{ClickTarget, HitAreaRegistry};
use crate::model::App;
use crate::view::theme::colors;

use super::action_links;

/// 渲染文章查看页面
pub fn render(app: &App, frame: &mut Frame, area: Rect, hit_areas: &mut HitAreaRegistry) {
    let texts = t();
    let c = colors();

    if let Some(ref error) = app.post_view.error {
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("  {}: {error}", texts.common.error),
                Style::default().fg(c.error),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    if app.post_view.loading {
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

    let Some(ref post) = app.post_view.post else {
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("  {}", texts.post_view.not_loaded),
                Style::default().fg(c.muted),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    // 第一行：操作工具栏
    if area.height > 0 {
        let links = action_links(post.external_published);
        let mut x = area.x;
        let y = area.y;
        let mut spans = Vec::with_capacity(links.len());
        for link in &links {
            let link_rect = Rect::new(x, y, link.width(), 1);
            hit_areas.register(
                link_rect,
                ClickTarget::ActionLink {
                    class_name: link.action.class_name(),
                    element_id: link.action.element_id(&post.name),
                },
            );
            spans.push(link.span(None));
            x += link.width();
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    if area.height <= 1 {
        return;
    }
    let body_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);

    let status = if post.is_draft {
        texts.common.draft.to_string()
    } else if post.external_published {
        format!("{} · {}", texts.common.published, texts.post_view.status_external)
    } else {
        texts.common.published.to_string()
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", post.title),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.post_view.author),
                Style::default().fg(c.muted),
            ),
            Span::styled(
                post.author.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(c.fg),
            ),
            Span::styled(
                format!("   {}: ", texts.post_view.status),
                Style::default().fg(c.muted),
            ),
            Span::styled(status, Style::default().fg(c.highlight)),
        ]),
        Line::from(""),
    ];

    // 正文按存储的标记文本原样显示，不做富文本解析
    for content_line in post.content.split('\n') {
        lines.push(Line::styled(
            format!("  {content_line}"),
            Style::default().fg(c.fg),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body_area);
}
