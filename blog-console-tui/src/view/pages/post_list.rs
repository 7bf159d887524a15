//! 文章列表页面视图
//!
//! 每一行登记为悬停追踪器的根区域；悬停行展开右侧的编辑控件块
//! （操作链接），控件块及每个链接登记为该行的子区域 ——
//! 指针在行内子区域之间移动不会触发进入/离开。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use blog_console_client::BlogPost;

use crate::i18n::t;
use crate::interact::{ClickTarget, HitAreaRegistry, RolloverTracker};
use crate::model::App;
use crate::view::theme::colors;

use super::action_links;

/// 渲染文章列表页面
pub fn render(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    hit_areas: &mut HitAreaRegistry,
    rollover: &mut RolloverTracker,
) {
    let texts = t();
    let c = colors();

    if let Some(ref error) = app.posts.error {
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

    if app.posts.loading && app.posts.posts.is_empty() {
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

    if app.posts.posts.is_empty() {
        render_empty(frame, area);
        return;
    }

    render_rows(app, frame, area, hit_areas, rollover);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.post_list.no_posts),
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled(
            format!("  Alt+a  {}", texts.hints.actions.new_post),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染文章行
fn render_rows(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    hit_areas: &mut HitAreaRegistry,
    rollover: &mut RolloverTracker,
) {
    if area.height == 0 {
        return;
    }

    // 保证选中行可见的滚动窗口
    let height = area.height as usize;
    let first = app.posts.selected.saturating_sub(height.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();

    for (offset, (index, post)) in app
        .posts
        .posts
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
        .enumerate()
    {
        let y = area.y + offset as u16;
        let row_rect = Rect::new(area.x, y, area.width, 1);

        // 行是悬停判定的根区域，同时整行可点击（打开文章）
        let row_region = rollover.register_row(post.name.clone(), row_rect);
        hit_areas.register(row_rect, ClickTarget::PostRow(index));

        let is_selected = index == app.posts.selected;
        let is_hovered = rollover.hovered() == Some(post.name.as_str());

        lines.push(row_line(post, is_selected, is_hovered));

        // 悬停行展开编辑控件块：整块和每个链接都是该行的子区域
        if is_hovered {
            let links = action_links(post.external_published);
            let total: u16 = links.iter().map(super::ActionLink::width).sum();
            if total < area.width {
                let bloc_x = area.x + area.width - total;
                let bloc_rect = Rect::new(bloc_x, y, total, 1);
                rollover.register_child(row_region, bloc_rect);

                let mut x = bloc_x;
                for link in &links {
                    let link_rect = Rect::new(x, y, link.width(), 1);
                    rollover.register_child(row_region, link_rect);
                    hit_areas.register(
                        link_rect,
                        ClickTarget::ActionLink {
                            class_name: link.action.class_name(),
                            element_id: link.action.element_id(&post.name),
                        },
                    );
                    x += link.width();
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);

    // 控件块要压在行文本上层，单独补画一遍
    if let Some(hovered) = rollover.hovered().map(str::to_string) {
        if let Some((index, post)) = app
            .posts
            .posts
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .find(|(_, p)| p.name == hovered)
        {
            let y = area.y + (index - first) as u16;
            render_links_overlay(post, index == app.posts.selected, y, area, frame);
        }
    }
}

/// 悬停行的背景样式
fn hover_bg(is_selected: bool) -> Style {
    let c = colors();
    if is_selected {
        Style::default().bg(c.selected_bg)
    } else {
        Style::default().bg(c.border)
    }
}

/// 行文本
fn row_line(post: &BlogPost, is_selected: bool, is_hovered: bool) -> Line<'static> {
    let texts = t();
    let c = colors();

    let prefix = if is_selected { "▶ " } else { "  " };
    let (status_icon, status_color) = if post.is_draft {
        ("○", c.warning)
    } else {
        ("●", c.success)
    };

    let mut base = Style::default().fg(c.fg);
    if is_selected {
        base = base
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD);
    } else if is_hovered {
        base = base.bg(c.border);
    }

    let status_style = base.fg(status_color);
    let dim_style = if is_selected { base } else { base.fg(c.muted) };

    let author = post
        .author
        .as_deref()
        .map(|a| format!("  {} {a}", texts.post_list.by))
        .unwrap_or_default();
    let external = if post.external_published {
        format!("  [{}]", texts.post_list.external_tag)
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(prefix.to_string(), base),
        Span::styled(status_icon.to_string(), status_style),
        Span::styled(" ".to_string(), base),
        Span::styled(post.title.clone(), base),
        Span::styled(author, dim_style),
        Span::styled(external, dim_style),
    ])
}

/// 在行文本上层补画操作链接块
fn render_links_overlay(post: &BlogPost, is_selected: bool, y: u16, area: Rect, frame: &mut Frame) {
    let links = action_links(post.external_published);
    let total: u16 = links.iter().map(super::ActionLink::width).sum();
    if total >= area.width {
        return;
    }
    let bloc_x = area.x + area.width - total;
    let bloc_rect = Rect::new(bloc_x, y, total, 1);
    let row_bg = hover_bg(is_selected);
    let spans: Vec<Span> = links.iter().map(|l| l.span(Some(row_bg))).collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).style(row_bg), bloc_rect);
}
