//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::interact::{HitAreaRegistry, RolloverTracker};
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
///
/// 每帧先把两张交互注册表取出并清空，渲染过程中按绘制顺序重建，
/// 最后放回 —— 命中测试和悬停判定始终基于屏幕上实际画出的内容。
pub fn render(app: &mut App, frame: &mut Frame) {
    let mut hit_areas = std::mem::take(&mut app.hit_areas);
    let mut rollover = std::mem::take(&mut app.rollover);
    hit_areas.clear();
    rollover.clear_regions();

    render_frame(app, frame, &mut hit_areas, &mut rollover);

    app.hit_areas = hit_areas;
    app.rollover = rollover;
}

fn render_frame(
    app: &App,
    frame: &mut Frame,
    hit_areas: &mut HitAreaRegistry,
    rollover: &mut RolloverTracker,
) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area, hit_areas);

    // 渲染右侧内容
    render_page_content(app, frame, page_area, hit_areas, rollover);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut title = format!(" {} v0.1.0", t().common.app_name);
    if !app.options.site_id.is_empty() {
        title.push_str(&format!("  [{}/{}]", app.options.site_id, app.options.container_id));
    }
    let title = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    hit_areas: &mut HitAreaRegistry,
    rollover: &mut RolloverTracker,
) {
    let texts = t();
    let c = colors();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    // 根据当前页面获取 i18n 标题
    let page_title = match &app.current_page {
        Page::PostList => texts.post_list.title,
        Page::PostView { .. } => texts.post_view.title,
        Page::PostEdit { post_id: None } => texts.post_form.create_title,
        Page::PostEdit { post_id: Some(_) } => texts.post_form.edit_title,
        Page::Settings => texts.settings.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match &app.current_page {
        Page::PostList => pages::post_list::render(app, frame, inner_area, hit_areas, rollover),
        Page::PostView { .. } => pages::post_view::render(app, frame, inner_area, hit_areas),
        Page::PostEdit { .. } => pages::post_form::render(app, frame, inner_area, hit_areas),
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}
