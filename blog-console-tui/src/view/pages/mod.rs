//! 各页面视图
//!
//! 列表页和查看页在渲染时登记操作链接的可点击区域；
//! 列表页还把每一行及行内子块登记进悬停追踪器。

pub mod post_form;
pub mod post_list;
pub mod post_view;
pub mod settings;

use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::interact::PostAction;
use crate::view::theme::colors;

/// 行内操作链接：文本 + 对应操作
pub(super) struct ActionLink {
    pub action: PostAction,
    pub label: &'static str,
}

impl ActionLink {
    /// 渲染宽度（含左右各一格留白）
    pub fn width(&self) -> u16 {
        self.label.width() as u16 + 2
    }

    /// 链接文本的样式化 Span（删除用警示色）
    pub fn span(&self, hovered_bg: Option<Style>) -> Span<'static> {
        let c = colors();
        let fg = match self.action {
            PostAction::Delete => c.error,
            PostAction::Edit => c.highlight,
            _ => c.warning,
        };
        let mut style = Style::default().fg(fg);
        if let Some(bg) = hovered_bg {
            style = style.patch(bg);
        }
        Span::styled(format!(" {} ", self.label), style)
    }
}

/// 一篇文章可用的操作链接
///
/// 已发布到外部的文章提供"更新/撤下"，未发布的提供"发布"；
/// 编辑与删除始终可用。
pub(super) fn action_links(external_published: bool) -> Vec<ActionLink> {
    let texts = crate::i18n::t();
    let mut links = vec![
        ActionLink {
            action: PostAction::Edit,
            label: texts.common.edit,
        },
        ActionLink {
            action: PostAction::Delete,
            label: texts.common.delete,
        },
    ];
    if external_published {
        links.push(ActionLink {
            action: PostAction::UpdateExternal,
            label: texts.common.update,
        });
        links.push(ActionLink {
            action: PostAction::UnpublishExternal,
            label: texts.common.unpublish,
        });
    } else {
        links.push(ActionLink {
            action: PostAction::PublishExternal,
            label: texts.common.publish,
        });
    }
    links
}
