//! 列表行悬停追踪
//!
//! 每一行是一个根区域，行内展开的编辑控件和操作链接注册为它的子区域。
//! 指针移动时先找到坐标处最内层的区域，再沿 parent 链向上走到根，
//! 用"根是否变化"来判定一次真正的进入/离开 —— 在同一行的子区域之间
//! 移动不会重复触发事件。
//!
//! 全局订阅只安装一次：列表每次重绘都会重新注册区域，
//! 但 `install_handlers` 由实例内的标志位守护，重复调用是空操作。

use ratatui::layout::Rect;

/// 悬停边界事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolloverEvent {
    /// 指针进入了某一行
    Entered(String),
    /// 指针离开了某一行
    Exited(String),
}

#[derive(Debug)]
struct Region {
    rect: Rect,
    parent: Option<usize>,
    /// 只有根区域携带行键（文章标识）
    key: Option<String>,
}

/// 悬停追踪器
#[derive(Debug, Default)]
pub struct RolloverTracker {
    regions: Vec<Region>,
    hovered: Option<String>,
    handlers_installed: bool,
}

impl RolloverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空已注册的区域（列表重绘时调用）
    ///
    /// 不影响全局订阅标志，也不影响当前悬停状态 ——
    /// 重绘本身不代表指针移动了。
    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    /// 注册一行（根区域），返回区域索引供子区域挂载
    pub fn register_row(&mut self, key: impl Into<String>, rect: Rect) -> usize {
        self.regions.push(Region {
            rect,
            parent: None,
            key: Some(key.into()),
        });
        self.regions.len() - 1
    }

    /// 注册行内的子区域（编辑控件块、操作链接等）
    pub fn register_child(&mut self, parent: usize, rect: Rect) -> usize {
        debug_assert!(parent < self.regions.len());
        self.regions.push(Region {
            rect,
            parent: Some(parent),
            key: None,
        });
        self.regions.len() - 1
    }

    /// 安装全局悬停订阅
    ///
    /// 只有第一次调用真正安装并返回 `true`；之后的调用是空操作。
    pub fn install_handlers(&mut self) -> bool {
        if self.handlers_installed {
            return false;
        }
        self.handlers_installed = true;
        true
    }

    /// 全局订阅是否已安装
    pub fn handlers_installed(&self) -> bool {
        self.handlers_installed
    }

    /// 当前悬停的行键
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// 强制清除悬停状态（切换页面时调用）
    pub fn clear_hover(&mut self) -> Option<RolloverEvent> {
        self.hovered.take().map(RolloverEvent::Exited)
    }

    /// 处理一次指针移动，返回跨越行边界产生的事件
    ///
    /// 返回值按发生顺序排列：先 `Exited`（如果离开了某行），
    /// 后 `Entered`（如果进入了某行）。
    pub fn track_move(&mut self, column: u16, row: u16) -> Vec<RolloverEvent> {
        if !self.handlers_installed {
            return Vec::new();
        }

        let current = self.resolve_row(column, row);
        if current == self.hovered {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.hovered.take() {
            events.push(RolloverEvent::Exited(old));
        }
        if let Some(new) = current.clone() {
            events.push(RolloverEvent::Entered(new));
        }
        self.hovered = current;
        events
    }

    /// 把坐标解析到它所属的行键
    ///
    /// 先取坐标处最内层的区域（子区域在父区域之后注册、绘制在上层，
    /// 所以从后往前找第一个包含坐标的），再沿 parent 链向上走到根。
    fn resolve_row(&self, column: u16, row: u16) -> Option<String> {
        let mut idx = self
            .regions
            .iter()
            .rposition(|r| contains(r.rect, column, row))?;

        while let Some(parent) = self.regions[idx].parent {
            idx = parent;
        }
        self.regions[idx].key.clone()
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 两行列表，第一行带一个编辑控件子区域和一个删除链接子区域
    fn tracker() -> RolloverTracker {
        let mut t = RolloverTracker::new();
        t.install_handlers();
        let row_a = t.register_row("post-a", Rect::new(0, 0, 40, 1));
        t.register_child(row_a, Rect::new(30, 0, 4, 1)); // 编辑控件块
        t.register_child(row_a, Rect::new(35, 0, 4, 1)); // 删除链接
        t.register_row("post-b", Rect::new(0, 1, 40, 1));
        t
    }

    #[test]
    fn entering_a_row_fires_once() {
        let mut t = tracker();
        assert_eq!(
            t.track_move(5, 0),
            vec![RolloverEvent::Entered("post-a".to_string())]
        );
        // 同一行内移动不再触发
        assert_eq!(t.track_move(6, 0), Vec::new());
        assert_eq!(t.hovered(), Some("post-a"));
    }

    #[test]
    fn moving_between_children_of_the_same_row_fires_nothing() {
        let mut t = tracker();
        t.track_move(5, 0);
        // 行正文 → 编辑控件 → 删除链接 → 行正文
        assert_eq!(t.track_move(31, 0), Vec::new());
        assert_eq!(t.track_move(36, 0), Vec::new());
        assert_eq!(t.track_move(2, 0), Vec::new());
        assert_eq!(t.hovered(), Some("post-a"));
    }

    #[test]
    fn leaving_a_row_fires_exited_once() {
        let mut t = tracker();
        t.track_move(5, 0);
        assert_eq!(
            t.track_move(5, 10),
            vec![RolloverEvent::Exited("post-a".to_string())]
        );
        assert_eq!(t.hovered(), None);
        // 已经在外面，继续移动不再触发
        assert_eq!(t.track_move(6, 10), Vec::new());
    }

    #[test]
    fn crossing_directly_between_rows_fires_exit_then_enter() {
        let mut t = tracker();
        t.track_move(5, 0);
        assert_eq!(
            t.track_move(5, 1),
            vec![
                RolloverEvent::Exited("post-a".to_string()),
                RolloverEvent::Entered("post-b".to_string()),
            ]
        );
        assert_eq!(t.hovered(), Some("post-b"));
    }

    #[test]
    fn no_events_before_handlers_installed() {
        let mut t = RolloverTracker::new();
        t.register_row("post-a", Rect::new(0, 0, 40, 1));
        assert_eq!(t.track_move(5, 0), Vec::new());
        assert_eq!(t.hovered(), None);
    }

    #[test]
    fn handlers_install_exactly_once() {
        let mut t = RolloverTracker::new();
        assert!(t.install_handlers());
        assert!(!t.install_handlers());
        assert!(!t.install_handlers());
        assert!(t.handlers_installed());
    }

    #[test]
    fn reregistering_regions_keeps_subscriptions_and_hover() {
        let mut t = tracker();
        t.track_move(5, 0);

        // 列表重绘：重新注册区域
        t.clear_regions();
        let row_a = t.register_row("post-a", Rect::new(0, 0, 40, 1));
        t.register_child(row_a, Rect::new(30, 0, 4, 1));
        t.register_row("post-b", Rect::new(0, 1, 40, 1));
        assert!(!t.install_handlers()); // 再次 attach 不会重复安装

        assert_eq!(t.hovered(), Some("post-a"));
        // 悬停状态连续：仍在同一行内移动不触发
        assert_eq!(t.track_move(31, 0), Vec::new());
    }

    #[test]
    fn clear_hover_reports_exit() {
        let mut t = tracker();
        t.track_move(5, 0);
        assert_eq!(
            t.clear_hover(),
            Some(RolloverEvent::Exited("post-a".to_string()))
        );
        assert_eq!(t.clear_hover(), None);
    }
}
