//! 可点击区域注册表
//!
//! View 层在每帧渲染时重建注册表：先 `clear()`，再按绘制顺序 `register()`。
//! 鼠标按下时做一次命中测试，得到被点中的 `ClickTarget`，
//! 由 Update 层统一分发 —— 整个应用只有这一个点击分发入口。

use ratatui::layout::Rect;

/// 点击目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// 左侧导航的第 n 项
    NavItem(usize),
    /// 文章列表的第 n 行
    PostRow(usize),
    /// 操作链接（class name + 元素 id，交给命令表分发）
    ActionLink {
        class_name: &'static str,
        element_id: String,
    },
    /// 表单确定按钮
    FormOk,
    /// 表单取消按钮
    FormCancel,
    /// 编辑器工具栏的格式按钮
    FormStyle(crate::model::state::StyleTag),
}

/// 一块可点击区域
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub target: ClickTarget,
}

/// 可点击区域注册表
///
/// 后注册的区域绘制在上层，命中测试从后往前找。
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空注册表（每帧渲染开始时调用）
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// 注册一块可点击区域
    pub fn register(&mut self, rect: Rect, target: ClickTarget) {
        self.areas.push(HitArea { rect, target });
    }

    /// 命中测试：返回坐标处最上层的点击目标
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&ClickTarget> {
        self.areas
            .iter()
            .rev()
            .find(|area| contains(area.rect, column, row))
            .map(|area| &area.target)
    }

    /// 已注册区域数量
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// 坐标是否落在矩形内
fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, w: u16, h: u16) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn hit_test_misses_outside() {
        let mut reg = HitAreaRegistry::new();
        reg.register(rect(0, 0, 10, 1), ClickTarget::NavItem(0));
        assert_eq!(reg.hit_test(10, 0), None);
        assert_eq!(reg.hit_test(0, 1), None);
    }

    #[test]
    fn hit_test_finds_containing_area() {
        let mut reg = HitAreaRegistry::new();
        reg.register(rect(2, 3, 5, 1), ClickTarget::PostRow(7));
        assert_eq!(reg.hit_test(2, 3), Some(&ClickTarget::PostRow(7)));
        assert_eq!(reg.hit_test(6, 3), Some(&ClickTarget::PostRow(7)));
    }

    #[test]
    fn last_registered_wins_on_overlap() {
        let mut reg = HitAreaRegistry::new();
        reg.register(rect(0, 0, 20, 1), ClickTarget::PostRow(0));
        reg.register(
            rect(10, 0, 4, 1),
            ClickTarget::ActionLink {
                class_name: "onDeleteNode",
                element_id: "onDeleteNode-a".to_string(),
            },
        );
        // 行内的操作链接覆盖整行区域
        assert!(matches!(
            reg.hit_test(11, 0),
            Some(ClickTarget::ActionLink { .. })
        ));
        // 链接之外仍命中行本身
        assert_eq!(reg.hit_test(3, 0), Some(&ClickTarget::PostRow(0)));
    }

    #[test]
    fn clear_resets_registry() {
        let mut reg = HitAreaRegistry::new();
        reg.register(rect(0, 0, 5, 1), ClickTarget::FormOk);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.hit_test(0, 0), None);
    }
}
