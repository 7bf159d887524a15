//! 设置页面状态

/// 设置项数量（语言、主题）
pub const SETTINGS_ITEM_COUNT: usize = 2;

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项
    pub selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < SETTINGS_ITEM_COUNT - 1 {
            self.selected += 1;
        }
    }
}
