//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//! 键盘事件按以下优先级翻译：
//!     1. Ctrl+C 无条件退出
//!     2. 弹窗打开时只响应关闭键
//!     3. 编辑表单持有内容焦点时，按键优先进表单
//!        （字符要落进编辑器，Tab 在表单内循环字段）
//!     4. 全局快捷键（帮助 / 刷新 / 返回 / 切换面板 / 退出）
//!     5. 按焦点面板分发：导航键 或 各页面的内容键
//!
//! 鼠标事件只翻译成两种消息：
//!     - 移动  → `MouseMoved`，交给悬停追踪器判定行边界
//!     - 左键  → `MouseDown`，由 Update 层做命中测试后统一分发
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
