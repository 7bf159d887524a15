//!
//! src/interact/mod.rs
//! Interact 层：鼠标交互的三块基础设施
//!
//! 有模块结构：
//!     src/interact/mod.rs
//!         mod actions;        // 操作命令表（class name → PostAction）
//!         mod hit_area;       // 可点击区域注册表
//!         mod rollover;       // 列表行悬停追踪
//!
//! 三者的分工：
//!     - `HitAreaRegistry` 在每帧渲染时由 View 层重建，记录"哪里可以点"；
//!       鼠标按下时做命中测试，得到一个 `ClickTarget`。
//!     - `ActionTable` 把命中的操作链接（class name + 元素 id）翻译成
//!       `ActionCommand`，绑定关系在启动时显式建立，未绑定的 class 一律拒绝。
//!     - `RolloverTracker` 在鼠标移动时维护"当前悬停在哪一行"，
//!       只在真正跨越行边界时发出 Entered / Exited 事件，
//!       行内子区域之间的移动不会重复触发。
//!

mod actions;
mod hit_area;
mod rollover;

pub use actions::{ActionCommand, ActionTable, PostAction};
pub use hit_area::{ClickTarget, HitArea, HitAreaRegistry};
pub use rollover::{RolloverEvent, RolloverTracker};
