//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model 状态绘制界面，不产生消息、不改业务状态。
//! 唯一的例外是两张交互注册表：渲染即声明"哪里可以点、哪里算一行"，
//! 所以每一帧都由这里先清空再按绘制顺序重建
//! `HitAreaRegistry` 与 `RolloverTracker` 的区域（悬停状态
//! 与订阅标志不受重建影响）。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 导航/内容分栏 + 状态栏）
//!         mod components;     // 跨页面组件（导航栏、状态栏、弹窗）
//!         mod pages;          // 各页面视图
//!         pub mod theme;      // 主题与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
