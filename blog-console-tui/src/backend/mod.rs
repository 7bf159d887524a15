//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦：Update 层调用这里的方法发起操作，
//! 操作在 tokio 运行时上异步执行，结果以 `BackendEvent` 通过 channel
//! 回到主循环，再作为消息进入 Update 层。
//!
//! 数据流：
//!     用户触发操作（点击操作链接 / 表单确认）
//!         ↓
//!     Update 层调用 BlogService 的对应方法
//!         ↓
//!     tokio 任务执行 blog-console-client 的 HTTP 调用（单次，不重试）
//!         ↓
//!     结果包成 BackendEvent 发入 channel
//!         ↓
//!     主循环排空 channel → update(app, AppMessage::Backend(..))
//!         ↓
//!     View 层下一帧读取更新后的 Model
//!

mod service;

pub use service::BlogService;
