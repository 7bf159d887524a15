//! Blog Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Interact**: 鼠标交互基础设施 (`interact/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! main.rs 的执行顺序：
//!
//!     Options::load()         // 配置文件 + 环境变量，显式合并
//!     App::from_options()     // 模式决定初始页面与表单注册
//!     BlogService::new()      // API 客户端 + 结果通道，挂在 tokio 运行时上
//!     refresh_current_page()  // 启动页的数据加载（整页加载语义）
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod interact;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 网络调用的运行时（UI 循环本身保持同步）
    let runtime = tokio::runtime::Runtime::new()?;

    // 2. 加载启动选项，创建应用实例
    let options = model::Options::load();
    let mut app = model::App::from_options(options);

    // 3. 创建博客服务与结果通道
    let (service, mut backend_rx) =
        backend::BlogService::new(&app.options, runtime.handle().clone());

    // 4. 启动页数据加载
    update::refresh_current_page(&mut app, &service);

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &service, &mut backend_rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 返回结果
    result
}
