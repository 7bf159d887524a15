//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&mut app, f))    // 渲染 UI（重建交互注册表）
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(event) = backend_rx.try_recv() {   // 排空后台调用结果
//!         update::update(app, service, Backend(event))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, service, msg)          // 更新终端状态
//!     }
//! }
//!
//! 后台结果与用户输入走同一条 update 通道；排空发生在两次输入轮询
//! 之间，所以回调只会在对应请求完成后生效，且都在这个单线程
//! 循环里落地 —— 状态只被一个地方修改。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::BlogService;
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &BlogService,
    backend_rx: &mut UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 排空已完成的后台调用结果
        while let Ok(backend_event) = backend_rx.try_recv() {
            update::update(app, service, AppMessage::Backend(backend_event));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, service, msg);
        }
    }

    Ok(())
}
