//! 应用主消息枚举

use super::{BackendEvent, ContentMessage, FormMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 编辑表单相关消息
    Form(FormMessage),

    /// 后台调用结果
    Backend(BackendEvent),

    /// 鼠标移动（交给悬停追踪器判定进入/离开）
    MouseMoved { column: u16, row: u16 },

    /// 鼠标左键按下（命中测试后统一分发）
    MouseDown { column: u16, row: u16 },

    /// 返回上一页
    GoBack,

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭当前弹窗
    CloseModal,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
