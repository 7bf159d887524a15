//! 编辑表单消息

use crate::model::state::StyleTag;

/// 编辑表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 输入一个字符（标题或正文，取决于焦点）
    Input(char),
    /// 删除光标前的字符
    Backspace,
    /// 删除光标处的字符
    Delete,
    /// 正文换行
    Newline,

    // ========== 光标移动（正文编辑器） ==========
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    // ========== 字段焦点 ==========
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,

    /// 切换草稿开关
    ToggleDraft,

    /// 在光标处插入格式标记
    ApplyStyle(StyleTag),

    /// 提交表单
    Submit,
    /// 取消（返回上一页）
    Cancel,
}
