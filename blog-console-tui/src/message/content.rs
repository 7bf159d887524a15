//! 内容面板消息
//!
//! 列表导航、选中项操作和设置页的取值切换。

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开选中的文章）
    Confirm,
    /// 鼠标点击选中某一行
    SelectRow(usize),

    // ========== 选中项操作 ==========
    /// 新建文章
    Add,
    /// 编辑当前选中/正在查看的文章
    Edit,
    /// 删除当前选中/正在查看的文章
    Delete,
    /// 发布到外部博客
    Publish,
    /// 更新外部博客上的副本
    UpdateExternal,
    /// 从外部博客撤下
    Unpublish,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值
    TogglePrev,
    /// 切换到下一个值
    ToggleNext,
}
