//! 操作命令表
//!
//! 操作链接携带一个 class name（标识操作种类）和一个元素 id
//! （`"<class>-<目标文章>"`）。命令表在启动时显式绑定 class → 操作，
//! 点击时查表分发；未绑定的 class 或格式错误的元素 id 一律拒绝并记录警告，
//! 不会静默忽略。

/// 文章操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    /// 跳转到编辑页（纯客户端跳转，不发请求）
    Edit,
    /// 删除文章
    Delete,
    /// 发布到外部博客
    PublishExternal,
    /// 更新外部博客上的副本
    UpdateExternal,
    /// 从外部博客撤下
    UnpublishExternal,
}

impl PostAction {
    /// 操作链接使用的 class name
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Edit => "onEditNode",
            Self::Delete => "onDeleteNode",
            Self::PublishExternal => "onPublishExternal",
            Self::UpdateExternal => "onUpdateExternal",
            Self::UnpublishExternal => "onUnpublishExternal",
        }
    }

    /// 构造操作链接的元素 id（`"<class>-<文章标识>"`）
    pub fn element_id(self, post_id: &str) -> String {
        format!("{}-{}", self.class_name(), post_id)
    }
}

/// 分发结果：操作 + 从元素 id 中解析出的目标文章标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCommand {
    pub action: PostAction,
    pub target: String,
}

/// class name → 操作 的绑定表
///
/// 绑定关系在启动时显式建立；`dispatch` 只认表内的 class。
#[derive(Debug, Default)]
pub struct ActionTable {
    bindings: Vec<(&'static str, PostAction)>,
}

impl ActionTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建绑定了全部默认操作的表
    pub fn bind_defaults() -> Self {
        let mut table = Self::new();
        for action in [
            PostAction::Edit,
            PostAction::Delete,
            PostAction::PublishExternal,
            PostAction::UpdateExternal,
            PostAction::UnpublishExternal,
        ] {
            table.bind(action);
        }
        table
    }

    /// 绑定一个操作（以它的 class name 为键）
    pub fn bind(&mut self, action: PostAction) {
        let class_name = action.class_name();
        if self.bindings.iter().any(|(c, _)| *c == class_name) {
            return;
        }
        self.bindings.push((class_name, action));
    }

    /// 是否已有任何绑定
    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// 分发一次点击
    ///
    /// `class_name` 是操作链接的 class；`element_id` 形如
    /// `"<class>-<文章标识>"`，目标是第一个 `"<class>-"` 前缀之后的子串。
    /// 未绑定的 class 或缺少前缀的 id 返回 `None` 并记录警告。
    pub fn dispatch(&self, class_name: &str, element_id: &str) -> Option<ActionCommand> {
        let Some((_, action)) = self.bindings.iter().find(|(c, _)| *c == class_name) else {
            log::warn!("no action bound for class '{class_name}', ignoring click");
            return None;
        };

        let prefix = format!("{class_name}-");
        let Some(target) = element_id.strip_prefix(&prefix) else {
            log::warn!("element id '{element_id}' does not carry prefix '{prefix}', ignoring click");
            return None;
        };

        if target.is_empty() {
            log::warn!("element id '{element_id}' carries an empty target, ignoring click");
            return None;
        }

        Some(ActionCommand {
            action: *action,
            target: target.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_delete_extracts_target() {
        let table = ActionTable::bind_defaults();
        let cmd = table.dispatch("onDeleteNode", "onDeleteNode-abc123");
        assert_eq!(
            cmd,
            Some(ActionCommand {
                action: PostAction::Delete,
                target: "abc123".to_string(),
            })
        );
    }

    #[test]
    fn dispatch_each_bound_class() {
        let table = ActionTable::bind_defaults();
        for (class, action) in [
            ("onEditNode", PostAction::Edit),
            ("onDeleteNode", PostAction::Delete),
            ("onPublishExternal", PostAction::PublishExternal),
            ("onUpdateExternal", PostAction::UpdateExternal),
            ("onUnpublishExternal", PostAction::UnpublishExternal),
        ] {
            let cmd = table.dispatch(class, &format!("{class}-my-post"));
            assert_eq!(
                cmd,
                Some(ActionCommand {
                    action,
                    target: "my-post".to_string(),
                }),
                "class {class}"
            );
        }
    }

    #[test]
    fn dispatch_unknown_class_rejected() {
        let table = ActionTable::bind_defaults();
        assert_eq!(table.dispatch("onFrobnicate", "onFrobnicate-x"), None);
    }

    #[test]
    fn dispatch_unbound_class_rejected_on_empty_table() {
        let table = ActionTable::new();
        assert_eq!(table.dispatch("onDeleteNode", "onDeleteNode-x"), None);
    }

    #[test]
    fn dispatch_id_without_prefix_rejected() {
        let table = ActionTable::bind_defaults();
        assert_eq!(table.dispatch("onDeleteNode", "abc123"), None);
        // 前缀必须属于同一个 class
        assert_eq!(table.dispatch("onDeleteNode", "onEditNode-abc123"), None);
    }

    #[test]
    fn dispatch_empty_target_rejected() {
        let table = ActionTable::bind_defaults();
        assert_eq!(table.dispatch("onDeleteNode", "onDeleteNode-"), None);
    }

    #[test]
    fn target_may_itself_contain_dashes() {
        let table = ActionTable::bind_defaults();
        let cmd = table.dispatch("onEditNode", "onEditNode-my-long-post-name");
        assert_eq!(cmd.unwrap().target, "my-long-post-name");
    }

    #[test]
    fn bind_is_idempotent() {
        let mut table = ActionTable::new();
        table.bind(PostAction::Delete);
        table.bind(PostAction::Delete);
        let cmd = table.dispatch("onDeleteNode", "onDeleteNode-x");
        assert!(cmd.is_some());
    }

    #[test]
    fn element_id_round_trip() {
        let table = ActionTable::bind_defaults();
        let id = PostAction::UnpublishExternal.element_id("abc");
        assert_eq!(id, "onUnpublishExternal-abc");
        let cmd = table.dispatch("onUnpublishExternal", &id).unwrap();
        assert_eq!(cmd.target, "abc");
    }
}
