//! 操作命令的执行
//!
//! 命令表分发出的 `ActionCommand` 在这里落地。编辑是纯客户端跳转；
//! 其余每个命令对应一次 HTTP 调用加一个后续界面效果
//! （跳转或整页刷新，见 `update::backend`）。

use blog_console_client::PublishingAction;

use crate::backend::BlogService;
use crate::i18n::t;
use crate::interact::{ActionCommand, PostAction};
use crate::model::state::FormState;
use crate::model::{App, FocusPanel, Page};

/// 执行一个操作命令
pub fn apply(app: &mut App, service: &BlogService, cmd: ActionCommand) {
    let post_id = cmd.target;
    match cmd.action {
        // 纯客户端跳转到编辑页，不发请求
        PostAction::Edit => {
            app.form = Some(FormState::new_edit(post_id.clone()));
            app.navigate(Page::PostEdit {
                post_id: Some(post_id.clone()),
            });
            app.focus = FocusPanel::Content;
            app.set_status(t().messages.loading_post);
            service.load_post(&post_id);
        }

        PostAction::Delete => {
            service.delete_post(&post_id);
        }

        PostAction::PublishExternal => {
            service.publishing(&post_id, PublishingAction::Publish);
        }

        PostAction::UpdateExternal => {
            service.publishing(&post_id, PublishingAction::Update);
        }

        PostAction::UnpublishExternal => {
            service.publishing(&post_id, PublishingAction::Unpublish);
        }
    }
}
