//! 后台调用结果落地
//!
//! 每个 `BackendEvent` 对应一次已完成的 HTTP 调用。成功的变更操作
//! 一律以"整页"收尾：要么跳转页面，要么重新拉取当前页的数据，
//! 不做增量修补。失败则显示固定的本地化提示，不重试。

use blog_console_client::{ApiError, BlogPost, PublishingAction};

use crate::backend::BlogService;
use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::{App, Page};

/// 消费一个后台调用结果
pub fn apply(app: &mut App, service: &BlogService, event: BackendEvent) {
    match event {
        BackendEvent::PostsLoaded(result) => posts_loaded(app, result),
        BackendEvent::PostLoaded(result) => post_loaded(app, result),
        BackendEvent::PostDeleted { post_id, result } => post_deleted(app, service, &post_id, result),
        BackendEvent::PublishingDone {
            action,
            post_id,
            result,
        } => publishing_done(app, service, action, &post_id, result),
        BackendEvent::PostSaved { created, result } => post_saved(app, service, created, result),
    }
}

/// 文章列表加载完成
fn posts_loaded(app: &mut App, result: Result<Vec<BlogPost>, ApiError>) {
    match result {
        Ok(posts) => {
            app.posts.set_posts(posts);
            app.clear_status();
            // 列表就位后（重新）建立文章上下文：操作绑定与悬停订阅各自幂等
            app.wire_post_context();
        }
        Err(e) => {
            app.posts.set_error(e.to_string());
            app.set_status(t().messages.load_failed);
            app.modal.show_error(e.to_string());
        }
    }
}

/// 单篇文章加载完成（查看页或编辑表单的内容填充）
fn post_loaded(app: &mut App, result: Result<BlogPost, ApiError>) {
    match result {
        Ok(post) => match &app.current_page {
            Page::PostEdit { .. } => {
                if let Some(form) = app.form.as_mut() {
                    form.fill_from(&post);
                }
                app.clear_status();
            }
            Page::PostView { post_id } if *post_id == post.name => {
                app.post_view.set_post(post);
                app.clear_status();
            }
            // 结果到达时用户已经离开了目标页面
            _ => log::debug!("dropping stale load result for post '{}'", post.name),
        },
        Err(e) => {
            match &app.current_page {
                Page::PostEdit { .. } => {
                    if let Some(form) = app.form.as_mut() {
                        form.loading = false;
                        form.error = Some(e.to_string());
                    }
                }
                Page::PostView { .. } => {
                    app.post_view.set_error(e.to_string());
                }
                _ => {}
            }
            app.set_status(t().messages.load_failed);
            app.modal.show_error(e.to_string());
        }
    }
}

/// 删除完成：成功跳转到列表页并重新拉取，失败只给固定提示
fn post_deleted(app: &mut App, service: &BlogService, post_id: &str, result: Result<(), ApiError>) {
    match result {
        Ok(()) => {
            log::debug!("post '{post_id}' deleted");
            app.navigate(Page::PostList);
            super::begin_list_load(app, service);
            app.set_status(t().messages.deleted);
        }
        Err(e) => {
            log::warn!("delete of '{post_id}' failed: {e}");
            app.set_status(t().messages.failed_delete);
        }
    }
}

/// 外部发布操作完成：成功提示并整页刷新，失败给该操作的固定提示
fn publishing_done(
    app: &mut App,
    service: &BlogService,
    action: PublishingAction,
    post_id: &str,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            log::debug!("publishing '{}' done for '{post_id}'", action.as_str());
            super::refresh_current_page(app, service);
            app.set_status(match action {
                PublishingAction::Publish => t().messages.published,
                PublishingAction::Update => t().messages.updated,
                PublishingAction::Unpublish => t().messages.unpublished,
            });
        }
        Err(e) => {
            log::warn!("publishing '{}' failed for '{post_id}': {e}", action.as_str());
            app.set_status(match action {
                PublishingAction::Publish => t().messages.publish_failed,
                PublishingAction::Update => t().messages.update_failed,
                PublishingAction::Unpublish => t().messages.unpublish_failed,
            });
        }
    }
}

/// 表单提交完成
///
/// 成功：按服务器返回的 `item.name` 跳转到查看页（新建与保存同路）。
/// 失败：表单保持打开、解除锁定，允许用户再次提交。
fn post_saved(
    app: &mut App,
    service: &BlogService,
    created: bool,
    result: Result<BlogPost, ApiError>,
) {
    if let Some(form) = app.form.as_mut() {
        form.submitting = false;
    }

    match result {
        Ok(post) => {
            log::debug!(
                "post '{}' {}",
                post.name,
                if created { "created" } else { "saved" }
            );
            app.form = None;
            // 新建之后才有可操作的文章上下文
            app.wire_post_context();
            let post_id = post.name;
            app.navigate(Page::PostView {
                post_id: post_id.clone(),
            });
            super::begin_view_load(app, service, &post_id);
        }
        Err(e) => {
            log::warn!("form submit failed: {e}");
            if let Some(form) = app.form.as_mut() {
                form.error = Some(t().messages.failed_submit.to_string());
            }
            app.set_status(t().messages.failed_submit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, Options};
    use blog_console_client::SavePostRequest;
    use tokio::runtime::Runtime;

    fn post(name: &str) -> BlogPost {
        BlogPost {
            name: name.to_string(),
            title: name.to_uppercase(),
            content: String::new(),
            author: None,
            is_draft: false,
            external_published: false,
            created_on: None,
            modified_on: None,
        }
    }

    fn options(mode: Mode, post_id: &str) -> Options {
        Options {
            site_id: "S".to_string(),
            post_id: post_id.to_string(),
            mode,
            ..Options::default()
        }
    }

    /// 运行时须在测试期间保持存活，否则 spawn 的任务会被丢弃
    fn fixture(mode: Mode, post_id: &str) -> (App, BlogService, Runtime) {
        let runtime = Runtime::new().unwrap();
        let app = App::from_options(options(mode, post_id));
        let (service, _rx) = BlogService::new(&app.options, runtime.handle().clone());
        (app, service, runtime)
    }

    #[test]
    fn posts_loaded_fills_list_and_wires_context() {
        let (mut app, service, _rt) = fixture(Mode::Unset, "");
        assert!(!app.actions.is_bound());

        apply(
            &mut app,
            &service,
            BackendEvent::PostsLoaded(Ok(vec![post("a"), post("b")])),
        );

        assert_eq!(app.posts.posts.len(), 2);
        assert!(!app.posts.loading);
        assert!(app.actions.is_bound());
        assert!(app.rollover.handlers_installed());
    }

    #[test]
    fn posts_load_failure_opens_error_modal() {
        let (mut app, service, _rt) = fixture(Mode::Unset, "");

        apply(
            &mut app,
            &service,
            BackendEvent::PostsLoaded(Err(ApiError::NetworkError {
                detail: "boom".to_string(),
            })),
        );

        assert!(app.posts.error.is_some());
        assert!(app.modal.is_open());
        assert_eq!(app.status_message.as_deref(), Some(t().messages.load_failed));
    }

    #[test]
    fn delete_success_redirects_to_list_and_refetches() {
        let (mut app, service, _rt) = fixture(Mode::View, "abc123");
        assert!(matches!(app.current_page, Page::PostView { .. }));

        apply(
            &mut app,
            &service,
            BackendEvent::PostDeleted {
                post_id: "abc123".to_string(),
                result: Ok(()),
            },
        );

        assert_eq!(app.current_page, Page::PostList);
        assert!(app.posts.loading);
        assert_eq!(app.status_message.as_deref(), Some(t().messages.deleted));
    }

    #[test]
    fn delete_failure_surfaces_fixed_message() {
        let (mut app, service, _rt) = fixture(Mode::Unset, "");

        apply(
            &mut app,
            &service,
            BackendEvent::PostDeleted {
                post_id: "abc123".to_string(),
                result: Err(ApiError::PostNotFound {
                    post_id: "abc123".to_string(),
                    raw_message: None,
                }),
            },
        );

        // 页面不变，只有状态栏提示
        assert_eq!(app.current_page, Page::PostList);
        assert!(!app.posts.loading);
        assert_eq!(
            app.status_message.as_deref(),
            Some(t().messages.failed_delete)
        );
    }

    #[test]
    fn publishing_success_toasts_and_reloads_current_page() {
        let (mut app, service, _rt) = fixture(Mode::Unset, "");

        apply(
            &mut app,
            &service,
            BackendEvent::PublishingDone {
                action: PublishingAction::Publish,
                post_id: "a".to_string(),
                result: Ok(()),
            },
        );

        // 整页刷新语义：列表重新进入加载状态
        assert!(app.posts.loading);
        assert_eq!(app.status_message.as_deref(), Some(t().messages.published));
    }

    #[test]
    fn publishing_failure_message_follows_action() {
        let (mut app, service, _rt) = fixture(Mode::Unset, "");

        for (action, message) in [
            (PublishingAction::Publish, t().messages.publish_failed),
            (PublishingAction::Update, t().messages.update_failed),
            (PublishingAction::Unpublish, t().messages.unpublish_failed),
        ] {
            apply(
                &mut app,
                &service,
                BackendEvent::PublishingDone {
                    action,
                    post_id: "a".to_string(),
                    result: Err(ApiError::Unknown {
                        status: Some(500),
                        raw_message: String::new(),
                    }),
                },
            );
            assert_eq!(app.status_message.as_deref(), Some(message));
        }
    }

    #[test]
    fn save_success_navigates_to_view_of_returned_name() {
        let (mut app, service, _rt) = fixture(Mode::Create, "");
        let form = app.form.as_mut().unwrap();
        form.title = "T".to_string();
        form.submitting = true;

        apply(
            &mut app,
            &service,
            BackendEvent::PostSaved {
                created: true,
                result: Ok(post("my-post")),
            },
        );

        assert_eq!(
            app.current_page,
            Page::PostView {
                post_id: "my-post".to_string()
            }
        );
        assert!(app.form.is_none());
        assert!(app.post_view.loading);
        assert!(app.actions.is_bound());
    }

    #[test]
    fn save_failure_keeps_form_open_for_resubmit() {
        let (mut app, service, _rt) = fixture(Mode::Create, "");
        {
            let form = app.form.as_mut().unwrap();
            form.title = "T".to_string();
            form.editor.insert_str("body");
            form.submitting = true;
        }

        apply(
            &mut app,
            &service,
            BackendEvent::PostSaved {
                created: true,
                result: Err(ApiError::Timeout {
                    detail: "deadline".to_string(),
                }),
            },
        );

        let form = app.form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some(t().messages.failed_submit));
        // 内容原样保留，且可以再次提交
        assert_eq!(form.title, "T");
        assert_eq!(form.editor.text(), "body");
        assert!(form.can_submit());
        assert!(matches!(app.current_page, Page::PostEdit { post_id: None }));
    }

    #[test]
    fn post_loaded_fills_edit_form() {
        let (mut app, service, _rt) = fixture(Mode::Edit, "p");
        assert!(app.form.as_ref().unwrap().loading);

        let mut loaded = post("p");
        loaded.title = "Hello".to_string();
        loaded.content = "line".to_string();
        apply(&mut app, &service, BackendEvent::PostLoaded(Ok(loaded)));

        let form = app.form.as_ref().unwrap();
        assert!(!form.loading);
        assert_eq!(form.title, "Hello");
        assert_eq!(form.editor.text(), "line");
    }

    #[test]
    fn post_loaded_for_view_page_checks_identity() {
        let (mut app, service, _rt) = fixture(Mode::View, "p");

        // 其他文章的迟到结果被丢弃
        apply(&mut app, &service, BackendEvent::PostLoaded(Ok(post("q"))));
        assert!(app.post_view.post.is_none());

        apply(&mut app, &service, BackendEvent::PostLoaded(Ok(post("p"))));
        assert_eq!(app.post_view.post.as_ref().unwrap().name, "p");
    }

    #[test]
    fn submit_request_shape_is_preserved() {
        // build_request 与提交路径使用同一个负载类型
        let req = SavePostRequest {
            title: "T".to_string(),
            content: "c".to_string(),
            draft: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["draft"], false);
    }
}
