//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, KeyNames, MessageTexts, ModalTexts, NavTexts,
    PostFormTexts, PostListTexts, PostViewTexts, SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Blog Console",
        // 操作动词
        edit: "Edit",
        delete: "Delete",
        publish: "Publish",
        update: "Update",
        unpublish: "Unpublish",
        save: "Save",
        cancel: "Cancel",
        ok: "OK",
        quit: "Quit",
        // 状态词
        loading: "Loading...",
        error: "Error",
        draft: "Draft",
        published: "Published",
        // 导航词
        back: "Back",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            select: "Select",
            switch_panel: "Switch panel",
            open: "Open",
            submit: "Submit",
            new_post: "New post",
            edit_post: "Edit",
            delete_post: "Delete",
            next_field: "Next field",
            modify: "Modify",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        posts: "Posts",
        new_post: "New Post",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    post_list: PostListTexts {
        title: "Posts",
        no_posts: "No posts yet",
        by: "by",
        external_tag: "external",
    },

    post_view: PostViewTexts {
        title: "Post",
        author: "Author",
        status: "Status",
        status_external: "published externally",
        not_loaded: "Post not loaded",
    },

    post_form: PostFormTexts {
        create_title: "Create Post",
        edit_title: "Edit Post",
        title_label: "Title",
        title_placeholder: "Post title (required)",
        content_label: "Content",
        draft_label: "Save as draft",
        // 编辑器工具栏分组
        font_group: "Font",
        list_group: "Lists",
        link_group: "Insert",
        // 工具栏按钮
        bold: "Bold",
        italic: "Italic",
        underline: "Underline",
        bulleted: "Bulleted list",
        numbered: "Numbered list",
        link: "Link",
    },

    settings: SettingsTexts {
        title: "Settings",
        language: "Language",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    // ========================================================================
    // 操作结果提示
    // ========================================================================
    messages: MessageTexts {
        failed_delete: "Failed to delete the post",
        failed_submit: "Failed to submit the post",
        published: "Published!",
        updated: "Updated!",
        unpublished: "Unpublished!",
        publish_failed: "Unable to publish",
        update_failed: "Unable to update",
        unpublish_failed: "Unable to unpublish",
        deleted: "Post deleted",
        loading_posts: "Loading posts...",
        loading_post: "Loading post...",
        load_failed: "Failed to load data",
        saving: "Saving...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        error_title: "Error",
        help_title: "Help",
        help_global: "Global",
        help_list: "Post list",
        help_form: "Post form",
        press_any_key: "Press Enter or Esc to close",
    },
};
