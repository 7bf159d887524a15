//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, KeyNames, MessageTexts, ModalTexts, NavTexts,
    PostFormTexts, PostListTexts, PostViewTexts, SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "博客控制台",
        // 操作动词
        edit: "编辑",
        delete: "删除",
        publish: "发布",
        update: "更新",
        unpublish: "取消发布",
        save: "保存",
        cancel: "取消",
        ok: "确定",
        quit: "退出",
        // 状态词
        loading: "加载中...",
        error: "错误",
        draft: "草稿",
        published: "已发布",
        // 导航词
        back: "返回",
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
            navigate: "导航",
            select: "选择",
            switch_panel: "切换面板",
            open: "打开",
            submit: "提交",
            new_post: "新建文章",
            edit_post: "编辑",
            delete_post: "删除",
            next_field: "下一字段",
            modify: "修改",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        posts: "文章",
        new_post: "新建文章",
        settings: "设置",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    post_list: PostListTexts {
        title: "文章列表",
        no_posts: "还没有文章",
        by: "作者",
        external_tag: "外部",
    },

    post_view: PostViewTexts {
        title: "文章",
        author: "作者",
        status: "状态",
        status_external: "已发布至外部博客",
        not_loaded: "文章尚未加载",
    },

    post_form: PostFormTexts {
        create_title: "新建文章",
        edit_title: "编辑文章",
        title_label: "标题",
        title_placeholder: "文章标题（必填）",
        content_label: "正文",
        draft_label: "保存为草稿",
        // 编辑器工具栏分组
        font_group: "字体",
        list_group: "列表",
        link_group: "插入",
        // 工具栏按钮
        bold: "加粗",
        italic: "斜体",
        underline: "下划线",
        bulleted: "无序列表",
        numbered: "有序列表",
        link: "链接",
    },

    settings: SettingsTexts {
        title: "设置",
        language: "语言",
        theme: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
    },

    // ========================================================================
    // 操作结果提示
    // ========================================================================
    messages: MessageTexts {
        failed_delete: "删除文章失败",
        failed_submit: "提交文章失败",
        published: "已发布！",
        updated: "已更新！",
        unpublished: "已取消发布！",
        publish_failed: "无法发布",
        update_failed: "无法更新",
        unpublish_failed: "无法取消发布",
        deleted: "文章已删除",
        loading_posts: "正在加载文章列表...",
        loading_post: "正在加载文章...",
        load_failed: "数据加载失败",
        saving: "正在保存...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        error_title: "错误",
        help_title: "帮助",
        help_global: "全局",
        help_list: "文章列表",
        help_form: "文章表单",
        press_any_key: "按 Enter 或 Esc 关闭",
    },
};
