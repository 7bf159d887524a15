//! 文章编辑表单状态
//!
//! 表单包含标题输入、多行正文编辑器、草稿开关和确定/取消按钮。
//! 编辑器存储 HTML 标记文本本身，格式按钮在光标处插入标记对 ——
//! 这里不做任何富文本解析。

use blog_console_client::{BlogPost, SavePostRequest};

/// 格式标记（编辑器工具栏按钮）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Bold,
    Italic,
    Underline,
    BulletedList,
    NumberedList,
    Link,
}

impl StyleTag {
    /// 插入的标记对（开标记, 闭标记）
    pub fn markup(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("<b>", "</b>"),
            Self::Italic => ("<i>", "</i>"),
            Self::Underline => ("<u>", "</u>"),
            Self::BulletedList => ("<ul><li>", "</li></ul>"),
            Self::NumberedList => ("<ol><li>", "</li></ol>"),
            Self::Link => ("<a href=\"\">", "</a>"),
        }
    }
}

/// 表单字段（Tab 循环顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Content,
    Draft,
    Ok,
    Cancel,
}

impl FormField {
    /// 下一个字段
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Draft,
            Self::Draft => Self::Ok,
            Self::Ok => Self::Cancel,
            Self::Cancel => Self::Title,
        }
    }

    /// 上一个字段
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Cancel,
            Self::Content => Self::Title,
            Self::Draft => Self::Content,
            Self::Ok => Self::Draft,
            Self::Cancel => Self::Ok,
        }
    }
}

/// 多行正文编辑器
///
/// 光标以 (行, 字符列) 定位；列是字符索引而不是字节索引。
#[derive(Debug, Clone)]
pub struct ContentEditor {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

/// 字符列 → 字节偏移
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}

impl ContentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有文本创建（编辑已有文章时）
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    /// 导出全文（提交前同步进表单负载）
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// 光标位置 (行, 字符列)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// 各行内容
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn current_line_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    /// 在光标处插入一个字符
    pub fn insert_char(&mut self, ch: char) {
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, ch);
        self.col += 1;
    }

    /// 在光标处插入一段文本（单行）
    pub fn insert_str(&mut self, text: &str) {
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert_str(idx, text);
        self.col += text.chars().count();
    }

    /// 删除光标前的字符；行首时并入上一行
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.current_line_len();
            self.lines[self.row].push_str(&current);
        }
    }

    /// 删除光标处的字符；行尾时并入下一行
    pub fn delete(&mut self) {
        if self.col < self.current_line_len() {
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// 在光标处换行
    pub fn newline(&mut self) {
        let idx = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current_line_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.current_line_len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.current_line_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.current_line_len());
        }
    }

    /// 在光标处插入一对格式标记，光标落在两个标记之间
    pub fn apply_style(&mut self, tag: StyleTag) {
        let (open, close) = tag.markup();
        self.insert_str(open);
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert_str(idx, close);
    }
}

/// 文章编辑表单状态
#[derive(Debug)]
pub struct FormState {
    /// 编辑目标；`None` 表示新建
    pub post_id: Option<String>,
    /// 标题
    pub title: String,
    /// 正文编辑器
    pub editor: ContentEditor,
    /// 保存为草稿
    pub draft: bool,
    /// 当前焦点字段
    pub focus: FormField,
    /// 是否有提交在途
    pub submitting: bool,
    /// 编辑模式下是否还在等文章内容
    pub loading: bool,
    /// 表单级错误信息
    pub error: Option<String>,
}

impl FormState {
    /// 新建文章的空表单
    pub fn new_create() -> Self {
        Self {
            post_id: None,
            title: String::new(),
            editor: ContentEditor::new(),
            draft: true,
            focus: FormField::Title,
            submitting: false,
            loading: false,
            error: None,
        }
    }

    /// 编辑已有文章的表单（内容随后异步填充）
    pub fn new_edit(post_id: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            title: String::new(),
            editor: ContentEditor::new(),
            draft: true,
            focus: FormField::Title,
            submitting: false,
            loading: true,
            error: None,
        }
    }

    /// 是否是新建表单
    pub fn is_create(&self) -> bool {
        self.post_id.is_none()
    }

    /// 用服务器返回的文章内容填充表单
    pub fn fill_from(&mut self, post: &BlogPost) {
        self.title = post.title.clone();
        self.editor = ContentEditor::from_text(&post.content);
        self.draft = post.is_draft;
        self.loading = false;
    }

    /// 提交按钮是否可用（标题非空、没有在途提交、内容已就绪）
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.submitting && !self.loading
    }

    /// 组装提交负载（把编辑器内容同步进表单数据）
    pub fn build_request(&self) -> SavePostRequest {
        SavePostRequest {
            title: self.title.clone(),
            content: self.editor.text(),
            draft: self.draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_insert_and_text() {
        let mut e = ContentEditor::new();
        e.insert_char('h');
        e.insert_char('i');
        assert_eq!(e.text(), "hi");
        assert_eq!(e.cursor(), (0, 2));
    }

    #[test]
    fn editor_newline_splits_line() {
        let mut e = ContentEditor::from_text("hello");
        e.move_right();
        e.move_right();
        e.newline();
        assert_eq!(e.text(), "he\nllo");
        assert_eq!(e.cursor(), (1, 0));
    }

    #[test]
    fn editor_backspace_joins_lines() {
        let mut e = ContentEditor::from_text("he\nllo");
        e.move_down();
        e.backspace();
        assert_eq!(e.text(), "hello");
        assert_eq!(e.cursor(), (0, 2));
    }

    #[test]
    fn editor_delete_at_line_end_joins_next() {
        let mut e = ContentEditor::from_text("ab\ncd");
        e.move_right();
        e.move_right();
        e.delete();
        assert_eq!(e.text(), "abcd");
    }

    #[test]
    fn editor_handles_multibyte_chars() {
        let mut e = ContentEditor::new();
        e.insert_char('博');
        e.insert_char('客');
        e.move_left();
        e.insert_char('x');
        assert_eq!(e.text(), "博x客");
        e.backspace();
        assert_eq!(e.text(), "博客");
    }

    #[test]
    fn editor_vertical_move_clamps_column() {
        let mut e = ContentEditor::from_text("long line\nab");
        for _ in 0..9 {
            e.move_right();
        }
        e.move_down();
        assert_eq!(e.cursor(), (1, 2));
    }

    #[test]
    fn apply_style_places_cursor_between_tags() {
        let mut e = ContentEditor::new();
        e.apply_style(StyleTag::Bold);
        assert_eq!(e.text(), "<b></b>");
        e.insert_char('x');
        assert_eq!(e.text(), "<b>x</b>");
    }

    #[test]
    fn apply_list_style() {
        let mut e = ContentEditor::new();
        e.apply_style(StyleTag::BulletedList);
        e.insert_str("item");
        assert_eq!(e.text(), "<ul><li>item</li></ul>");
    }

    #[test]
    fn form_field_cycle_is_closed() {
        let mut field = FormField::Title;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Cancel);
    }

    #[test]
    fn can_submit_requires_title() {
        let mut form = FormState::new_create();
        assert!(!form.can_submit());
        form.title = "  ".to_string();
        assert!(!form.can_submit());
        form.title = "T".to_string();
        assert!(form.can_submit());
    }

    #[test]
    fn can_submit_blocked_while_submitting_or_loading() {
        let mut form = FormState::new_create();
        form.title = "T".to_string();
        form.submitting = true;
        assert!(!form.can_submit());

        let mut form = FormState::new_edit("p");
        form.title = "T".to_string();
        assert!(form.loading);
        assert!(!form.can_submit());
    }

    #[test]
    fn fill_from_post_clears_loading() {
        let post = BlogPost {
            name: "p".to_string(),
            title: "Title".to_string(),
            content: "line1\nline2".to_string(),
            author: None,
            is_draft: false,
            external_published: false,
            created_on: None,
            modified_on: None,
        };
        let mut form = FormState::new_edit("p");
        form.fill_from(&post);
        assert_eq!(form.title, "Title");
        assert_eq!(form.editor.text(), "line1\nline2");
        assert!(!form.draft);
        assert!(!form.loading);
    }

    #[test]
    fn build_request_syncs_editor_content() {
        let mut form = FormState::new_create();
        form.title = "T".to_string();
        form.editor.insert_str("body");
        let req = form.build_request();
        assert_eq!(req.title, "T");
        assert_eq!(req.content, "body");
        assert!(req.draft);
    }
}
