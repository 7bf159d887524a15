//! 组件启动选项
//!
//! 站点、容器、文章与启动模式。构造之后不可变 ——
//! 唯一的修改途径是显式的 `merge`（配置文件与环境变量都走这条路）。

use serde::Deserialize;

/// 启动模式
///
/// 决定启动时进入哪个页面、是否注册表单。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 未指定：不注册表单，也不绑定操作，落在文章列表
    #[default]
    Unset,
    /// 查看一篇文章
    View,
    /// 编辑一篇文章
    Edit,
    /// 新建文章
    Create,
}

impl Mode {
    /// 从配置值解析；空串是合法的"未指定"
    pub fn parse(value: &str) -> Option<Mode> {
        match value {
            "" => Some(Mode::Unset),
            "view" => Some(Mode::View),
            "edit" => Some(Mode::Edit),
            "create" => Some(Mode::Create),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Unset => "",
            Mode::View => "view",
            Mode::Edit => "edit",
            Mode::Create => "create",
        }
    }

}

/// 组件选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// 服务基地址（如 `https://cms.example.com/service`）
    pub base_url: String,
    /// 站点短名
    pub site_id: String,
    /// 站点内的博客容器名
    pub container_id: String,
    /// 目标文章标识（view/edit 模式下使用）
    pub post_id: String,
    /// 目标文章的节点引用（服务器端引用串，透传使用）
    pub post_ref: String,
    /// 启动模式
    pub mode: Mode,
    /// 界面语言代码（如 "en-US"）
    pub language: Option<String>,
    /// 主题名（"dark" / "light"）
    pub theme: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/service".to_string(),
            site_id: String::new(),
            container_id: "blog".to_string(),
            post_id: String::new(),
            post_ref: String::new(),
            mode: Mode::Unset,
            language: None,
            theme: None,
        }
    }
}

/// 一组待合并的选项覆盖值（配置文件 / 环境变量的反序列化目标）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsOverrides {
    pub base_url: Option<String>,
    pub site_id: Option<String>,
    pub container_id: Option<String>,
    pub post_id: Option<String>,
    pub post_ref: Option<String>,
    pub mode: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,
}

impl Options {
    /// 显式合并一组覆盖值，返回合并后的选项
    #[must_use]
    pub fn merge(mut self, overrides: OptionsOverrides) -> Self {
        if let Some(v) = overrides.base_url {
            self.base_url = v;
        }
        if let Some(v) = overrides.site_id {
            self.site_id = v;
        }
        if let Some(v) = overrides.container_id {
            self.container_id = v;
        }
        if let Some(v) = overrides.post_id {
            self.post_id = v;
        }
        if let Some(v) = overrides.post_ref {
            self.post_ref = v;
        }
        if let Some(v) = overrides.mode {
            match Mode::parse(&v) {
                Some(mode) => self.mode = mode,
                None => log::warn!("unknown mode '{v}' in configuration, keeping '{}'", self.mode.as_str()),
            }
        }
        if let Some(v) = overrides.language {
            self.language = Some(v);
        }
        if let Some(v) = overrides.theme {
            self.theme = Some(v);
        }
        self
    }

    /// 加载选项：默认值 ← 配置文件 ← 环境变量
    pub fn load() -> Self {
        let mut options = Self::default();
        if let Some(file) = Self::from_file() {
            options = options.merge(file);
        }
        options.merge(Self::from_env())
    }

    /// 读取 `~/.config/blog-console/config.json`
    fn from_file() -> Option<OptionsOverrides> {
        let path = dirs::config_dir()?.join("blog-console").join("config.json");
        let text = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&text) {
            Ok(overrides) => Some(overrides),
            Err(e) => {
                log::warn!("failed to parse {}: {e}", path.display());
                None
            }
        }
    }

    /// 读取 `BLOG_CONSOLE_*` 环境变量
    fn from_env() -> OptionsOverrides {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        OptionsOverrides {
            base_url: var("BLOG_CONSOLE_BASE_URL"),
            site_id: var("BLOG_CONSOLE_SITE"),
            container_id: var("BLOG_CONSOLE_CONTAINER"),
            post_id: var("BLOG_CONSOLE_POST"),
            post_ref: var("BLOG_CONSOLE_POST_REF"),
            mode: std::env::var("BLOG_CONSOLE_MODE").ok(),
            language: var("BLOG_CONSOLE_LANGUAGE"),
            theme: var("BLOG_CONSOLE_THEME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.container_id, "blog");
        assert_eq!(options.mode, Mode::Unset);
        assert!(options.site_id.is_empty());
    }

    #[test]
    fn mode_parse() {
        assert_eq!(Mode::parse(""), Some(Mode::Unset));
        assert_eq!(Mode::parse("view"), Some(Mode::View));
        assert_eq!(Mode::parse("edit"), Some(Mode::Edit));
        assert_eq!(Mode::parse("create"), Some(Mode::Create));
        assert_eq!(Mode::parse("publish"), None);
    }

    #[test]
    fn merge_overrides_set_fields_only() {
        let options = Options::default().merge(OptionsOverrides {
            site_id: Some("marketing".to_string()),
            mode: Some("create".to_string()),
            ..Default::default()
        });
        assert_eq!(options.site_id, "marketing");
        assert_eq!(options.mode, Mode::Create);
        // 未覆盖的字段保持原值
        assert_eq!(options.container_id, "blog");
    }

    #[test]
    fn merge_keeps_mode_on_unknown_value() {
        let options = Options::default().merge(OptionsOverrides {
            mode: Some("edit".to_string()),
            ..Default::default()
        });
        let options = options.merge(OptionsOverrides {
            mode: Some("bogus".to_string()),
            ..Default::default()
        });
        assert_eq!(options.mode, Mode::Edit);
    }

    #[test]
    fn merge_empty_mode_resets_to_unset() {
        let options = Options::default().merge(OptionsOverrides {
            mode: Some("view".to_string()),
            ..Default::default()
        });
        let options = options.merge(OptionsOverrides {
            mode: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(options.mode, Mode::Unset);
    }

    #[test]
    fn overrides_deserialize_from_partial_json() {
        let overrides: OptionsOverrides =
            serde_json::from_str(r#"{"site_id":"S","theme":"light"}"#).unwrap();
        assert_eq!(overrides.site_id.as_deref(), Some("S"));
        assert_eq!(overrides.theme.as_deref(), Some("light"));
        assert!(overrides.base_url.is_none());
    }
}
