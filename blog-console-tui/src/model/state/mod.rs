//! 页面数据状态
//!
//! Page 枚举只标识"在哪个页面"；每个页面的业务数据（列表、选中项、
//! 加载状态、表单内容）都放在这里的各个 State 结构中。

mod form;
mod modal;
mod posts;
mod settings;
mod view;

pub use form::{ContentEditor, FormField, FormState, StyleTag};
pub use modal::{Modal, ModalState};
pub use posts::PostsState;
pub use settings::{SETTINGS_ITEM_COUNT, SettingsState};
pub use view::PostViewState;
