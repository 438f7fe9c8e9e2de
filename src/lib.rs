//! errtext - 错误文本展示工具
//!
//! 从任意错误值中提取消息，映射为国际化键，并在展示前脱敏

pub mod config;
pub mod error;
pub mod error_map;
pub mod error_text;
pub mod infrastructure;

// 重新导出常用类型
pub use error::{ErrTextError, Result};
pub use error_map::{get_error_message_key, ERROR_MESSAGE_MAP};
pub use error_text::{get_err_text, get_err_text_with, ErrorInput};
pub use infrastructure::log_sanitizer::replace_sensitive_text;

pub mod prelude {
    pub use crate::{
        error_map::get_error_message_key,
        error_text::{get_err_text, get_err_text_with, ErrorInput},
        infrastructure::{
            i18n::{localize_err_text, Language},
            log_sanitizer::{Redactor, SensitiveTextRedactor},
        },
    };
}
