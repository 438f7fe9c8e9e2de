//! 错误类型
//!
//! 解析与匹配本身是全函数，不会失败；这里只覆盖输入解析和
//! 语言代码等外围环节。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrTextError {
    /// 原始输入不是合法 JSON
    #[error("invalid error json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// 不支持的语言代码
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, ErrTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ErrTextError::UnsupportedLanguage("fr".into());
        assert_eq!(err.to_string(), "unsupported language: fr");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ErrTextError = json_err.into();
        assert!(err.to_string().starts_with("invalid error json:"));
    }
}
