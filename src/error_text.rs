//! 错误文本提取
//!
//! 从任意形态的错误值中取出第一条可用的消息，转换为国际化键，
//! 再经过脱敏钩子后返回给展示层。整个过程不会失败：字段缺失、
//! 类型不符或输入为空都只会落到下一个候选或调用方给出的默认值。

use std::borrow::Cow;

use serde_json::Value;

use crate::error::Result;
use crate::error_map::get_error_message_key;
use crate::infrastructure::log_sanitizer::{Redactor, SensitiveTextRedactor};

/// 候选消息字段（JSON Pointer），按优先级排列
pub const MESSAGE_PATHS: &[&str] = &[
    "/response/data/message",
    "/response/message",
    "/message",
    "/response/data/msg",
    "/response/msg",
    "/msg",
    "/error",
];

/// 错误输入
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput<'a> {
    /// 空值（null / 未提供）
    Absent,
    /// 纯文本错误，直接作为消息使用
    Text(Cow<'a, str>),
    /// 结构化错误（通常是 HTTP 响应或序列化后的异常对象）
    Structured(Cow<'a, Value>),
}

impl<'a> ErrorInput<'a> {
    /// 从 JSON 文本解析错误输入
    pub fn from_json_str(s: &str) -> Result<ErrorInput<'static>> {
        let value: Value = serde_json::from_str(s)?;
        Ok(ErrorInput::from(value))
    }

    /// 从实现了 `std::error::Error` 的错误构造，使用其 Display 文本
    pub fn from_error<E>(err: &E) -> ErrorInput<'static>
    where
        E: std::error::Error + ?Sized,
    {
        ErrorInput::Text(Cow::Owned(err.to_string()))
    }

    /// 取出消息；纯文本原样返回（包括空字符串），结构化输入按
    /// [`MESSAGE_PATHS`] 顺序取第一个非空字符串字段
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorInput::Absent => None,
            ErrorInput::Text(text) => Some(text.as_ref()),
            ErrorInput::Structured(value) => MESSAGE_PATHS
                .iter()
                .filter_map(|path| value.pointer(path))
                .filter_map(Value::as_str)
                .find(|s| !s.is_empty()),
        }
    }
}

impl<'a> From<&'a str> for ErrorInput<'a> {
    fn from(s: &'a str) -> Self {
        ErrorInput::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for ErrorInput<'a> {
    fn from(s: &'a String) -> Self {
        ErrorInput::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for ErrorInput<'static> {
    fn from(s: String) -> Self {
        ErrorInput::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a Value> for ErrorInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => ErrorInput::Absent,
            Value::String(s) => ErrorInput::Text(Cow::Borrowed(s.as_str())),
            other => ErrorInput::Structured(Cow::Borrowed(other)),
        }
    }
}

impl From<Value> for ErrorInput<'static> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ErrorInput::Absent,
            Value::String(s) => ErrorInput::Text(Cow::Owned(s)),
            other => ErrorInput::Structured(Cow::Owned(other)),
        }
    }
}

impl<'a, T> From<Option<T>> for ErrorInput<'a>
where
    T: Into<ErrorInput<'a>>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(ErrorInput::Absent)
    }
}

/// 只做提取，不做映射和脱敏
pub fn extract_raw_message<'a>(err: &'a ErrorInput<'_>, def: &'a str) -> &'a str {
    err.message().unwrap_or(def)
}

/// 获取可展示的错误文本（使用默认脱敏）
pub fn get_err_text<'a>(err: impl Into<ErrorInput<'a>>, def: &str) -> String {
    get_err_text_with(err, def, &SensitiveTextRedactor)
}

/// 获取可展示的错误文本，使用调用方提供的脱敏钩子
pub fn get_err_text_with<'a>(
    err: impl Into<ErrorInput<'a>>,
    def: &str,
    redactor: &dyn Redactor,
) -> String {
    let err = err.into();
    let msg = extract_raw_message(&err, def);

    // 获取错误消息键
    let error_key = get_error_message_key(msg);

    redactor.redact(&error_key)
}
