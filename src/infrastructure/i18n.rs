// 国际化支持模块 - 错误键 → 本地化文案

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{ErrTextError, Result};
use crate::error_text::{get_err_text_with, ErrorInput};
use crate::infrastructure::log_sanitizer::{Redactor, SensitiveTextRedactor};

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// 宽松解析，未知语言回退到英文
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// 严格解析
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "zh" | "zh-cn" | "chinese" => Ok(Language::Chinese),
            other => Err(ErrTextError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }
}

/// 错误消息国际化
static ERROR_MESSAGES: LazyLock<HashMap<&'static str, HashMap<Language, &'static str>>> =
    LazyLock::new(|| {
        let entries: &[(&str, &str, &str)] = &[
            ("error.connection_error", "Connection error", "连接错误"),
            (
                "error.network_error",
                "Network error, please check your connection",
                "网络异常，请检查网络连接",
            ),
            (
                "error.request_timeout",
                "Request timed out, please try again later",
                "请求超时，请稍后重试",
            ),
            ("error.request_failed", "Request failed", "请求失败"),
            ("error.internal_server_error", "Internal server error", "服务器内部错误"),
            ("error.service_unavailable", "Service unavailable", "服务暂不可用"),
            ("error.gateway_timeout", "Gateway timeout", "网关超时"),
            ("error.bad_gateway", "Bad gateway", "网关错误"),
            (
                "error.too_many_requests",
                "Too many requests, please try again later",
                "请求过于频繁，请稍后再试",
            ),
            ("error.unauthorized", "Unauthorized", "未授权，请先登录"),
            ("error.forbidden", "Forbidden", "权限不足，拒绝访问"),
            ("error.not_found", "Not found", "资源不存在"),
            ("error.method_not_allowed", "Method not allowed", "请求方法不允许"),
            ("error.unprocessable_entity", "Unprocessable entity", "无法处理的请求内容"),
            ("error.validation_failed", "Validation failed", "校验失败"),
            ("error.invalid_parameters", "Invalid parameters", "参数错误"),
            ("error.missing_parameters", "Missing parameters", "缺少参数"),
            ("error.file_not_found", "File not found", "文件不存在"),
            ("error.permission_denied", "Permission denied", "没有权限"),
            ("error.access_denied", "Access denied", "拒绝访问"),
            ("error.authentication_failed", "Authentication failed", "身份验证失败"),
            (
                "error.token_expired",
                "Token expired, please sign in again",
                "登录已过期，请重新登录",
            ),
            ("error.invalid_token", "Invalid token", "无效的凭证"),
            ("error.rate_limit_exceeded", "Rate limit exceeded", "超出频率限制"),
            ("error.quota_exceeded", "Quota exceeded", "超出配额"),
            ("error.resource_not_found", "Resource not found", "资源不存在"),
            ("error.resource_already_exists", "Resource already exists", "资源已存在"),
            ("error.operation_failed", "Operation failed", "操作失败"),
            ("error.operation_not_supported", "Operation not supported", "不支持该操作"),
            ("error.database_error", "Database error", "数据库错误"),
            ("error.cache_error", "Cache error", "缓存错误"),
            ("error.external_service_error", "External service error", "外部服务错误"),
            ("error.api_error", "API error", "接口错误"),
            ("error.configuration_error", "Configuration error", "配置错误"),
            ("error.system_error", "System error", "系统错误"),
            ("error.unknown_error", "Unknown error", "未知错误"),
        ];

        let mut map = HashMap::new();
        for (key, en, zh) in entries {
            let mut msgs = HashMap::new();
            msgs.insert(Language::English, *en);
            msgs.insert(Language::Chinese, *zh);
            map.insert(*key, msgs);
        }
        map
    });

/// 获取本地化的错误消息
pub fn get_error_message(key: &str, lang: Language) -> String {
    ERROR_MESSAGES
        .get(key)
        .and_then(|msgs| msgs.get(&lang).copied())
        .unwrap_or_else(|| {
            // Fallback to English
            ERROR_MESSAGES
                .get(key)
                .and_then(|msgs| msgs.get(&Language::English).copied())
                .unwrap_or(key)
        })
        .to_string()
}

/// 是否存在该键的文案
pub fn has_translation(key: &str) -> bool {
    ERROR_MESSAGES.contains_key(key)
}

/// 提取错误文本并翻译为指定语言；非国际化键的文本原样返回
pub fn localize_err_text<'a>(
    err: impl Into<ErrorInput<'a>>,
    def: &str,
    lang: Language,
) -> String {
    localize_err_text_with(err, def, lang, &SensitiveTextRedactor)
}

pub fn localize_err_text_with<'a>(
    err: impl Into<ErrorInput<'a>>,
    def: &str,
    lang: Language,
    redactor: &dyn Redactor,
) -> String {
    let text = get_err_text_with(err, def, redactor);
    if has_translation(&text) {
        get_error_message(&text, lang)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error_map::ERROR_MESSAGE_MAP;

    #[test]
    fn test_get_error_message() {
        assert_eq!(
            get_error_message("error.not_found", Language::English),
            "Not found"
        );
        assert_eq!(
            get_error_message("error.not_found", Language::Chinese),
            "资源不存在"
        );
        assert_eq!(
            get_error_message("error.nope", Language::Chinese),
            "error.nope"
        );
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("zh"), Language::Chinese);
        assert_eq!(Language::from_str("ZH-CN"), Language::Chinese);
        assert_eq!(Language::from_str("en"), Language::English);
        assert_eq!(Language::from_str("unknown"), Language::English);
        assert!(Language::parse("fr").is_err());
        assert_eq!(Language::Chinese.as_str(), "zh");
    }

    #[test]
    fn test_catalog_coverage() {
        // 映射表中的每个键都有文案
        for (_, key) in ERROR_MESSAGE_MAP {
            assert!(has_translation(key), "missing translation for {key}");
        }
    }

    #[test]
    fn test_localize_err_text() {
        let err = json!({ "response": { "data": { "message": "Request timeout" } } });
        assert_eq!(
            localize_err_text(&err, "", Language::Chinese),
            "请求超时，请稍后重试"
        );
        assert_eq!(
            localize_err_text("something odd", "", Language::Chinese),
            "something odd"
        );
        assert_eq!(
            localize_err_text("FORBIDDEN", "", Language::Chinese),
            "权限不足，拒绝访问"
        );
    }
}
