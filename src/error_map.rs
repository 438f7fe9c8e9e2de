//! 错误消息映射表
//!
//! 将常见的英文错误短语映射为前端国际化键（`error.*`）。
//! 匹配顺序：精确匹配 → 忽略大小写匹配 → 双向包含匹配，
//! 后两轮均按表的声明顺序取第一个命中项。

/// 错误短语 → 国际化键，声明顺序即匹配优先级
pub static ERROR_MESSAGE_MAP: &[(&str, &str)] = &[
    ("Connection error.", "error.connection_error"),
    ("Connection error", "error.connection_error"),
    ("Network Error", "error.network_error"),
    ("Request timeout", "error.request_timeout"),
    ("Request failed", "error.request_failed"),
    ("Internal server error", "error.internal_server_error"),
    ("Service unavailable", "error.service_unavailable"),
    ("Gateway timeout", "error.gateway_timeout"),
    ("Bad gateway", "error.bad_gateway"),
    ("Too many requests", "error.too_many_requests"),
    ("Unauthorized", "error.unauthorized"),
    ("Forbidden", "error.forbidden"),
    ("Not found", "error.not_found"),
    ("Method not allowed", "error.method_not_allowed"),
    ("Unprocessable entity", "error.unprocessable_entity"),
    ("Validation failed", "error.validation_failed"),
    ("Invalid parameters", "error.invalid_parameters"),
    ("Missing parameters", "error.missing_parameters"),
    ("File not found", "error.file_not_found"),
    ("Permission denied", "error.permission_denied"),
    ("Access denied", "error.access_denied"),
    ("Authentication failed", "error.authentication_failed"),
    ("Token expired", "error.token_expired"),
    ("Invalid token", "error.invalid_token"),
    ("Rate limit exceeded", "error.rate_limit_exceeded"),
    ("Quota exceeded", "error.quota_exceeded"),
    ("Resource not found", "error.resource_not_found"),
    ("Resource already exists", "error.resource_already_exists"),
    ("Operation failed", "error.operation_failed"),
    ("Operation not supported", "error.operation_not_supported"),
    ("Database error", "error.database_error"),
    ("Cache error", "error.cache_error"),
    ("External service error", "error.external_service_error"),
    ("API error", "error.api_error"),
    ("Configuration error", "error.configuration_error"),
    ("System error", "error.system_error"),
    ("Unknown error", "error.unknown_error"),
];

/// 命中的匹配轮次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    CaseInsensitive,
    Substring,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::CaseInsensitive => "case_insensitive",
            MatchKind::Substring => "substring",
        }
    }
}

/// 在映射表中查找错误消息，返回国际化键及命中轮次
pub fn lookup(error_message: &str) -> Option<(&'static str, MatchKind)> {
    if error_message.is_empty() {
        return None;
    }

    // 直接匹配
    if let Some((_, key)) = ERROR_MESSAGE_MAP
        .iter()
        .find(|(phrase, _)| *phrase == error_message)
    {
        return Some((key, MatchKind::Exact));
    }

    // 忽略大小写匹配
    let lower = error_message.to_lowercase();
    if let Some((_, key)) = ERROR_MESSAGE_MAP
        .iter()
        .find(|(phrase, _)| phrase.to_lowercase() == lower)
    {
        return Some((key, MatchKind::CaseInsensitive));
    }

    // 部分匹配（双向包含）
    ERROR_MESSAGE_MAP
        .iter()
        .find(|(phrase, _)| {
            let phrase = phrase.to_lowercase();
            lower.contains(&phrase) || phrase.contains(&lower)
        })
        .map(|(_, key)| (*key, MatchKind::Substring))
}

/// 获取错误消息的国际化键
///
/// 未命中时原样返回；空字符串返回空字符串。
/// 返回的国际化键不是表中的短语，对结果再次解析不保证得到相同的值。
pub fn get_error_message_key(error_message: &str) -> String {
    match lookup(error_message) {
        Some((key, kind)) => {
            tracing::trace!(key, matched = kind.as_str(), "error message resolved");
            key.to_string()
        }
        None => {
            if !error_message.is_empty() {
                tracing::debug!(len = error_message.len(), "no i18n key for error message");
            }
            error_message.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_phrases_unique() {
        let phrases: HashSet<_> = ERROR_MESSAGE_MAP.iter().map(|(p, _)| *p).collect();
        assert_eq!(phrases.len(), ERROR_MESSAGE_MAP.len());
        assert_eq!(ERROR_MESSAGE_MAP.len(), 37);
    }

    #[test]
    fn test_exact_match() {
        for (phrase, key) in ERROR_MESSAGE_MAP {
            assert_eq!(get_error_message_key(phrase), *key);
        }
        assert_eq!(get_error_message_key("Request timeout"), "error.request_timeout");
    }

    #[test]
    fn test_case_insensitive_match() {
        for (phrase, _) in ERROR_MESSAGE_MAP {
            assert_eq!(
                get_error_message_key(&phrase.to_uppercase()),
                get_error_message_key(phrase)
            );
        }
        assert_eq!(
            lookup("NETWORK ERROR"),
            Some(("error.network_error", MatchKind::CaseInsensitive))
        );
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(
            get_error_message_key("internal server error happened"),
            "error.internal_server_error"
        );
        // 输入被表项包含
        assert_eq!(
            lookup("gateway time"),
            Some(("error.gateway_timeout", MatchKind::Substring))
        );
    }

    #[test]
    fn test_substring_first_match_wins() {
        // "Connection error." 排在 "Connection error" 之前
        assert_eq!(
            lookup("connection"),
            Some(("error.connection_error", MatchKind::Substring))
        );
        // 同时包含 "not found" 与 "file not found"，取声明顺序靠前的项
        assert_eq!(get_error_message_key("File not found: a.txt"), "error.not_found");
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(get_error_message_key(""), "");
        assert_eq!(
            get_error_message_key("totally unknown phrase xyz"),
            "totally unknown phrase xyz"
        );
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_resolve_keys_pass_through() {
        // 国际化键不是表中短语；对当前表而言再次解析得到的仍是键本身
        for (_, key) in ERROR_MESSAGE_MAP {
            assert_eq!(get_error_message_key(key), *key);
        }
        assert_eq!(
            lookup("error.unauthorized"),
            Some(("error.unauthorized", MatchKind::Substring))
        );
        assert_eq!(lookup("error.not_found"), None);
    }
}
