// 敏感文本脱敏模块 - 防止链接、命名空间等内部信息展示给用户

use std::sync::LazyLock;

use regex::Regex;

/// 替换后的占位文本
pub const MASK: &str = "xxx";

// http(s) 链接：保留协议头，替换其后直到空白的部分
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?://)[^\s]+").expect("url regex"));

// ns-xxx 命名空间标识
static NAMESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ns-[A-Za-z0-9_-]+").expect("namespace regex"));

/// 脱敏字符串中的敏感信息
pub fn replace_sensitive_text(text: &str) -> String {
    if !contains_sensitive_text(text) {
        return text.to_string();
    }

    // 1. http 链接
    let sanitized = URL_REGEX.replace_all(text, |caps: &regex::Captures| {
        format!("{}{}", &caps[1], MASK)
    });

    // 2. ns-xxx 全部替换为 xxx
    NAMESPACE_REGEX
        .replace_all(&sanitized, MASK)
        .into_owned()
}

/// 检查字符串是否包含敏感信息
pub fn contains_sensitive_text(text: &str) -> bool {
    URL_REGEX.is_match(text) || NAMESPACE_REGEX.is_match(text)
}

/// 脱敏钩子
pub trait Redactor: Send + Sync {
    fn redact(&self, text: &str) -> String;
}

/// 默认脱敏实现，见 [`replace_sensitive_text`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitiveTextRedactor;

impl Redactor for SensitiveTextRedactor {
    fn redact(&self, text: &str) -> String {
        replace_sensitive_text(text)
    }
}

/// 不做任何处理（仅用于已关闭脱敏的场景）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRedactor;

impl Redactor for NoopRedactor {
    fn redact(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_url() {
        assert_eq!(
            replace_sensitive_text("request to https://api.internal.example.com/v1/chat failed"),
            "request to https://xxx failed"
        );
        assert_eq!(
            replace_sensitive_text("http://10.0.0.1:3000/a and http://b.c"),
            "http://xxx and http://xxx"
        );
    }

    #[test]
    fn test_replace_namespace() {
        assert_eq!(
            replace_sensitive_text("pod in ns-team_a-01 crashed"),
            "pod in xxx crashed"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(replace_sensitive_text(""), "");
        assert_eq!(
            replace_sensitive_text("error.request_timeout"),
            "error.request_timeout"
        );
    }

    #[test]
    fn test_contains_sensitive_text() {
        assert!(contains_sensitive_text("see https://example.com"));
        assert!(contains_sensitive_text("ns-abc"));
        assert!(!contains_sensitive_text("Normal error message"));
    }

    #[test]
    fn test_redactors() {
        assert_eq!(SensitiveTextRedactor.redact("ns-1"), "xxx");
        assert_eq!(NoopRedactor.redact("ns-1"), "ns-1");
    }
}
