//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::infrastructure::i18n::Language;
use crate::infrastructure::log_sanitizer::{NoopRedactor, Redactor, SensitiveTextRedactor};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub redaction: RedactionConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    pub default_language: String,
}

/// 脱敏配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    pub enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: std::env::var("ERRTEXT_LANG").unwrap_or_else(|_| "en".into()),
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("ERRTEXT_REDACT")
                .ok()
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            logging: LoggingConfig::default(),
            i18n: I18nConfig::default(),
            redaction: RedactionConfig::default(),
        })
    }

    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 环境变量为基础，文件存在时以文件为准
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Language::parse(&self.i18n.default_language)
            .with_context(|| "ERRTEXT_LANG is not a supported language")?;

        Ok(())
    }

    /// 默认展示语言（无效值回退英文）
    pub fn language(&self) -> Language {
        Language::from_str(&self.i18n.default_language)
    }

    /// 展示语言：显式指定的优先（严格解析），否则使用配置的默认语言
    pub fn resolve_language(&self, requested: Option<&str>) -> crate::Result<Language> {
        match requested {
            Some(lang) => Language::parse(lang),
            None => Ok(self.language()),
        }
    }

    /// 按配置选择脱敏钩子
    pub fn redactor(&self) -> &'static dyn Redactor {
        if self.redaction.enabled {
            &SensitiveTextRedactor
        } else {
            &NoopRedactor
        }
    }
}
