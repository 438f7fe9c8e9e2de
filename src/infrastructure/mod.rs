pub mod i18n;
pub mod log_sanitizer;
pub mod logging;
