//! errtext 命令行工具
//!
//! 用法：errtext [--default TEXT] [--lang en|zh] [--json] [ERROR]
//! 未提供 ERROR 时从标准输入读取。未指定 --lang 时使用配置的
//! 默认语言（ERRTEXT_LANG）输出本地化文案。

use std::io::Read;

use anyhow::{Context, Result};
use errtext::{
    config::Config,
    error_text::ErrorInput,
    infrastructure::{i18n::localize_err_text_with, logging::init_logging},
};

#[derive(Debug, Default, PartialEq)]
struct Args {
    default: String,
    lang: Option<String>,
    json: bool,
    error: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--default" => {
                parsed.default = args.next().context("--default requires a value")?;
            }
            "--lang" => {
                parsed.lang = Some(args.next().context("--lang requires a value")?);
            }
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown option: {flag}"),
            _ => parsed.error = Some(arg),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = parse_args(std::env::args().skip(1))?;

    let config = Config::from_env_and_file(std::env::var("CONFIG_PATH").ok())?;
    config.validate()?;

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("failed to init logging: {e}");
    }

    let lang = config.resolve_language(args.lang.as_deref())?;

    let raw = match args.error {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read error from stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let input = if args.json {
        ErrorInput::from_json_str(&raw).context("Failed to parse error as JSON")?
    } else {
        ErrorInput::from(raw)
    };

    tracing::debug!(json = args.json, lang = lang.as_str(), "resolving error text");

    let text = localize_err_text_with(input, &args.default, lang, config.redactor());
    println!("{text}");

    Ok(())
}
