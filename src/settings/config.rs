use super::{PackageSettings, WILDCARD, parse_package_settings};
use crate::Result;
use crate::format::Format;
use crate::level::parse_verbosity_level;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Global default verbosity token.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
/// Package list, e.g. `*,users,database@timer`.
pub const LOG_VAR: &str = "LOG";
/// `json` selects JSON output, anything else the colorized text.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// 日志配置
///
/// 环境变量只在构造时读取一次，之后作为普通值传给 writer。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 默认详细程度令牌（LOG_LEVEL）
    pub level: String,
    /// 包列表（LOG）
    pub packages: String,
    /// 输出格式
    pub format: Format,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: String::new(),
            packages: WILDCARD.to_string(),
            format: Format::Pretty,
        }
    }
}

/// On-disk form: every key optional.
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    level: Option<String>,
    log: Option<String>,
    format: Option<Format>,
}

impl LogConfig {
    pub fn new(packages: impl Into<String>, level: impl Into<String>) -> Self {
        let packages = packages.into();
        Self {
            level: level.into(),
            packages: if packages.is_empty() {
                WILDCARD.to_string()
            } else {
                packages
            },
            format: Format::Pretty,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// 从进程环境变量读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(LOG_FORMAT_VAR) {
            Some(value) if value.trim().eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Pretty,
        };

        Self::new(
            lookup(LOG_VAR).unwrap_or_default(),
            lookup(LOG_LEVEL_VAR).unwrap_or_default(),
        )
        .with_format(format)
    }

    /// 从 TOML 文件加载
    ///
    /// ```toml
    /// level = "error"
    /// log = "*,database@timer"
    /// format = "json"
    /// ```
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;

        Ok(Self::new(
            file.log.unwrap_or_default(),
            file.level.unwrap_or_default(),
        )
        .with_format(file.format.unwrap_or_default()))
    }

    /// 解析为包设置映射
    pub fn settings(&self) -> PackageSettings {
        let default = parse_verbosity_level(&self.level);
        let settings = parse_package_settings(&self.packages, default);
        debug!(
            packages = %self.packages,
            level = %self.level,
            entries = settings.len(),
            "Parsed log settings"
        );
        settings
    }
}
