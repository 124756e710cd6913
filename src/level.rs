use std::fmt;
use std::str::FromStr;

use crate::{LogError, Result};
use serde::{Deserialize, Serialize};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Error,
    Timer,
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Level::Info),
            "ERROR" => Ok(Level::Error),
            "TIMER" => Ok(Level::Timer),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl Level {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
            Level::Timer => "TIMER",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 输出掩码：每个级别独立开关
///
/// 不是有序级别，例如 TIMER 令牌得到的是 "error + timer，不含 info"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputSettings {
    pub info: bool,
    pub error: bool,
    pub timer: bool,
}

impl OutputSettings {
    /// Nothing enabled. Used as the fallback when no entry matches.
    pub const MUTED: OutputSettings = OutputSettings {
        info: false,
        error: false,
        timer: false,
    };

    pub const FULL: OutputSettings = OutputSettings {
        info: true,
        error: true,
        timer: true,
    };

    pub fn allows(&self, level: Level) -> bool {
        match level {
            Level::Info => self.info,
            Level::Error => self.error,
            Level::Timer => self.timer,
        }
    }
}

/// 解析单个详细程度令牌
///
/// 大小写不敏感，忽略首尾空白。未识别的令牌（包括空串）返回全部开启。
pub fn parse_verbosity_level(val: &str) -> OutputSettings {
    match val.trim().to_uppercase().as_str() {
        "MUTE" => OutputSettings::MUTED,
        "ERROR" => OutputSettings {
            info: false,
            error: true,
            timer: false,
        },
        "TIMER" => OutputSettings {
            info: false,
            error: true,
            timer: true,
        },
        _ => OutputSettings::FULL,
    }
}
