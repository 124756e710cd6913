use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Key/value attributes attached to a record.
pub type Attrs = BTreeMap<String, Value>;

/// 一条日志记录
///
/// Field names on the wire are fixed: `Package`, `Level`, `Message`,
/// `Time`, `Attrs`, `ElapsedNano`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub package: String,
    pub level: Level,
    /// 已经格式化好的消息
    pub message: String,
    pub time: DateTime<Utc>,
    pub attrs: Option<Attrs>,
    /// Only meaningful for TIMER records.
    #[serde(default)]
    pub elapsed_nano: i64,
}

impl Record {
    pub fn new(package: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            level,
            message: message.into(),
            time: Utc::now(),
            attrs: None,
            elapsed_nano: 0,
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_nano = i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX);
        self
    }

    /// Elapsed time as a `Duration`; negative values clamp to zero.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(u64::try_from(self.elapsed_nano).unwrap_or(0))
    }
}
