use super::OutputWriter;
use crate::format::{Format, RecordFormatter};
use crate::level::{Level, OutputSettings};
use crate::record::Record;
use crate::settings::{LogConfig, PackageSettings};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use tracing::warn;

/// Writes filtered records, one per line, to a byte stream.
///
/// The stream sits behind a mutex so lines from concurrent callers never
/// interleave.
pub struct StandardWriter<W: Write + Send> {
    formatter: RecordFormatter,
    settings: PackageSettings,
    target: Mutex<W>,
}

impl StandardWriter<Stdout> {
    /// 标准输出，配置取自环境变量
    pub fn from_env() -> Self {
        Self::from_config(io::stdout(), &LogConfig::from_env())
    }
}

impl<W: Write + Send> StandardWriter<W> {
    pub fn new(target: W, settings: PackageSettings, format: Format) -> Self {
        Self {
            formatter: RecordFormatter::new(format),
            settings,
            target: Mutex::new(target),
        }
    }

    pub fn from_config(target: W, config: &LogConfig) -> Self {
        Self::new(target, config.settings(), config.format)
    }

    pub fn settings(&self) -> &PackageSettings {
        &self.settings
    }

    pub fn format_kind(&self) -> Format {
        self.formatter.kind()
    }

    /// Effective settings for a package (exact, then `*`, then muted).
    pub fn logger_settings(&self, package: &str) -> OutputSettings {
        self.settings.lookup(package)
    }

    /// 按级别字符串判断是否输出；未知级别一律返回 false
    pub fn is_enabled(&self, package: &str, level: &str) -> bool {
        match Level::parse(level) {
            Ok(level) => self.is_level_enabled(package, level),
            Err(_) => false,
        }
    }

    pub fn is_level_enabled(&self, package: &str, level: Level) -> bool {
        self.settings.is_enabled(package, level)
    }

    pub fn format(&self, record: &Record) -> String {
        self.formatter.format(record)
    }

    /// Consume the writer and hand back the destination.
    pub fn into_inner(self) -> W {
        self.target
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> OutputWriter for StandardWriter<W> {
    fn write(&self, record: &Record) {
        if !self.is_level_enabled(&record.package, record.level) {
            return;
        }

        let line = self.format(record);

        let mut target = self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(target, "{}", line).and_then(|_| target.flush()) {
            warn!("Failed to write log record: {}", e);
        }
    }
}
