pub mod config;
pub mod parser;

pub use config::LogConfig;
pub use parser::{parse_package_name, parse_package_settings};

use crate::level::{Level, OutputSettings};
use std::collections::HashMap;

/// Key whose entry applies to every package without an exact entry.
pub const WILDCARD: &str = "*";

/// 包名到输出掩码的映射
///
/// Built once and handed to a writer; writers never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSettings {
    packages: HashMap<String, OutputSettings>,
}

impl PackageSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖一个包的设置
    pub fn insert(&mut self, name: impl Into<String>, settings: OutputSettings) {
        self.packages.insert(name.into(), settings);
    }

    /// Exact entry only, no wildcard fallback.
    pub fn get(&self, name: &str) -> Option<OutputSettings> {
        self.packages.get(name).copied()
    }

    /// Effective settings for a package: exact entry, then `*`, then muted.
    pub fn lookup(&self, name: &str) -> OutputSettings {
        self.packages
            .get(name)
            .or_else(|| self.packages.get(WILDCARD))
            .copied()
            .unwrap_or(OutputSettings::MUTED)
    }

    pub fn is_enabled(&self, name: &str, level: Level) -> bool {
        self.lookup(name).allows(level)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Entries sorted by package name.
    pub fn entries(&self) -> Vec<(&str, OutputSettings)> {
        let mut entries: Vec<_> = self
            .packages
            .iter()
            .map(|(name, settings)| (name.as_str(), *settings))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
