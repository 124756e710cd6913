pub mod json;
pub mod pretty;

pub use json::json_format;
pub use pretty::{color_for, pretty_format};

use crate::record::Record;
use serde::Deserialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Colorized single-line text.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

pub struct RecordFormatter {
    format: Format,
}

impl RecordFormatter {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self, record: &Record) -> String {
        match self.format {
            Format::Pretty => pretty_format(record),
            Format::Json => json_format(record),
        }
    }

    pub fn kind(&self) -> Format {
        self.format
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new(Format::Pretty)
    }
}
