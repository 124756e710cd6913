pub mod file;
pub mod standard;

pub use file::FileWriter;
pub use standard::StandardWriter;

use crate::record::Record;
use std::sync::Arc;

/// 日志输出端
///
/// A writer owns its filter settings and output format. `write` filters,
/// formats and emits on the calling thread and never reports failure to
/// the caller.
pub trait OutputWriter: Send + Sync {
    /// Called once when the writer is added to a runtime.
    fn init(&self) {}

    fn write(&self, record: &Record);
}

impl<T: OutputWriter + ?Sized> OutputWriter for Arc<T> {
    fn init(&self) {
        (**self).init();
    }

    fn write(&self, record: &Record) {
        (**self).write(record);
    }
}
