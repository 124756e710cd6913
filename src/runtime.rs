use crate::record::Record;
use crate::writer::{OutputWriter, StandardWriter};
use crate::{LogError, Result};
use std::sync::{Arc, OnceLock};

/// Dispatches every record to each writer in order.
#[derive(Default)]
pub struct Runtime {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stdout writer configured from `LOG`, `LOG_LEVEL` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::new().with_writer(StandardWriter::from_env())
    }

    /// 添加输出端，并调用其 `init`
    pub fn add_writer<W: OutputWriter + 'static>(&mut self, writer: W) {
        writer.init();
        self.writers.push(Box::new(writer));
    }

    pub fn with_writer<W: OutputWriter + 'static>(mut self, writer: W) -> Self {
        self.add_writer(writer);
        self
    }

    pub fn write(&self, record: &Record) {
        for writer in &self.writers {
            writer.write(record);
        }
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

static GLOBAL: OnceLock<Arc<Runtime>> = OnceLock::new();

/// Process-wide runtime, built from the environment on first use unless
/// [`install`] ran before.
pub fn global() -> Arc<Runtime> {
    GLOBAL
        .get_or_init(|| Arc::new(Runtime::from_env()))
        .clone()
}

/// 设置全局运行时；只能在第一次使用前调用一次
pub fn install(runtime: Runtime) -> Result<()> {
    GLOBAL
        .set(Arc::new(runtime))
        .map_err(|_| LogError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        inits: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl OutputWriter for Counting {
        fn init(&self) {
            self.inits.fetch_add(1, Ordering::SeqCst);
        }

        fn write(&self, record: &Record) {
            self.seen.lock().unwrap().push(record.message.clone());
        }
    }

    #[test]
    fn test_dispatch_to_every_writer() {
        let first = Arc::new(Counting::default());
        let second = Arc::new(Counting::default());

        let runtime = Runtime::new()
            .with_writer(first.clone())
            .with_writer(second.clone());
        assert_eq!(runtime.len(), 2);
        assert_eq!(first.inits.load(Ordering::SeqCst), 1);

        runtime.write(&Record::new("users", Level::Info, "a"));
        runtime.write(&Record::new("users", Level::Error, "b"));

        assert_eq!(*first.seen.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(*second.seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_runtime_drops_records() {
        let runtime = Runtime::new();
        assert!(runtime.is_empty());
        runtime.write(&Record::new("users", Level::Info, "nowhere"));
    }
}
