use crate::level::Level;
use crate::record::{Attrs, Record};
use crate::runtime::{self, Runtime};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A named handle. The name is the key matched against `LOG`.
#[derive(Clone)]
pub struct Logger {
    name: String,
    runtime: Arc<Runtime>,
}

impl Logger {
    /// 绑定到全局运行时
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_runtime(name, runtime::global())
    }

    pub fn with_runtime(name: impl Into<String>, runtime: Arc<Runtime>) -> Self {
        Self {
            name: name.into(),
            runtime,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self, level: Level, message: impl Display, attrs: Option<Attrs>) {
        let mut record = Record::new(self.name.as_str(), level, message.to_string());
        record.attrs = attrs;
        self.runtime.write(&record);
    }

    /// Informational record.
    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message, None);
    }

    pub fn info_with(&self, message: impl Display, attrs: Attrs) {
        self.log(Level::Info, message, Some(attrs));
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message, None);
    }

    pub fn error_with(&self, message: impl Display, attrs: Attrs) {
        self.log(Level::Error, message, Some(attrs));
    }

    /// 开始计时，调用 [`Timer::end`] 时输出 TIMER 记录
    pub fn timer(&self) -> Timer {
        Timer {
            package: self.name.clone(),
            time: Utc::now(),
            started_at: Instant::now(),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

/// A running timer; its record carries the start time and elapsed duration.
pub struct Timer {
    package: String,
    time: DateTime<Utc>,
    started_at: Instant,
    runtime: Arc<Runtime>,
}

impl Timer {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn end(self, message: impl Display) {
        self.finish(message, None);
    }

    pub fn end_with(self, message: impl Display, attrs: Attrs) {
        self.finish(message, Some(attrs));
    }

    fn finish(self, message: impl Display, attrs: Option<Attrs>) {
        let mut record = Record::new(self.package, Level::Timer, message.to_string())
            .with_time(self.time)
            .with_elapsed(self.started_at.elapsed());
        record.attrs = attrs;
        self.runtime.write(&record);
    }
}

/// `log_info!(logger, "loaded {} rows", n)`
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// `log_error!(logger, "bad {}", 5)`
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// `log_timer!(timer, "query {}", table)` ends a [`Timer`].
#[macro_export]
macro_rules! log_timer {
    ($timer:expr, $($arg:tt)+) => {
        $timer.end(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::OutputWriter;
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<Record>>);

    impl OutputWriter for Capture {
        fn write(&self, record: &Record) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    fn capture() -> (Arc<Capture>, Arc<Runtime>) {
        let capture = Arc::new(Capture::default());
        let runtime = Arc::new(Runtime::new().with_writer(capture.clone()));
        (capture, runtime)
    }

    #[test]
    fn test_info_and_error_build_records() {
        let (capture, runtime) = capture();
        let logger = Logger::with_runtime("users", runtime);

        log_info!(logger, "user {} signed in", "alice");
        log_error!(logger, "bad {}", 5);

        let records = capture.0.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].package, "users");
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "user alice signed in");
        assert_eq!(records[1].level, Level::Error);
        assert_eq!(records[1].message, "bad 5");
        assert!(records[1].attrs.is_none());
        assert_eq!(records[1].elapsed_nano, 0);
    }

    #[test]
    fn test_attrs_are_attached() {
        let (capture, runtime) = capture();
        let logger = Logger::with_runtime("database", runtime);

        let mut attrs = Attrs::new();
        attrs.insert("table".to_string(), Value::from("users"));
        logger.error_with("insert failed", attrs.clone());

        let records = capture.0.lock().unwrap();
        assert_eq!(records[0].attrs, Some(attrs));
    }

    #[test]
    fn test_timer_measures_elapsed() {
        let (capture, runtime) = capture();
        let logger = Logger::with_runtime("database", runtime);

        let timer = logger.timer();
        std::thread::sleep(Duration::from_millis(5));
        log_timer!(timer, "loaded {} rows", 3);

        let records = capture.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, Level::Timer);
        assert_eq!(record.package, "database");
        assert_eq!(record.message, "loaded 3 rows");
        assert!(record.elapsed() >= Duration::from_millis(5));
        assert!(record.time <= Utc::now());
    }

    #[test]
    fn test_clone_shares_runtime() {
        let (capture, runtime) = capture();
        let logger = Logger::with_runtime("server", runtime);
        let other = logger.clone();

        logger.info("one");
        other.info("two");

        assert_eq!(other.name(), "server");
        assert_eq!(capture.0.lock().unwrap().len(), 2);
    }
}
