pub mod diagnostics;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod record;
pub mod runtime;
pub mod settings;
pub mod writer;

// Re-export commonly used types
pub use error::{LogError, Result};
pub use format::Format;
pub use level::{Level, OutputSettings, parse_verbosity_level};
pub use logger::{Logger, Timer};
pub use record::{Attrs, Record};
pub use runtime::Runtime;
pub use settings::{LogConfig, PackageSettings, parse_package_settings};
pub use writer::{FileWriter, OutputWriter, StandardWriter};
