use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("配置文件解析错误: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("无效的日志级别: {0}")]
    InvalidLevel(String),

    #[error("日志运行时已初始化")]
    AlreadyInstalled,
}

/// Result type for pkglog crate
pub type Result<T> = std::result::Result<T, LogError>;
