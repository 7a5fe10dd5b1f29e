use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 浏览器会话相关错误
    Session(SessionError),
    /// 文件操作错误
    File(FileError),
    /// 完成日志持久化错误
    Log(LogError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "会话错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Log(e) => write!(f, "完成日志错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Session(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Log(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 浏览器会话错误
///
/// 登录、提交、提取过程中任何一步失败都会中止整次运行，没有重试
#[derive(Debug)]
pub enum SessionError {
    /// 登录流程失败
    LoginFailed {
        step: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面上找不到预期的元素
    AffordanceNotFound {
        selector: String,
    },
    /// 执行页面脚本失败
    ScriptFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 远端没有返回任何内容
    EmptyResponse,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::LoginFailed { step, source } => {
                write!(f, "登录失败 (步骤: {}): {}", step, source)
            }
            SessionError::AffordanceNotFound { selector } => {
                write!(f, "页面上找不到元素: {}", selector)
            }
            SessionError::ScriptFailed { source } => {
                write!(f, "执行脚本失败: {}", source)
            }
            SessionError::EmptyResponse => {
                write!(f, "远端返回内容为空")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::LoginFailed { source, .. }
            | SessionError::ScriptFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 枚举输入文件失败
    ScanFailed {
        pattern: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::ScanFailed { pattern, source } => {
                write!(f, "枚举输入文件失败 ({}): {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::ScanFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 完成日志错误
///
/// 日志写盘失败必须中止运行，否则内存状态会和磁盘状态发生漂移
#[derive(Debug)]
pub enum LogError {
    /// 持久化完成日志失败
    PersistFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::PersistFailed { path, source } => {
                write!(f, "持久化完成日志失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::PersistFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 缺少必须的配置项
    MissingValue {
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { name } => {
                write!(f, "缺少必须的配置项: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Session(SessionError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(format!("JSON解析失败: {}", err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建日志持久化错误
    pub fn persist_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Log(LogError::PersistFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建元素缺失错误
    pub fn affordance_not_found(selector: impl Into<String>) -> Self {
        AppError::Session(SessionError::AffordanceNotFound {
            selector: selector.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
