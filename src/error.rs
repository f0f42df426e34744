use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 命令行参数错误
    Args(ArgsError),
    /// 文件操作错误
    File(FileError),
    /// 外部进程错误
    Process(ProcessError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Args(e) => write!(f, "参数错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Process(e) => write!(f, "进程错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Args(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Process(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 命令行参数错误
#[derive(Debug)]
pub enum ArgsError {
    /// 缺少必需参数
    MissingRequired {
        flag: String,
    },
    /// 选项缺少取值
    MissingValue {
        flag: String,
    },
    /// 无法识别的考试格式
    UnknownFormat {
        value: String,
    },
    /// 用户请求帮助信息
    HelpRequested,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingRequired { flag } => {
                write!(f, "缺少必需参数: {}", flag)
            }
            ArgsError::MissingValue { flag } => {
                write!(f, "参数 {} 缺少取值", flag)
            }
            ArgsError::UnknownFormat { value } => {
                write!(f, "无法识别的考试格式: {}", value)
            }
            ArgsError::HelpRequested => write!(f, "请求帮助信息"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 模板文件不存在（硬性校验失败）
    TemplateNotFound {
        format: String,
        path: String,
    },
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
    /// 复制文件失败
    CopyFailed {
        from: String,
        to: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录操作失败
    DirFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::TemplateNotFound { format, path } => {
                write!(f, "格式 {} 对应的模板文件不存在: {}", format, path)
            }
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::CopyFailed { from, to, source } => {
                write!(f, "复制文件失败 ({} -> {}): {}", from, to, source)
            }
            FileError::DirFailed { path, source } => {
                write!(f, "目录操作失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::CopyFailed { source, .. }
            | FileError::DirFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FileError::TemplateNotFound { .. } => None,
        }
    }
}

/// 外部进程错误
#[derive(Debug)]
pub enum ProcessError {
    /// 启动虚拟显示服务失败
    DisplayStartFailed {
        program: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 启动识别程序失败
    SpawnFailed {
        program: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 等待识别程序退出失败
    WaitFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::DisplayStartFailed { program, source } => {
                write!(f, "启动虚拟显示服务失败 ({}): {}", program, source)
            }
            ProcessError::SpawnFailed { program, source } => {
                write!(f, "启动识别程序失败 ({}): {}", program, source)
            }
            ProcessError::WaitFailed { source } => {
                write!(f, "等待识别程序退出失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::DisplayStartFailed { source, .. }
            | ProcessError::SpawnFailed { source, .. }
            | ProcessError::WaitFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建模板缺失错误
    pub fn template_not_found(format: impl Into<String>, path: impl Into<String>) -> Self {
        AppError::File(FileError::TemplateNotFound {
            format: format.into(),
            path: path.into(),
        })
    }

    /// 创建外部进程启动错误
    pub fn spawn_failed(
        program: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Process(ProcessError::SpawnFailed {
            program: program.into(),
            source: Box::new(source),
        })
    }

    /// 创建虚拟显示启动错误
    pub fn display_start_failed(
        program: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Process(ProcessError::DisplayStartFailed {
            program: program.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
