use crate::config::Config;
use crate::models::format::SheetFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 暂存到输入目录中的模板文件统一名称
pub const TEMPLATE_FILE_NAME: &str = "template.json";

/// 识别程序日志文件名
pub const JOB_LOG_FILE_NAME: &str = "output.log";

/// 结果目录名（由外部识别程序在输出目录中创建）
pub const RESULTS_DIR_NAME: &str = "Results";

/// 阅卷任务描述
///
/// 以调用方提供的校验和作为唯一标识，所有路径都由校验和推导，
/// 不依赖任何进程内的全局注册表。
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// 任务标识（调用方保证唯一）
    pub checksum: String,
    /// 考试格式
    pub format: SheetFormat,
    /// 任务输入目录 {inputs_root}/{checksum}
    pub input_dir: PathBuf,
    /// 任务输出目录 {outputs_root}/{checksum}
    pub output_dir: PathBuf,
    /// 待暂存的答题卡文件（可选）
    pub store_file: Option<PathBuf>,
    /// 透传给识别程序的额外参数
    pub passthrough: Vec<String>,
}

impl Job {
    /// 根据配置和参数构造任务描述
    pub fn new(
        config: &Config,
        checksum: impl Into<String>,
        format: SheetFormat,
        store_file: Option<PathBuf>,
        passthrough: Vec<String>,
    ) -> Self {
        let checksum = checksum.into();
        Self {
            input_dir: Path::new(&config.inputs_root).join(&checksum),
            output_dir: Path::new(&config.outputs_root).join(&checksum),
            checksum,
            format,
            store_file,
            passthrough,
        }
    }

    /// 识别程序日志文件路径
    pub fn log_file(&self) -> PathBuf {
        self.output_dir.join(JOB_LOG_FILE_NAME)
    }

    /// 结果目录路径
    pub fn results_dir(&self) -> PathBuf {
        self.output_dir.join(RESULTS_DIR_NAME)
    }

    /// 输入目录中的模板文件路径
    pub fn template_dest(&self) -> PathBuf {
        self.input_dir.join(TEMPLATE_FILE_NAME)
    }

    /// 清洗后的校验和（非字母数字字符全部替换为下划线）
    ///
    /// 用于拼接错误日志文件名，避免路径注入。
    pub fn sanitized_checksum(&self) -> String {
        self.checksum
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }

    /// 持久错误日志文件路径（位于任务目录之外）
    pub fn error_log_path(&self, config: &Config) -> PathBuf {
        Path::new(&config.error_log_root).join(format!("error_{}.log", self.sanitized_checksum()))
    }
}
