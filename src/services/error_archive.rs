//! 错误归档服务 - 业务能力层
//!
//! 只负责"写持久错误日志"能力，不关心流程
//!
//! 错误日志位于任务目录之外，任务目录被保留时它是
//! 事后排查的唯一入口。

use crate::models::Job;
use crate::services::diagnostics;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 错误归档服务
///
/// 职责：
/// - 将失败任务的现场快照写入持久错误日志
/// - 只处理单个任务
/// - 不关心流程顺序
pub struct ErrorArchiver {
    archive_path: PathBuf,
}

impl ErrorArchiver {
    /// 创建新的错误归档服务
    pub fn new(archive_path: PathBuf) -> Self {
        Self { archive_path }
    }

    /// 归档文件路径
    pub fn path(&self) -> &PathBuf {
        &self.archive_path
    }

    /// 写入错误归档
    ///
    /// 内容包含：时间戳、完整命令行、退出码、环境变量快照、
    /// 两个任务目录的内容列表、识别程序日志全文。
    ///
    /// # 参数
    /// - `job`: 任务描述
    /// - `command_line`: 识别程序的完整命令行
    /// - `exit_code`: 识别程序的退出码
    pub async fn write(&self, job: &Job, command_line: &str, exit_code: i32) -> Result<()> {
        debug!(
            "写入错误归档: 任务 {} | 退出码 {}",
            job.checksum, exit_code
        );

        let separator = "=".repeat(60);
        let mut report = String::new();

        report.push_str(&format!("{}\n", separator));
        report.push_str(&format!(
            "阅卷任务失败报告 - {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        report.push_str(&format!("{}\n\n", separator));

        report.push_str(&format!("任务校验和: {}\n", job.checksum));
        report.push_str(&format!("考试格式: {}\n", job.format));
        report.push_str(&format!("命令行: {}\n", command_line));
        report.push_str(&format!("退出码: {}\n", exit_code));
        report.push_str(&format!("调用者: {}\n\n", diagnostics::invoking_user()));

        report.push_str("--- 环境变量快照 ---\n");
        let mut vars: Vec<(String, String)> = std::env::vars().collect();
        vars.sort();
        for (key, value) in vars {
            report.push_str(&format!("{}={}\n", key, value));
        }
        report.push('\n');

        report.push_str(&format!("--- 输入目录 {} ---\n", job.input_dir.display()));
        for name in diagnostics::list_dir(&job.input_dir).await {
            report.push_str(&format!("  {}\n", name));
        }
        report.push('\n');

        report.push_str(&format!("--- 输出目录 {} ---\n", job.output_dir.display()));
        for name in diagnostics::list_dir(&job.output_dir).await {
            report.push_str(&format!("  {}\n", name));
        }
        report.push('\n');

        report.push_str(&format!("--- 识别程序日志 {} ---\n", job.log_file().display()));
        match fs::read_to_string(job.log_file()).await {
            Ok(log) => report.push_str(&log),
            Err(e) => report.push_str(&format!("<无法读取日志: {}>\n", e)),
        }
        report.push('\n');

        fs::write(&self.archive_path, report)
            .await
            .with_context(|| format!("无法写入错误归档: {}", self.archive_path.display()))?;

        Ok(())
    }
}
