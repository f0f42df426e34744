//! 识别程序执行器 - 基础设施层
//!
//! 只负责"在虚拟显示下运行外部识别程序"的能力，不关心流程

use crate::error::{AppError, ProcessError};
use crate::models::Job;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// 一次识别程序运行的结果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// 识别程序的退出码
    pub exit_code: i32,
    /// 完整命令行（用于日志与错误归档）
    pub command_line: String,
}

impl RunOutcome {
    /// 识别是否成功
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// 构建识别程序的完整命令行（程序 + 参数列表）
///
/// 形如: `{python_path} {omr_script} -i {input_dir} -o {output_dir} {透传参数...}`
pub fn build_command_line(python_path: &Path, omr_script: &str, job: &Job) -> Vec<String> {
    let mut parts = vec![
        python_path.to_string_lossy().into_owned(),
        omr_script.to_string(),
        "-i".to_string(),
        job.input_dir.to_string_lossy().into_owned(),
        "-o".to_string(),
        job.output_dir.to_string_lossy().into_owned(),
    ];
    parts.extend(job.passthrough.iter().cloned());
    parts
}

/// 在虚拟显示下运行识别程序并等待其退出
///
/// 标准输出与标准错误合并重定向到任务日志文件；
/// 不设超时，阻塞直到外部程序退出。
///
/// # 参数
/// - `python_path`: 识别程序运行时路径
/// - `omr_script`: 识别程序入口脚本
/// - `job`: 任务描述
/// - `display`: DISPLAY 环境变量的值（如 ":99"）
///
/// # 返回
/// 返回退出码与命令行的快照
pub async fn run_omr(
    python_path: &Path,
    omr_script: &str,
    job: &Job,
    display: &str,
) -> Result<RunOutcome> {
    let parts = build_command_line(python_path, omr_script, job);
    let command_line = parts.join(" ");
    info!("🚀 正在运行识别程序: {}", command_line);
    info!("📄 日志输出: {}", job.log_file().display());

    let log_file = std::fs::File::create(job.log_file())
        .with_context(|| format!("无法创建任务日志文件: {}", job.log_file().display()))?;
    let log_for_stderr = log_file
        .try_clone()
        .with_context(|| format!("无法复制任务日志句柄: {}", job.log_file().display()))?;

    let mut child = Command::new(&parts[0])
        .args(&parts[1..])
        .env("DISPLAY", display)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file))
        .stderr(Stdio::from(log_for_stderr))
        .spawn()
        .map_err(|e| AppError::spawn_failed(python_path.to_string_lossy(), e))?;

    let status = child.wait().await.map_err(|e| {
        AppError::Process(ProcessError::WaitFailed {
            source: Box::new(e),
        })
    })?;

    let exit_code = match status.code() {
        Some(code) => code,
        None => {
            warn!("⚠️ 识别程序被信号终止，按退出码 1 处理");
            1
        }
    };

    info!("识别程序已退出，退出码: {}", exit_code);

    Ok(RunOutcome {
        exit_code,
        command_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::SheetFormat;

    #[test]
    fn test_build_command_line_order() {
        let config = Config {
            inputs_root: "inputs".to_string(),
            outputs_root: "outputs".to_string(),
            ..Config::default()
        };
        let job = Job::new(
            &config,
            "abc123",
            SheetFormat::Jee,
            None,
            vec!["--autoAlign".to_string()],
        );

        let parts = build_command_line(Path::new("/usr/bin/python3"), "main.py", &job);
        assert_eq!(
            parts,
            vec![
                "/usr/bin/python3",
                "main.py",
                "-i",
                "inputs/abc123",
                "-o",
                "outputs/abc123",
                "--autoAlign",
            ]
        );
    }
}
