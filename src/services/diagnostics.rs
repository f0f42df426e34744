//! 诊断信息服务 - 业务能力层
//!
//! 只负责"输出任务快照"能力，不关心流程

use crate::models::Job;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 列出目录内容（文件名按字典序排序）
///
/// 目录不可读时返回一条说明性条目，不视为失败。
pub async fn list_dir(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();
    match fs::read_dir(dir).await {
        Ok(mut entries) => {
            while let Ok(Some(entry)) = entries.next_entry().await {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            names.sort();
        }
        Err(e) => {
            names.push(format!("<无法读取目录: {}>", e));
        }
    }
    names
}

/// 获取调用者身份（用于诊断输出）
pub fn invoking_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "<未知用户>".to_string())
}

/// 输出任务的诊断快照
///
/// # 参数
/// - `job`: 任务描述
/// - `phase`: 阶段说明（如 "运行前" / "运行后"）
/// - `verbose`: 是否输出完整任务描述（JSON）
pub async fn print_job_snapshot(job: &Job, phase: &str, verbose: bool) {
    info!("{}", "=".repeat(60));
    info!("📊 任务诊断快照 ({})", phase);
    info!("调用者: {}", invoking_user());
    info!("输入目录: {}", job.input_dir.display());
    info!("  内容: {:?}", list_dir(&job.input_dir).await);
    info!("输出目录: {}", job.output_dir.display());
    info!("  内容: {:?}", list_dir(&job.output_dir).await);

    // 详细日志（如果启用）
    if verbose {
        match serde_json::to_string_pretty(job) {
            Ok(json) => info!("任务描述:\n{}", json),
            Err(e) => warn!("⚠️ 无法序列化任务描述: {}", e),
        }
    }
    info!("{}", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_dir_missing_reports_placeholder() {
        let names = list_dir(Path::new("/nonexistent/omr_diag_test")).await;
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("<无法读取目录"));
    }

    #[tokio::test]
    async fn test_job_snapshot_both_verbosity_levels() {
        use crate::config::Config;
        use crate::models::{Job, SheetFormat};

        let config = Config::default();
        let job = Job::new(&config, "snap01", SheetFormat::Jee, None, Vec::new());

        // 两种详细程度都不应该 panic；verbose 分支额外输出任务描述
        print_job_snapshot(&job, "运行前", false).await;
        print_job_snapshot(&job, "运行前", true).await;

        let json = serde_json::to_string_pretty(&job).expect("任务描述应该可以序列化");
        assert!(json.contains("snap01"));
    }

    #[tokio::test]
    async fn test_list_dir_sorted() {
        let dir = std::env::temp_dir().join("omr_diag_list_test");
        let _ = fs::remove_dir_all(&dir).await;
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(dir.join("b.txt"), "b").await.unwrap();
        fs::write(dir.join("a.txt"), "a").await.unwrap();

        let names = list_dir(&dir).await;
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        let _ = fs::remove_dir_all(&dir).await;
    }
}
