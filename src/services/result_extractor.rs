//! 结果提取服务 - 业务能力层
//!
//! 只负责"查找并输出结果表"能力，不关心流程
//!
//! 结果块输出到原始标准输出并用固定标记行包裹，
//! 便于调用方按字符串分隔符提取。

use crate::models::Job;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

/// 结果块起始标记行
pub const RESULTS_START_MARKER: &str = "===== OMR RESULTS START =====";

/// 结果块结束标记行
pub const RESULTS_END_MARKER: &str = "===== OMR RESULTS END =====";

/// 在结果目录中查找结果文件（Results_*.csv，按字典序取第一个）
///
/// 目录不存在或没有匹配文件均返回 None，不视为失败。
pub async fn find_results_file(job: &Job) -> Option<PathBuf> {
    let results_dir = job.results_dir();
    if !results_dir.exists() {
        return None;
    }

    let re = match Regex::new(r"^Results_.*\.csv$") {
        Ok(re) => re,
        Err(e) => {
            warn!("⚠️ 结果文件匹配模式无效: {}", e);
            return None;
        }
    };
    let mut matches = Vec::new();

    let mut entries = match fs::read_dir(&results_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("⚠️ 无法读取结果目录 {}: {}", results_dir.display(), e);
            return None;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        if re.is_match(&name) {
            matches.push(entry.path());
        }
    }

    matches.sort();
    matches.into_iter().next()
}

/// 查找结果文件并输出结果块
///
/// 找到时在两条标记行之间原样输出 CSV 内容；
/// 未找到时输出明确的提示信息，不视为失败。
pub async fn extract_and_print_results(job: &Job) -> Result<()> {
    match find_results_file(job).await {
        Some(path) => {
            info!("✓ 找到结果文件: {}", path.display());
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("无法读取结果文件: {}", path.display()))?;

            println!("{}", RESULTS_START_MARKER);
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
            println!("{}", RESULTS_END_MARKER);
        }
        None => {
            warn!("⚠️ 未找到结果文件 (目录: {})", job.results_dir().display());
            println!("未找到结果文件: {}", job.results_dir().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::SheetFormat;

    fn temp_job(checksum: &str) -> Job {
        let root = std::env::temp_dir().join("omr_extract_test");
        let config = Config {
            inputs_root: root.join("inputs").to_string_lossy().into_owned(),
            outputs_root: root.join("outputs").to_string_lossy().into_owned(),
            ..Config::default()
        };
        Job::new(&config, checksum, SheetFormat::Jee, None, Vec::new())
    }

    #[tokio::test]
    async fn test_find_results_file_missing_dir() {
        let job = temp_job("no_results_dir");
        let _ = fs::remove_dir_all(&job.output_dir).await;
        assert!(find_results_file(&job).await.is_none());
    }

    #[tokio::test]
    async fn test_find_results_file_matches_pattern() {
        let job = temp_job("with_results");
        let results_dir = job.results_dir();
        let _ = fs::remove_dir_all(&job.output_dir).await;
        fs::create_dir_all(&results_dir).await.unwrap();
        fs::write(results_dir.join("Results_1.csv"), "roll,score\n")
            .await
            .unwrap();
        fs::write(results_dir.join("notes.txt"), "ignore")
            .await
            .unwrap();

        let found = find_results_file(&job).await.unwrap();
        assert_eq!(found, results_dir.join("Results_1.csv"));

        let _ = fs::remove_dir_all(&job.output_dir).await;
    }

    #[tokio::test]
    async fn test_find_results_file_ignores_non_matching() {
        let job = temp_job("only_noise");
        let results_dir = job.results_dir();
        let _ = fs::remove_dir_all(&job.output_dir).await;
        fs::create_dir_all(&results_dir).await.unwrap();
        fs::write(results_dir.join("summary.csv"), "x").await.unwrap();

        assert!(find_results_file(&job).await.is_none());

        let _ = fs::remove_dir_all(&job.output_dir).await;
    }
}
