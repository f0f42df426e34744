//! 目录暂存服务 - 业务能力层
//!
//! 只负责"准备任务目录"能力，不关心流程
//!
//! 职责：
//! - 重建任务输入 / 输出目录（全量重置，不做合并）
//! - 暂存答题卡文件（缺失仅告警）
//! - 暂存模板文件（缺失为硬性失败）

use crate::config::Config;
use crate::error::AppError;
use crate::models::Job;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 重建任务的输入与输出目录
///
/// 同一校验和先前运行的残留内容全部丢弃。
pub async fn reset_job_dirs(job: &Job) -> Result<()> {
    for dir in [&job.input_dir, &job.output_dir] {
        remove_dir_if_exists(dir).await?;
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("无法创建任务目录: {}", dir.display()))?;
    }
    info!("📁 任务目录已重建: {}", job.checksum);
    Ok(())
}

/// 暂存答题卡文件到输入目录（保留原文件名）
///
/// 未提供文件或文件不存在均不视为失败。
pub async fn stage_store_file(job: &Job) -> Result<()> {
    let Some(store_file) = &job.store_file else {
        return Ok(());
    };

    if !store_file.exists() {
        warn!("⚠️ 待暂存文件不存在，跳过: {}", store_file.display());
        return Ok(());
    }

    let file_name = store_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "store_file".to_string());
    let dest = job.input_dir.join(&file_name);

    fs::copy(store_file, &dest).await.with_context(|| {
        format!(
            "无法暂存答题卡文件: {} -> {}",
            store_file.display(),
            dest.display()
        )
    })?;

    info!("✓ 答题卡文件已暂存: {}", dest.display());
    Ok(())
}

/// 暂存格式对应的模板文件到输入目录（统一命名为 template.json）
///
/// 模板文件不存在是调用外部识别程序前唯一的硬性校验，
/// 直接以错误终止任务。
pub async fn stage_template(job: &Job, config: &Config) -> Result<()> {
    let template_src = Path::new(&config.templates_root).join(job.format.template_file_name());

    if !template_src.exists() {
        return Err(AppError::template_not_found(
            job.format.name(),
            template_src.to_string_lossy(),
        )
        .into());
    }

    let dest = job.template_dest();
    fs::copy(&template_src, &dest).await.with_context(|| {
        format!(
            "无法复制模板文件: {} -> {}",
            template_src.display(),
            dest.display()
        )
    })?;

    info!("✓ 模板已暂存: {} ({})", dest.display(), job.format);
    Ok(())
}

/// 删除目录（不存在视为成功）
async fn remove_dir_if_exists(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("无法删除目录: {}", dir.display())),
    }
}

/// 成功后删除任务的两个目录
pub async fn delete_job_dirs(job: &Job) -> Result<()> {
    for dir in [&job.input_dir, &job.output_dir] {
        remove_dir_if_exists(dir).await?;
    }
    info!("🧹 任务目录已清理: {}", job.checksum);
    Ok(())
}
