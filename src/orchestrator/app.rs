//! 编排层 - 阅卷任务的完整流程
//!
//! 流程：重建目录 → 暂存文件 → 启动虚拟显示 → 运行识别程序 →
//! 释放虚拟显示 → 按退出码分支（提取结果并清理 / 诊断并归档）

use crate::args::CliArgs;
use crate::config::Config;
use crate::infrastructure::{omr_runner, VirtualDisplay};
use crate::models::Job;
use crate::services::{diagnostics, result_extractor, stager, ErrorArchiver};
use anyhow::Result;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    python_path: std::path::PathBuf,
    job: Job,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, args: CliArgs) -> Self {
        let job = Job::new(
            &config,
            args.checksum,
            args.format,
            args.store_file,
            args.passthrough,
        );

        log_startup(&config, &job);

        Self {
            config,
            python_path: args.python_path,
            job,
        }
    }

    /// 运行阅卷任务主流程
    ///
    /// # 返回
    /// 返回识别程序的退出码（原样向调用方传播）
    pub async fn run(&self) -> Result<i32> {
        // 目录生命周期：全量重置后暂存输入
        stager::reset_job_dirs(&self.job).await?;
        stager::stage_store_file(&self.job).await?;
        stager::stage_template(&self.job, &self.config).await?;

        diagnostics::print_job_snapshot(&self.job, "运行前", self.config.verbose_logging).await;

        // 虚拟显示为作用域资源：无论识别成败都必须释放
        let display = VirtualDisplay::start(&self.config).await?;
        let outcome = omr_runner::run_omr(
            &self.python_path,
            &self.config.omr_script,
            &self.job,
            display.display(),
        )
        .await;
        display.shutdown().await;
        let outcome = outcome?;

        if outcome.is_success() {
            self.finish_success().await?;
        } else {
            self.finish_failure(&outcome.command_line, outcome.exit_code)
                .await?;
        }

        Ok(outcome.exit_code)
    }

    /// 成功分支：提取结果并删除任务目录
    async fn finish_success(&self) -> Result<()> {
        info!("✅ 识别成功: {}", self.job.checksum);
        result_extractor::extract_and_print_results(&self.job).await?;
        stager::delete_job_dirs(&self.job).await?;
        Ok(())
    }

    /// 失败分支：保留任务目录并写错误归档
    async fn finish_failure(&self, command_line: &str, exit_code: i32) -> Result<()> {
        error!(
            "❌ 识别失败: {} (退出码: {})",
            self.job.checksum, exit_code
        );

        diagnostics::print_job_snapshot(&self.job, "运行后", self.config.verbose_logging).await;

        let archiver = ErrorArchiver::new(self.job.error_log_path(&self.config));
        archiver.write(&self.job, command_line, exit_code).await?;

        info!("📄 错误归档已写入: {}", archiver.path().display());
        info!("💡 任务目录已保留以供排查");
        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config, job: &Job) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答题卡阅卷任务");
    info!("📋 校验和: {}", job.checksum);
    info!("📄 考试格式: {}", job.format);
    info!("📁 输入目录: {}", job.input_dir.display());
    info!("📁 输出目录: {}", job.output_dir.display());
    info!("🖥️ 虚拟显示: {} :{}", config.xvfb_path, config.display_number);
    info!("{}", "=".repeat(60));
}
