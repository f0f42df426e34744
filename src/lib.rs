//! # OMR Sheet Process
//!
//! 一个用于调度外部 OMR（光学标记识别）阅卷程序的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（子进程），只暴露能力
//! - `VirtualDisplay` - 唯一的 Xvfb owner，提供 DISPLAY 能力
//! - `omr_runner` - 在虚拟显示下运行识别程序并捕获退出码
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Job
//! - `stager` - 目录重建与文件暂存能力
//! - `diagnostics` - 任务快照输出能力
//! - `result_extractor` - 结果表查找与标记输出能力
//! - `ErrorArchiver` - 写持久错误日志能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 定义"一个任务"的完整处理流程与终态分支
//!
//! ## 模块结构

pub mod args;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// 重新导出常用类型
pub use args::{CliArgs, USAGE};
pub use config::Config;
pub use error::{AppError, AppResult, ArgsError};
pub use infrastructure::{RunOutcome, VirtualDisplay};
pub use models::{Job, SheetFormat};
pub use orchestrator::App;
pub use services::{RESULTS_END_MARKER, RESULTS_START_MARKER};
