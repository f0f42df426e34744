//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责阅卷任务的流程调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (单个 Job 的完整流程)
//!     ↓
//! services (能力层：stager / diagnostics / result_extractor / error_archive)
//!     ↓
//! infrastructure (基础设施：VirtualDisplay / omr_runner)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：编排层只做调度和分支，不做具体文件操作
//! 2. **资源隔离**：只有编排层持有 VirtualDisplay
//! 3. **向下依赖**：编排层 → services → infrastructure
//! 4. **显式传递**：Job 描述贯穿所有调用，不依赖环境路径变量

pub mod app;

// 重新导出主要类型
pub use app::App;
