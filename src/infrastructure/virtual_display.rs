//! 虚拟显示服务 - 基础设施层
//!
//! 持有唯一的 Xvfb 子进程资源，只暴露"提供 DISPLAY"的能力

use crate::config::Config;
use crate::error::AppError;
use anyhow::Result;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// 虚拟显示服务守卫
///
/// 职责：
/// - 持有唯一的 Xvfb 子进程
/// - 暴露 display() 能力（供外部进程的 DISPLAY 环境变量使用）
/// - 不认识 Job / 识别程序
///
/// 生命周期遵循"获取 → 使用 → 释放"：无论识别程序成功与否，
/// 编排层都必须调用 [`VirtualDisplay::shutdown`] 释放资源，
/// 终止失败只记录日志，不向上传播。
pub struct VirtualDisplay {
    child: Child,
    display: String,
}

impl VirtualDisplay {
    /// 启动虚拟显示服务
    ///
    /// # 参数
    /// - `config`: 程序配置（Xvfb 路径与显示编号）
    ///
    /// # 返回
    /// 返回已启动的守卫
    pub async fn start(config: &Config) -> Result<Self> {
        // 注意：局部变量不能命名为 display，会与 tracing 宏展开引入的
        // tracing::field::display 冲突
        let display_name = format!(":{}", config.display_number);
        info!("正在启动虚拟显示服务: {} {}", config.xvfb_path, display_name);

        let child = Command::new(&config.xvfb_path)
            .arg(&display_name)
            .args(["-screen", "0", "1024x768x24"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::display_start_failed(config.xvfb_path.as_str(), e))?;

        debug!("虚拟显示服务已启动 (DISPLAY={})", display_name);

        Ok(Self {
            child,
            display: display_name,
        })
    }

    /// 获取 DISPLAY 环境变量的值
    pub fn display(&self) -> &str {
        &self.display
    }

    /// 终止虚拟显示服务（尽力而为，失败不传播）
    pub async fn shutdown(mut self) {
        match self.child.kill().await {
            Ok(()) => debug!("虚拟显示服务已终止 (DISPLAY={})", self.display),
            Err(e) => warn!("⚠️ 终止虚拟显示服务失败（忽略）: {}", e),
        }
    }
}
