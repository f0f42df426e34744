/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入目录的根路径（每个任务一个子目录）
    pub inputs_root: String,
    /// 输出目录的根路径（每个任务一个子目录）
    pub outputs_root: String,
    /// 模板文件存放目录
    pub templates_root: String,
    /// 错误日志文件存放目录
    pub error_log_root: String,
    /// 虚拟显示服务（Xvfb）可执行文件
    pub xvfb_path: String,
    /// 虚拟显示编号（导出为 DISPLAY=:N）
    pub display_number: u16,
    /// 识别程序入口脚本
    pub omr_script: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs_root: "inputs".to_string(),
            outputs_root: "outputs".to_string(),
            templates_root: "templates".to_string(),
            error_log_root: ".".to_string(),
            xvfb_path: "Xvfb".to_string(),
            display_number: 99,
            omr_script: "main.py".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            inputs_root: std::env::var("OMR_INPUTS_ROOT").unwrap_or(default.inputs_root),
            outputs_root: std::env::var("OMR_OUTPUTS_ROOT").unwrap_or(default.outputs_root),
            templates_root: std::env::var("OMR_TEMPLATES_ROOT").unwrap_or(default.templates_root),
            error_log_root: std::env::var("OMR_ERROR_LOG_ROOT").unwrap_or(default.error_log_root),
            xvfb_path: std::env::var("OMR_XVFB_PATH").unwrap_or(default.xvfb_path),
            display_number: std::env::var("OMR_DISPLAY_NUMBER").ok().and_then(|v| v.parse().ok()).unwrap_or(default.display_number),
            omr_script: std::env::var("OMR_SCRIPT").unwrap_or(default.omr_script),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
