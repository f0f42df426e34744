use omr_sheet_process::{logger, App, ArgsError, CliArgs, Config, USAGE};
use tracing::error;

#[tokio::main]
async fn main() {
    // 初始化日志
    logger::init();

    // 解析命令行参数（任何副作用之前）
    let args = match CliArgs::parse() {
        Ok(args) => args,
        Err(ArgsError::HelpRequested) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("参数错误: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用；识别程序的退出码原样传播给调用方
    let app = App::initialize(config, args);
    match app.run().await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("❌ 任务执行失败: {:#}", e);
            std::process::exit(1);
        }
    }
}
