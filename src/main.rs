use anyhow::Result;
use exam_bank_extract::orchestrator::App;
use exam_bank_extract::utils::logging;
use exam_bank_extract::Config;

fn main() -> Result<()> {
    // 加载配置（环境变量 + 命令行位置参数）
    let config = Config::from_env().apply_cli_args(std::env::args().skip(1));

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
