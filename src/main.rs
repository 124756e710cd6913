mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // 初始化内部诊断日志
    pkglog::diagnostics::init_diagnostics();

    let cli = Cli::parse();
    cli::run(cli)
}
