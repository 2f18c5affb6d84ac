use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};
use ranksel_bench::{BenchConf, Category, Invoker, Result, Runner};

/// Run rank/select benchmark sweeps and record mean times
/// 运行排名/选择基准测试扫描并记录平均耗时
#[derive(Parser)]
#[command(name = "ranksel_bench", version)]
struct Cli {
  /// Benchmark category / 基准测试类别
  category: Category,

  /// JSON config file / JSON 配置文件
  #[arg(long)]
  conf: Option<PathBuf>,

  /// Abort on the first failed measurement / 首次测量失败即中止
  #[arg(long)]
  strict: bool,
}

fn run(cli: Cli) -> Result<()> {
  let mut conf = match &cli.conf {
    Some(path) => BenchConf::load(path)?,
    None => BenchConf::default(),
  };
  if cli.strict {
    conf.strict = true;
  }

  let mut runner = Runner::new(&conf, Invoker::new(&conf));
  for path in runner.run_category(cli.category)? {
    info!("wrote {}", path.display());
  }
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  log_init::init();
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{e}");
      ExitCode::FAILURE
    }
  }
}
