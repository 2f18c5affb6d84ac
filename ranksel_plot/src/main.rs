use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use ranksel_plot::{PlotConf, Preset, Result, plot_presets};

/// Render log-log comparison charts from recorded result tables
/// 根据已记录的结果表渲染双对数对比图
#[derive(Parser)]
#[command(name = "ranksel_plot", version)]
struct Cli {
  /// Comparisons to render; when omitted, every one whose tables exist
  /// 要渲染的对比；省略时渲染所有结果表齐全的对比
  #[arg(value_enum)]
  names: Vec<Preset>,

  /// JSON config file / JSON 配置文件
  #[arg(long)]
  conf: Option<PathBuf>,

  /// Output directory / 输出目录
  #[arg(long)]
  plots_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
  let mut conf = match &cli.conf {
    Some(path) => PlotConf::load(path)?,
    None => PlotConf::default(),
  };
  if let Some(dir) = cli.plots_dir {
    conf.plots_dir = dir;
  }

  plot_presets(&conf, &cli.names)?;
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
