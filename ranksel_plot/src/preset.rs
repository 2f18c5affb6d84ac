// Predefined comparisons
// 预定义对比

use clap::ValueEnum;
use log::{info, warn};
use ranksel_bench::ResultTable;

use crate::{Compare, PlotConf, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Preset {
  CompareSelect,
  CompareRank,
}

impl Preset {
  pub fn name(self) -> &'static str {
    match self {
      Self::CompareSelect => "compare_select",
      Self::CompareRank => "compare_rank",
    }
  }

  /// Tables of the comparison, in panel order; the table name is the panel label
  /// 对比所用的结果表，按面板顺序；表名即面板标签
  pub fn tables(self) -> &'static [&'static str] {
    match self {
      Self::CompareSelect => &[
        "simple_select",
        "rank9sel",
        "simple_select_non_uniform",
        "rank9sel_non_uniform",
      ],
      Self::CompareRank => &["rank9"],
    }
  }

  /// Load every table from `conf.results_dir`
  /// 从 `conf.results_dir` 加载全部结果表
  pub fn load(self, conf: &PlotConf) -> Result<Compare> {
    let mut compare = Compare::new(self.name());
    for &name in self.tables() {
      let table = ResultTable::load(conf.table_path(name))?;
      compare = compare.panel(table, name);
    }
    Ok(compare)
  }

  /// Load and render to `<plots_dir>/<name>.svg`
  /// 加载并渲染到 `<plots_dir>/<name>.svg`
  pub fn plot(self, conf: &PlotConf) -> Result<()> {
    info!("plot {}", self.name());
    let compare = self.load(conf)?;
    compare.render(&conf.svg_path(self.name()), (conf.width, conf.height))
  }

  /// Every table of the comparison exists in `conf.results_dir`
  /// 对比所需的结果表均存在于 `conf.results_dir`
  pub fn available(self, conf: &PlotConf) -> bool {
    self.tables().iter().all(|name| conf.table_path(name).is_file())
  }
}

/// Render the named presets, failing on the first error. With no names,
/// render every preset whose tables exist and skip the rest with a warning.
/// Returns the presets rendered.
///
/// 渲染指定的预设，遇错即返回。未指定时渲染所有结果表齐全的预设，其余告警跳过。
/// 返回已渲染的预设。
pub fn plot_presets(conf: &PlotConf, names: &[Preset]) -> Result<Vec<Preset>> {
  if !names.is_empty() {
    for &preset in names {
      preset.plot(conf)?;
    }
    return Ok(names.to_vec());
  }

  let mut done = Vec::new();
  for &preset in Preset::value_variants() {
    if !preset.available(conf) {
      warn!("skip {}: missing result tables", preset.name());
      continue;
    }
    preset.plot(conf)?;
    done.push(preset);
  }
  Ok(done)
}
