// Plot configuration
// 绘图配置

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConf {
  /// Where result tables are read from / 结果表读取目录
  pub results_dir: PathBuf,
  /// Where figures are written / 图像输出目录
  pub plots_dir: PathBuf,
  /// Figure width in px / 图像宽度（像素）
  pub width: u32,
  /// Figure height in px / 图像高度（像素）
  pub height: u32,
}

impl Default for PlotConf {
  fn default() -> Self {
    Self {
      results_dir: PathBuf::from("bench-results"),
      plots_dir: PathBuf::from("plots"),
      width: 1000,
      height: 600,
    }
  }
}

impl PlotConf {
  /// Load from JSON, missing fields keep defaults
  /// 从 JSON 加载，缺失字段使用默认值
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let json = std::fs::read_to_string(path)?;
    Ok(sonic_rs::from_str(&json)?)
  }

  pub fn results_dir(mut self, dir: PathBuf) -> Self {
    self.results_dir = dir;
    self
  }

  pub fn plots_dir(mut self, dir: PathBuf) -> Self {
    self.plots_dir = dir;
    self
  }

  pub fn table_path(&self, name: &str) -> PathBuf {
    self.results_dir.join(format!("{name}.csv"))
  }

  pub fn svg_path(&self, name: &str) -> PathBuf {
    self.plots_dir.join(format!("{name}.svg"))
  }
}
