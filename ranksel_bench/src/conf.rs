// Sweep configuration
// 扫描配置

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, SweepPoint, sweep};

/// Benchmark configuration / 基准测试配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConf {
  /// Bit-vector sizes (bits) / 位向量大小（位）
  pub sizes: Vec<u64>,
  /// Densities of set bits / 置位密度
  pub densities: Vec<f64>,
  /// Query positions per repeat / 每轮查询位置数
  pub num_pos: u64,
  /// Repeats averaged by the external program / 外部程序内部平均的重复次数
  pub repeats: u32,
  /// Directory of measurement executables / 测量程序目录
  pub bin_dir: PathBuf,
  /// Output directory of result tables / 结果表输出目录
  pub results_dir: PathBuf,
  /// Abort the sweep on the first failed measurement
  /// 首次测量失败即中止扫描
  pub strict: bool,
}

impl Default for BenchConf {
  fn default() -> Self {
    Self {
      sizes: vec![
        1_000_000,
        4_000_000,
        16_000_000,
        64_000_000,
        256_000_000,
        1_024_000_000,
      ],
      densities: vec![0.1, 0.5, 0.9],
      num_pos: 70_000_000,
      repeats: 10,
      bin_dir: PathBuf::from("bin"),
      results_dir: PathBuf::from("bench-results"),
      strict: false,
    }
  }
}

impl BenchConf {
  /// Create new config with custom sweep lists
  /// 使用自定义扫描列表创建配置
  pub fn new(sizes: Vec<u64>, densities: Vec<f64>) -> Self {
    Self {
      sizes,
      densities,
      ..Self::default()
    }
  }

  /// Load from JSON, missing fields keep defaults
  /// 从 JSON 加载，缺失字段使用默认值
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let json = std::fs::read_to_string(path)?;
    Ok(sonic_rs::from_str(&json)?)
  }

  /// Set query positions / 设置查询位置数
  pub fn num_pos(mut self, num_pos: u64) -> Self {
    self.num_pos = num_pos;
    self
  }

  /// Set repeat count / 设置重复次数
  pub fn repeats(mut self, repeats: u32) -> Self {
    self.repeats = repeats;
    self
  }

  /// Set executable directory / 设置可执行文件目录
  pub fn bin_dir(mut self, dir: PathBuf) -> Self {
    self.bin_dir = dir;
    self
  }

  /// Set results directory / 设置结果目录
  pub fn results_dir(mut self, dir: PathBuf) -> Self {
    self.results_dir = dir;
    self
  }

  /// Set strict mode / 设置严格模式
  pub fn strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  /// Sweep points of this config / 当前配置的扫描点
  pub fn points(&self) -> Vec<SweepPoint> {
    sweep(&self.sizes, &self.densities)
  }

  /// Table path of a variant / 变体结果表路径
  pub fn table_path(&self, name: &str) -> PathBuf {
    self.results_dir.join(format!("{name}.csv"))
  }
}
