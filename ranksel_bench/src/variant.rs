// Benchmark variants and categories
// 基准测试变体与类别

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::BenchConf;

/// Share of the nominal density given to the first half of a non-uniform bit-vector
/// 非均匀位向量前半部分分得的名义密度比例
pub const SKEW_LOW: f64 = 0.01;
/// Share given to the second half / 后半部分分得的比例
pub const SKEW_HIGH: f64 = 0.99;

/// External measurement program plus naming label
/// 外部测量程序及其名称
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
  /// Table name / 结果表名
  pub name: String,
  /// Executable path / 可执行文件路径
  pub program: PathBuf,
  /// Equal density for both halves / 两半密度相同
  pub uniform: bool,
}

impl Variant {
  pub fn new(name: impl Into<String>, program: impl Into<PathBuf>, uniform: bool) -> Self {
    Self {
      name: name.into(),
      program: program.into(),
      uniform,
    }
  }

  /// Density parameters passed to the program for nominal density `d`
  /// 名义密度 `d` 对应传给程序的两个密度参数
  pub fn density_params(&self, d: f64) -> (f64, f64) {
    if self.uniform {
      (d, d)
    } else {
      (d * SKEW_LOW, d * SKEW_HIGH)
    }
  }
}

/// Benchmark category selected on the command line
/// 命令行选择的基准测试类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Rank,
  Select,
  SelectNonUniform,
  All,
}

/// (table name, executable, uniform)
const RANK: &[(&str, &str, bool)] = &[("rank9", "testrank9", true)];

const SELECT: &[(&str, &str, bool)] = &[
  ("rank9sel", "testrank9sel", true),
  ("simple_select", "testsimplesel3", true),
];

const SELECT_NON_UNIFORM: &[(&str, &str, bool)] = &[
  ("rank9sel_non_uniform", "testrank9sel", false),
  ("simple_select_non_uniform", "testsimplesel3", false),
];

impl Category {
  /// Variants run for this category, in run order
  /// 该类别运行的变体，按运行顺序
  pub fn variants(self, conf: &BenchConf) -> Vec<Variant> {
    let groups: &[&[(&str, &str, bool)]] = match self {
      Self::Rank => &[RANK],
      Self::Select => &[SELECT],
      Self::SelectNonUniform => &[SELECT_NON_UNIFORM],
      Self::All => &[RANK, SELECT, SELECT_NON_UNIFORM],
    };
    groups
      .iter()
      .flat_map(|g| g.iter())
      .map(|&(name, bin, uniform)| Variant::new(name, conf.bin_dir.join(bin), uniform))
      .collect()
  }
}
