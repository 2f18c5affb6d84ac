// Sweep runner
// 扫描运行器

use std::path::PathBuf;

use log::{info, warn};

use crate::{BenchConf, Category, Measure, Recorder, Result, ResultRow, Variant};

/// Runs sweeps of variants against a measurer
/// 使用测量器运行各变体的扫描
pub struct Runner<'a, M> {
  conf: &'a BenchConf,
  measure: M,
}

impl<'a, M: Measure> Runner<'a, M> {
  pub fn new(conf: &'a BenchConf, measure: M) -> Self {
    Self { conf, measure }
  }

  /// Get config reference / 获取配置引用
  pub fn conf(&self) -> &BenchConf {
    self.conf
  }

  /// Consume runner and return the measurer / 取回测量器
  pub fn into_measure(self) -> M {
    self.measure
  }

  /// Run the full sweep of one variant into a fresh table
  /// 对单个变体运行完整扫描，写入新结果表
  ///
  /// A failed measurement is recorded as missing unless strict; in strict mode
  /// the error is returned and the rows already written stay on disk.
  /// 测量失败时记录为缺失（严格模式除外）；严格模式下返回错误，已写入的行保留在磁盘上。
  pub fn run_variant(&mut self, variant: &Variant) -> Result<PathBuf> {
    let points = self.conf.points();
    let total = points.len();
    let mut rec = Recorder::create(self.conf.table_path(&variant.name))?;
    info!("{} -> {}", variant.name, rec.path().display());

    for (i, point) in points.into_iter().enumerate() {
      let mean = match self.measure.measure(variant, point) {
        Ok(mean) => Some(mean),
        Err(e) if e.is_external() && !self.conf.strict => {
          warn!(
            "{} size={} density={}: {e}",
            variant.name, point.size, point.density
          );
          None
        }
        Err(e) => return Err(e),
      };
      rec.append(&ResultRow::new(point.size, point.density, mean))?;
      info!(
        "{} {}/{total} size={} density={}",
        variant.name,
        i + 1,
        point.size,
        point.density
      );
    }

    Ok(rec.path().to_path_buf())
  }

  /// Run every variant of a category in order
  /// 按顺序运行类别中的全部变体
  pub fn run_category(&mut self, category: Category) -> Result<Vec<PathBuf>> {
    category
      .variants(self.conf)
      .iter()
      .map(|v| self.run_variant(v))
      .collect()
  }
}
