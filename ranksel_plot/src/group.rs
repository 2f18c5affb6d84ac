// Group rows by density
// 按密度分组

use ranksel_bench::ResultTable;

/// Curve of one density / 单个密度的曲线
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGroup {
  pub density: f64,
  /// (size, mean) in row order, missing means skipped
  /// 按行顺序的（大小，平均值），跳过缺失值
  pub points: Vec<(u64, f64)>,
}

impl DensityGroup {
  /// `density = 10%`
  pub fn label(&self) -> String {
    format!("density = {}%", percent(self.density))
  }
}

fn percent(d: f64) -> f64 {
  (d * 100.0 * 1e6).round() / 1e6
}

/// Groups keyed by exact density equality, ascending by density
/// 按密度精确相等分组，密度升序
pub fn group_by_density(table: &ResultTable) -> Vec<DensityGroup> {
  let mut li: Vec<DensityGroup> = Vec::new();
  for row in &table.rows {
    let pos = match li.iter().position(|g| g.density == row.density) {
      Some(pos) => pos,
      None => {
        li.push(DensityGroup {
          density: row.density,
          points: Vec::new(),
        });
        li.len() - 1
      }
    };
    if let Some(mean) = row.mean {
      li[pos].points.push((row.size, mean));
    }
  }
  li.sort_by(|a, b| a.density.total_cmp(&b.density));
  li
}
