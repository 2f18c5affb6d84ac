// Sweep generator
// 扫描点生成

use serde::{Deserialize, Serialize};

/// One (size, density) combination / 一个（大小，密度）组合
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepPoint {
  /// Bit-vector length in bits / 位向量长度（位）
  pub size: u64,
  /// Fraction of set bits / 置位比例
  pub density: f64,
}

/// Ordered cross product, size-major: size varies slowest, density fastest.
/// Point `i` has `sizes[i / D]` and `densities[i % D]` for `D = densities.len()`.
///
/// 有序笛卡尔积，大小为外层：大小变化最慢，密度变化最快。
pub fn sweep(sizes: &[u64], densities: &[f64]) -> Vec<SweepPoint> {
  sizes
    .iter()
    .flat_map(|&size| {
      densities
        .iter()
        .map(move |&density| SweepPoint { size, density })
    })
    .collect()
}
