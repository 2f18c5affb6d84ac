// Shared y-axis ticks
// 共享 y 轴刻度

use ranksel_bench::ResultTable;

/// Number of y ticks / y 轴刻度数
pub const TICKS: usize = 6;

/// Distinct positive means of all tables, ascending
/// 所有表中互不相同的正平均值，升序
pub fn merged_means<'a>(tables: impl IntoIterator<Item = &'a ResultTable>) -> Vec<f64> {
  let mut li: Vec<f64> = tables
    .into_iter()
    .flat_map(|t| t.means())
    .filter(|m| *m > 0.0 && m.is_finite())
    .collect();
  li.sort_by(f64::total_cmp);
  li.dedup();
  li
}

/// Six log-uniform ticks from the smallest to the largest mean, rounded up.
/// Tick `i` is `10^(log10(min) + i * (log10(max) - log10(min)) / 5)`.
///
/// 从最小到最大平均值的六个对数均匀刻度，向上取整。
///
/// `sorted` must be ascending. Returns `None` when empty, or when the
/// endpoints are not positive finite numbers in order, as they have no
/// place on a log axis.
///
/// `sorted` 须为升序。为空、或端点不是有序的正有限数时返回 `None`。
pub fn log_ticks(sorted: &[f64]) -> Option<[f64; TICKS]> {
  let (&min, &max) = (sorted.first()?, sorted.last()?);
  if !(min > 0.0 && max.is_finite() && min <= max) {
    return None;
  }
  let lo = min.log10();
  let step = (max.log10() - lo) / (TICKS - 1) as f64;

  let mut ticks = [0.0; TICKS];
  let mut prev = min;
  for (i, tick) in ticks.iter_mut().enumerate() {
    // Endpoints pinned: 10^log10(x) is not always x
    // 端点固定：10^log10(x) 不一定等于 x
    let v = match i {
      0 => min,
      i if i == TICKS - 1 => max,
      _ => 10f64.powf(lo + i as f64 * step).clamp(prev, max),
    };
    prev = v;
    *tick = v.ceil();
  }
  Some(ticks)
}
