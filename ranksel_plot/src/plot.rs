// Multi-panel log-log comparison figure
// 多面板双对数对比图

use std::path::Path;

use log::info;
use plotters::{coord::Shift, prelude::*};
use ranksel_bench::ResultTable;

use crate::{Error, Result, group_by_density, log_ticks, merged_means};

const FONT: &str = "sans-serif";
const COLORS: [RGBColor; 5] = [BLUE, GREEN, RED, CYAN, MAGENTA];
const LEGEND_H: u32 = 40;
const LEGEND_SLOT: i32 = 160;
const MARKER: i32 = 3;
/// Log-space padding of the axis ranges / 坐标轴范围的对数空间留白
const PAD: f64 = 1.25;

/// One labeled table / 一个带标签的结果表
#[derive(Debug, Clone)]
pub struct Panel {
  pub table: ResultTable,
  /// Panel title / 面板标题
  pub label: String,
}

/// Tables plotted together on one figure
/// 在同一张图上对比的结果表
#[derive(Debug, Clone)]
pub struct Compare {
  /// Output file stem / 输出文件名
  pub name: String,
  pub panels: Vec<Panel>,
}

impl Compare {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      panels: Vec::new(),
    }
  }

  /// Append a panel / 追加面板
  pub fn panel(mut self, table: ResultTable, label: impl Into<String>) -> Self {
    self.panels.push(Panel {
      table,
      label: label.into(),
    });
    self
  }

  /// Shared y ticks over every table / 所有表共享的 y 轴刻度
  pub fn ticks(&self) -> Option<[f64; crate::TICKS]> {
    log_ticks(&self.means())
  }

  fn means(&self) -> Vec<f64> {
    merged_means(self.panels.iter().map(|p| &p.table))
  }

  /// Legend labels, taken from the first panel
  /// 图例标签，取自第一个面板
  pub fn legend(&self) -> Vec<String> {
    self
      .panels
      .first()
      .map(|p| group_by_density(&p.table).iter().map(|g| g.label()).collect())
      .unwrap_or_default()
  }

  /// Render to an SVG file, panels side by side sharing both axes
  /// 渲染为 SVG 文件，面板横向排列并共享两个坐标轴
  pub fn render(&self, path: &Path, (width, height): (u32, u32)) -> Result<()> {
    let means = self.means();
    let ticks = log_ticks(&means).ok_or_else(|| Error::NoData(self.name.clone()))?;
    let (x_lo, x_hi) = self.size_range().ok_or_else(|| Error::NoData(self.name.clone()))?;
    let x_ticks = self.size_ticks(x_lo, x_hi);
    let y_lo = means[0].min(ticks[0]) / PAD;
    let y_hi = means[means.len() - 1].max(ticks[crate::TICKS - 1]) * PAD;

    if let Some(dir) = path.parent()
      && !dir.as_os_str().is_empty()
    {
      std::fs::create_dir_all(dir)?;
    }

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (body, legend) = root.split_vertically(height.saturating_sub(LEGEND_H) as i32);
    let areas = body.split_evenly((1, self.panels.len()));

    let size_fmt = |v: &f64| format!("{v:e}");
    let ns_fmt = |v: &f64| format!("{v:.0}");

    for (i, (panel, area)) in self.panels.iter().zip(areas.iter()).enumerate() {
      let mut chart = ChartBuilder::on(area)
        .caption(&panel.label, (FONT, 16))
        .margin(8)
        .x_label_area_size(40)
        .y_label_area_size(if i == 0 { 60 } else { 30 })
        .build_cartesian_2d(
          (x_lo..x_hi).log_scale().with_key_points(x_ticks.clone()),
          (y_lo..y_hi).log_scale().with_key_points(ticks.to_vec()),
        )?;

      let mut mesh = chart.configure_mesh();
      mesh
        .x_desc("size [num of bits]")
        .x_label_formatter(&size_fmt)
        .y_label_formatter(&ns_fmt);
      if i == 0 {
        mesh.y_desc("time [ns]");
      }
      mesh.draw()?;

      for (g, group) in group_by_density(&panel.table).iter().enumerate() {
        let color = COLORS[g % COLORS.len()];
        let pts: Vec<(f64, f64)> = group
          .points
          .iter()
          .filter(|(_, m)| *m > 0.0)
          .map(|&(s, m)| (s as f64, m))
          .collect();
        chart.draw_series(LineSeries::new(pts.clone(), color.stroke_width(1)))?;
        chart.draw_series(pts.into_iter().map(|p| Circle::new(p, MARKER, color.filled())))?;
      }
    }

    self.draw_legend(&legend, width)?;
    root.present()?;
    info!("{} -> {}", self.name, path.display());
    Ok(())
  }

  /// Global (min, max) size, padded in log space
  /// 全局（最小，最大）大小，在对数空间留白
  fn size_range(&self) -> Option<(f64, f64)> {
    let mut sizes = self
      .panels
      .iter()
      .flat_map(|p| p.table.rows.iter())
      .filter(|r| r.size > 0)
      .map(|r| r.size as f64);
    let first = sizes.next()?;
    let (lo, hi) = sizes.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
    Some((lo / PAD, hi * PAD))
  }

  /// Powers of ten inside `[lo, hi]`; the distinct sizes when fewer than two fit
  /// `[lo, hi]` 内的 10 的幂；不足两个时取互不相同的大小
  fn size_ticks(&self, lo: f64, hi: f64) -> Vec<f64> {
    let li: Vec<f64> = (lo.log10().ceil() as i32..=hi.log10().floor() as i32)
      .map(|k| 10f64.powi(k))
      .filter(|v| (lo..=hi).contains(v))
      .collect();
    if li.len() >= 2 {
      return li;
    }
    let mut sizes: Vec<f64> = self
      .panels
      .iter()
      .flat_map(|p| p.table.rows.iter())
      .filter(|r| r.size > 0)
      .map(|r| r.size as f64)
      .collect();
    sizes.sort_by(f64::total_cmp);
    sizes.dedup();
    sizes
  }

  fn draw_legend<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>, width: u32) -> Result<()> {
    let labels = self.legend();
    let y = LEGEND_H as i32 / 2;
    let x0 = (width as i32 - labels.len() as i32 * LEGEND_SLOT).max(0) / 2;
    let font = (FONT, 14).into_font();

    for (i, label) in labels.into_iter().enumerate() {
      let color = COLORS[i % COLORS.len()];
      let x = x0 + i as i32 * LEGEND_SLOT;
      area.draw(&PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)))?;
      area.draw(&Circle::new((x + 12, y), MARKER, color.filled()))?;
      area.draw(&Text::new(label, (x + 30, y - 7), font.clone()))?;
    }
    Ok(())
  }
}
