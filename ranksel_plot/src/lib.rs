// Rank/Select Benchmark Comparison Charts
// 排名/选择基准测试对比图

mod conf;
mod error;
mod group;
mod plot;
mod preset;
mod tick;

pub use conf::PlotConf;
pub use error::{Error, Result};
pub use group::{DensityGroup, group_by_density};
pub use plot::{Compare, Panel};
pub use preset::{Preset, plot_presets};
pub use tick::{TICKS, log_ticks, merged_means};
