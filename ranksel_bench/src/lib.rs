// Rank/Select Benchmark Sweep Runner
// 排名/选择基准测试扫描运行器

mod conf;
mod error;
mod invoke;
mod run;
mod sweep;
mod table;
mod variant;

pub use conf::BenchConf;
pub use error::{Error, Result};
pub use invoke::{Invocation, Invoker, Measure};
pub use run::Runner;
pub use sweep::{SweepPoint, sweep};
pub use table::{Recorder, ResultRow, ResultTable};
pub use variant::{Category, SKEW_HIGH, SKEW_LOW, Variant};
