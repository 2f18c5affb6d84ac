use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] sonic_rs::Error),

  #[error("{0}")]
  Bench(#[from] ranksel_bench::Error),

  #[error("Plot error: {0}")]
  Plot(String),

  /// No positive mean in any table / 所有表中都没有正的平均值
  #[error("{0}: no data to plot")]
  NoData(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
  fn from(e: DrawingAreaErrorKind<E>) -> Self {
    Self::Plot(e.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
