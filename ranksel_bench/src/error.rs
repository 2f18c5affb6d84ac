use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] sonic_rs::Error),

  /// Program could not be launched / 程序无法启动
  #[error("spawn {}: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    source: std::io::Error,
  },

  /// Program exited unsuccessfully / 程序异常退出
  #[error("{} exited with {status}: {stderr}", .program.display())]
  Exit {
    program: PathBuf,
    status: ExitStatus,
    stderr: String,
  },

  /// Stdout was empty or not a number / 标准输出为空或不是数字
  #[error("{} printed non-numeric output {output:?}", .program.display())]
  NotNumeric { program: PathBuf, output: String },

  /// Malformed persisted table / 结果表格式错误
  #[error("{}:{line}: {msg}", .path.display())]
  Format {
    path: PathBuf,
    line: usize,
    msg: String,
  },
}

impl Error {
  /// Failure of the external measurement program, isolated per sweep point
  /// 外部测量程序失败，按扫描点隔离
  pub fn is_external(&self) -> bool {
    matches!(
      self,
      Self::Spawn { .. } | Self::Exit { .. } | Self::NotNumeric { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
