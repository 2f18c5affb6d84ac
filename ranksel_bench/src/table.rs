// Persisted result tables
// 持久化结果表
//
// One row per line, `size,density,mean`, no header. Floats use the shortest
// round-trip decimal form; a missing mean is an empty field.
// 每行一条记录 `size,density,mean`，无表头。浮点数使用最短可往返的十进制形式；缺失的平均值为空字段。

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const SEP: char = ',';

/// One measured sweep point / 一个已测量的扫描点
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResultRow {
  pub size: u64,
  /// Nominal density, never the skewed parameters
  /// 名义密度，而非偏斜参数
  pub density: f64,
  /// Mean time in ns, `None` when the measurement failed
  /// 平均耗时（纳秒），测量失败时为 `None`
  pub mean: Option<f64>,
}

impl ResultRow {
  pub fn new(size: u64, density: f64, mean: Option<f64>) -> Self {
    Self {
      size,
      density,
      mean,
    }
  }

  /// Encode as one line without the newline / 编码为一行（不含换行）
  pub fn line(&self) -> String {
    match self.mean {
      Some(mean) => format!("{}{SEP}{}{SEP}{mean}", self.size, self.density),
      None => format!("{}{SEP}{}{SEP}", self.size, self.density),
    }
  }
}

/// Rows of one variant, in sweep order / 单个变体的结果行，按扫描顺序
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultTable {
  pub name: String,
  pub rows: Vec<ResultRow>,
}

impl ResultTable {
  pub fn new(name: impl Into<String>, rows: Vec<ResultRow>) -> Self {
    Self {
      name: name.into(),
      rows,
    }
  }

  /// Load a table; columns are positional (size, density, mean).
  /// A first line of three or more fields whose size and density are both
  /// non-numeric is skipped as header; any other bad row is a format error.
  ///
  /// 加载结果表；列按位置识别（size, density, mean）。
  /// 首行至少三个字段且 size 与 density 均非数字时视为表头跳过；其余错误行均为格式错误。
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let name = path
      .file_stem()
      .map(|s| s.to_string_lossy().into_owned())
      .unwrap_or_default();

    let mut rows = Vec::new();
    let mut first = true;
    for (i, line) in text.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      if first {
        first = false;
        if is_header(line) {
          continue;
        }
      }
      rows.push(parse_row(line).map_err(|msg| Error::Format {
        path: path.to_path_buf(),
        line: i + 1,
        msg,
      })?);
    }

    Ok(Self { name, rows })
  }

  /// Distinct means of the table, in row order / 表中互不相同的平均值，按行顺序
  pub fn means(&self) -> Vec<f64> {
    let mut li: Vec<f64> = Vec::new();
    for mean in self.rows.iter().filter_map(|r| r.mean) {
      if !li.contains(&mean) {
        li.push(mean);
      }
    }
    li
  }
}

// Three fields, none of size/density numeric
// 三个字段，且 size 与 density 均非数字
fn is_header(line: &str) -> bool {
  let fields: Vec<&str> = line.split(SEP).map(str::trim).collect();
  fields.len() >= 3 && fields[0].parse::<u64>().is_err() && fields[1].parse::<f64>().is_err()
}

fn parse_row(line: &str) -> Result<ResultRow, String> {
  let fields: Vec<&str> = line.split(SEP).map(str::trim).collect();
  if fields.len() < 3 {
    return Err(format!("expected 3 columns, found {}", fields.len()));
  }
  let size = fields[0]
    .parse::<u64>()
    .map_err(|e| format!("size {:?}: {e}", fields[0]))?;
  let density = fields[1]
    .parse::<f64>()
    .map_err(|e| format!("density {:?}: {e}", fields[1]))?;
  let mean = if fields[2].is_empty() {
    None
  } else {
    Some(
      fields[2]
        .parse::<f64>()
        .map_err(|e| format!("mean {:?}: {e}", fields[2]))?,
    )
  };
  Ok(ResultRow::new(size, density, mean))
}

/// Append-only writer of one table, every row durable once appended.
/// The file is closed on drop.
///
/// 单表追加写入器，每行写入后即持久化。析构时关闭文件。
pub struct Recorder {
  path: PathBuf,
  file: BufWriter<File>,
  rows: usize,
}

impl Recorder {
  /// Create or truncate `path`, creating parent directories
  /// 创建或截断 `path`，并创建父目录
  pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    if let Some(dir) = path.parent()
      && !dir.as_os_str().is_empty()
    {
      std::fs::create_dir_all(dir)?;
    }
    let file = BufWriter::new(File::create(&path)?);
    Ok(Self {
      path,
      file,
      rows: 0,
    })
  }

  /// Write, flush and sync one row / 写入、刷新并同步一行
  pub fn append(&mut self, row: &ResultRow) -> Result<()> {
    writeln!(self.file, "{}", row.line())?;
    self.file.flush()?;
    self.file.get_ref().sync_data()?;
    self.rows += 1;
    Ok(())
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Rows written so far / 已写入行数
  pub fn rows(&self) -> usize {
    self.rows
  }
}
