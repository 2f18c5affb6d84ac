// Measurement invoker
// 测量调用

use std::{
  path::PathBuf,
  process::{Command, Stdio},
};

use log::debug;

use crate::{BenchConf, Error, Result, SweepPoint, Variant};

/// Produces the mean time (ns) of one sweep point
/// 生成单个扫描点的平均耗时（纳秒）
pub trait Measure {
  fn measure(&mut self, variant: &Variant, point: SweepPoint) -> Result<f64>;
}

/// Structured command line, no shell involved
/// 结构化命令行，不经过 shell
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<String>,
}

impl Invocation {
  /// `<program> <size> <repeats> <num_pos> <density1> <density2>`
  pub fn new(variant: &Variant, point: SweepPoint, repeats: u32, num_pos: u64) -> Self {
    let (d1, d2) = variant.density_params(point.density);
    Self {
      program: variant.program.clone(),
      args: vec![
        point.size.to_string(),
        repeats.to_string(),
        num_pos.to_string(),
        d1.to_string(),
        d2.to_string(),
      ],
    }
  }

  fn command(&self) -> Command {
    let mut cmd = Command::new(&self.program);
    cmd
      .args(&self.args)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());
    cmd
  }
}

/// Runs the external program synchronously, one process per call
/// 同步运行外部程序，每次调用一个进程
#[derive(Debug, Clone)]
pub struct Invoker {
  repeats: u32,
  num_pos: u64,
}

impl Invoker {
  pub fn new(conf: &BenchConf) -> Self {
    Self {
      repeats: conf.repeats,
      num_pos: conf.num_pos,
    }
  }

  /// Invocation for a point / 扫描点对应的调用
  pub fn invocation(&self, variant: &Variant, point: SweepPoint) -> Invocation {
    Invocation::new(variant, point, self.repeats, self.num_pos)
  }
}

impl Measure for Invoker {
  fn measure(&mut self, variant: &Variant, point: SweepPoint) -> Result<f64> {
    let inv = self.invocation(variant, point);
    debug!("{} {}", inv.program.display(), inv.args.join(" "));

    let out = inv.command().output().map_err(|source| Error::Spawn {
      program: inv.program.clone(),
      source,
    })?;

    if !out.status.success() {
      return Err(Error::Exit {
        program: inv.program,
        status: out.status,
        stderr: String::from_utf8_lossy(&out.stderr).trim().to_owned(),
      });
    }

    let output = String::from_utf8_lossy(&out.stdout).trim().to_owned();
    match output.parse::<f64>() {
      Ok(mean) if mean.is_finite() => Ok(mean),
      _ => Err(Error::NotNumeric {
        program: inv.program,
        output,
      }),
    }
  }
}
