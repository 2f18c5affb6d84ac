use aok::{OK, Void};
use log::info;
use ranksel_bench::{
  BenchConf, Category, Error, Measure, Recorder, ResultRow, ResultTable, Runner, SweepPoint,
  Variant,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

/// Fake measurer recording the density params it was asked for
/// 记录所收到密度参数的假测量器
#[derive(Default)]
struct Fake {
  calls: Vec<(u64, f64, f64)>,
  fail_at: Option<usize>,
}

impl Fake {
  fn mean(point: SweepPoint) -> f64 {
    point.size as f64 / 1000.0 + point.density
  }
}

impl Measure for Fake {
  fn measure(&mut self, variant: &Variant, point: SweepPoint) -> ranksel_bench::Result<f64> {
    let (d1, d2) = variant.density_params(point.density);
    let idx = self.calls.len();
    self.calls.push((point.size, d1, d2));
    if self.fail_at == Some(idx) {
      return Err(Error::NotNumeric {
        program: variant.program.clone(),
        output: String::new(),
      });
    }
    Ok(Self::mean(point))
  }
}

fn small_conf(dir: &std::path::Path) -> BenchConf {
  BenchConf::new(vec![1_000_000, 4_000_000], vec![0.1, 0.9]).results_dir(dir.to_path_buf())
}

mod sweep_prop {
  use proptest::prelude::*;
  use ranksel_bench::sweep;

  proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// S×D points, density cycles with period D, size changes every D points
    /// S×D 个点，密度以 D 为周期循环，大小每 D 个点变化一次
    #[test]
    fn prop_sweep_shape(
      sizes in prop::collection::vec(1u64..u64::MAX, 1..8),
      densities in prop::collection::vec(0.0f64..=1.0, 1..8),
    ) {
      let points = sweep(&sizes, &densities);
      let d = densities.len();
      prop_assert_eq!(points.len(), sizes.len() * d);
      for (i, p) in points.iter().enumerate() {
        prop_assert_eq!(p.size, sizes[i / d]);
        prop_assert_eq!(p.density, densities[i % d]);
      }
    }
  }
}

mod table_prop {
  use proptest::prelude::*;
  use ranksel_bench::{Recorder, ResultRow, ResultTable};

  fn row() -> impl Strategy<Value = ResultRow> {
    (
      any::<u64>(),
      0.0f64..=1.0,
      prop::option::of(0.0f64..1e12),
    )
      .prop_map(|(size, density, mean)| ResultRow::new(size, density, mean))
  }

  proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Recorder then loader yields identical rows in identical order
    /// 先写后读得到相同且同序的行
    #[test]
    fn prop_round_trip(rows in prop::collection::vec(row(), 0..40)) {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("t.csv");
      let mut rec = Recorder::create(&path).unwrap();
      for r in &rows {
        rec.append(r).unwrap();
      }
      drop(rec);

      let table = ResultTable::load(&path).unwrap();
      prop_assert_eq!(table.name, "t");
      prop_assert_eq!(table.rows, rows);
    }
  }
}

/// Sizes [1e6, 4e6] × densities [0.1, 0.9], size-major order
/// 大小为外层顺序
#[test]
fn test_end_to_end_order() -> Void {
  let dir = tempfile::tempdir()?;
  let conf = small_conf(dir.path());
  let variant = Variant::new("uni", "unused", true);

  let mut runner = Runner::new(&conf, Fake::default());
  let path = runner.run_variant(&variant)?;
  assert_eq!(path, dir.path().join("uni.csv"));

  let table = ResultTable::load(&path)?;
  let got: Vec<(u64, f64)> = table.rows.iter().map(|r| (r.size, r.density)).collect();
  assert_eq!(
    got,
    vec![
      (1_000_000, 0.1),
      (1_000_000, 0.9),
      (4_000_000, 0.1),
      (4_000_000, 0.9),
    ]
  );
  for r in &table.rows {
    assert_eq!(r.mean, Some(Fake::mean(SweepPoint { size: r.size, density: r.density })));
  }
  info!("{}", std::fs::read_to_string(&path)?);
  OK
}

/// Skewed params go to the program, the nominal density is recorded
/// 偏斜参数传给程序，记录名义密度
#[test]
fn test_non_uniform_split() -> Void {
  let dir = tempfile::tempdir()?;
  let conf = small_conf(dir.path());
  let variant = Variant::new("skew", "unused", false);

  let mut runner = Runner::new(&conf, Fake::default());
  let path = runner.run_variant(&variant)?;
  let fake = runner.into_measure();
  let table = ResultTable::load(&path)?;

  assert_eq!(fake.calls.len(), table.rows.len());
  for ((size, d1, d2), r) in fake.calls.iter().zip(&table.rows) {
    assert_eq!(*size, r.size);
    assert_eq!(*d1, r.density * 0.01);
    assert_eq!(*d2, r.density * 0.99);
    assert!(conf.densities.contains(&r.density));
  }
  assert_eq!(Variant::new("u", "x", true).density_params(0.5), (0.5, 0.5));
  OK
}

/// A failed point becomes an empty mean, the sweep goes on
/// 失败的点记为空平均值，扫描继续
#[test]
fn test_failure_isolated() -> Void {
  let dir = tempfile::tempdir()?;
  let conf = small_conf(dir.path());
  let fake = Fake {
    fail_at: Some(1),
    ..Fake::default()
  };

  let mut runner = Runner::new(&conf, fake);
  let path = runner.run_variant(&Variant::new("gap", "unused", true))?;
  let table = ResultTable::load(&path)?;

  assert_eq!(table.rows.len(), 4);
  assert_eq!(table.rows[1].mean, None);
  assert!(table.rows[0].mean.is_some());
  assert!(table.rows[3].mean.is_some());
  assert!(std::fs::read_to_string(&path)?.contains("1000000,0.9,\n"));
  OK
}

/// Strict mode aborts and keeps the rows already written
/// 严格模式中止，并保留已写入的行
#[test]
fn test_strict_keeps_prefix() -> Void {
  let dir = tempfile::tempdir()?;
  let conf = small_conf(dir.path()).strict(true);
  let fake = Fake {
    fail_at: Some(2),
    ..Fake::default()
  };

  let mut runner = Runner::new(&conf, fake);
  let err = runner
    .run_variant(&Variant::new("strict", "unused", true))
    .unwrap_err();
  assert!(err.is_external());

  let table = ResultTable::load(dir.path().join("strict.csv"))?;
  assert_eq!(table.rows.len(), 2);
  assert_eq!(table.rows[1].density, 0.9);
  OK
}

/// Re-running a variant truncates the old table
/// 重新运行变体会截断旧表
#[test]
fn test_rerun_truncates() -> Void {
  let dir = tempfile::tempdir()?;
  let conf = small_conf(dir.path());
  let variant = Variant::new("again", "unused", true);

  Runner::new(&conf, Fake::default()).run_variant(&variant)?;
  let path = Runner::new(&conf, Fake::default()).run_variant(&variant)?;
  assert_eq!(ResultTable::load(path)?.rows.len(), 4);
  OK
}

/// Abandoned recorder leaves exactly the first k rows
/// 被中途放弃的写入器恰好留下前 k 行
#[test]
fn test_durable_prefix() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("nested").join("crash.csv");
  let rows: Vec<ResultRow> = (0..5)
    .map(|i| ResultRow::new(1000 << i, 0.5, Some(i as f64 * 1.25)))
    .collect();

  let mut rec = Recorder::create(&path)?;
  for r in &rows[..3] {
    rec.append(r)?;
  }
  assert_eq!(rec.rows(), 3);
  std::mem::forget(rec);

  assert_eq!(ResultTable::load(&path)?.rows, rows[..3].to_vec());
  OK
}

#[test]
fn test_header_tolerated() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("h.csv");
  std::fs::write(&path, "size,dense,mean\n1000,0.1,12.5\n\n2000,0.1,\n")?;

  let table = ResultTable::load(&path)?;
  assert_eq!(
    table.rows,
    vec![
      ResultRow::new(1000, 0.1, Some(12.5)),
      ResultRow::new(2000, 0.1, None),
    ]
  );
  OK
}

#[test]
fn test_format_error() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("bad.csv");
  std::fs::write(&path, "1000,0.1,12.5\n2000,0.1\n")?;

  match ResultTable::load(&path) {
    Err(Error::Format { line, .. }) => assert_eq!(line, 2),
    other => panic!("expected format error, got {other:?}"),
  }

  std::fs::write(&path, "1000,0.1,fast\n")?;
  assert!(matches!(ResultTable::load(&path), Err(Error::Format { line: 1, .. })));

  // Malformed first rows are not mistaken for a header
  // 格式错误的首行不会被误当作表头
  for text in ["1e6,0.1,5\n2000,0.1,3\n", "1000,0.1\n2000,0.1,3\n", "size,dense\n"] {
    std::fs::write(&path, text)?;
    assert!(
      matches!(ResultTable::load(&path), Err(Error::Format { line: 1, .. })),
      "{text:?}"
    );
  }
  OK
}

/// Missing or unknown category: usage on stderr, exit 2, nothing written
/// 类别缺失或未知：输出用法，退出码 2，不写任何文件
#[test]
fn test_cli_usage_error() -> Void {
  let dir = tempfile::tempdir()?;
  let args: [&[&str]; 2] = [&["bogus"], &[]];
  for args in args {
    let out = std::process::Command::new(env!("CARGO_BIN_EXE_ranksel_bench"))
      .args(args)
      .current_dir(dir.path())
      .output()?;
    assert_eq!(out.status.code(), Some(2), "{args:?}");
    assert!(String::from_utf8_lossy(&out.stderr).contains("error"));
    assert!(!dir.path().join("bench-results").exists());
  }
  OK
}

#[test]
fn test_distinct_means() -> Void {
  let table = ResultTable::new(
    "m",
    vec![
      ResultRow::new(1, 0.1, Some(3.0)),
      ResultRow::new(1, 0.5, None),
      ResultRow::new(2, 0.1, Some(3.0)),
      ResultRow::new(2, 0.5, Some(7.5)),
    ],
  );
  assert_eq!(table.means(), vec![3.0, 7.5]);
  OK
}

#[test]
fn test_categories() -> Void {
  let conf = BenchConf::default();
  let names = |c: Category| -> Vec<String> { c.variants(&conf).into_iter().map(|v| v.name).collect() };

  assert_eq!(names(Category::Rank), ["rank9"]);
  assert_eq!(names(Category::Select), ["rank9sel", "simple_select"]);
  assert_eq!(
    names(Category::SelectNonUniform),
    ["rank9sel_non_uniform", "simple_select_non_uniform"]
  );
  assert_eq!(names(Category::All).len(), 5);

  for v in Category::SelectNonUniform.variants(&conf) {
    assert!(!v.uniform);
    assert!(v.program.starts_with("bin"));
  }
  OK
}

#[test]
fn test_conf_load() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("conf.json");
  std::fs::write(&path, r#"{"sizes":[64,128],"strict":true}"#)?;

  let conf = BenchConf::load(&path)?;
  assert_eq!(conf.sizes, vec![64, 128]);
  assert!(conf.strict);
  assert_eq!(conf.densities, BenchConf::default().densities);
  assert_eq!(conf.points().len(), 6);
  OK
}

#[test]
fn test_invocation_args() -> Void {
  let conf = BenchConf::default();
  let invoker = ranksel_bench::Invoker::new(&conf);
  let point = SweepPoint {
    size: 4_000_000,
    density: 0.5,
  };

  let inv = invoker.invocation(&Variant::new("n", "bin/testrank9sel", false), point);
  assert_eq!(inv.program, std::path::PathBuf::from("bin/testrank9sel"));
  assert_eq!(
    inv.args,
    vec![
      "4000000".to_owned(),
      "10".to_owned(),
      "70000000".to_owned(),
      (0.5f64 * 0.01).to_string(),
      (0.5f64 * 0.99).to_string(),
    ]
  );

  let inv = invoker.invocation(&Variant::new("u", "bin/testrank9", true), point);
  assert_eq!(inv.args[3], "0.5");
  assert_eq!(inv.args[4], "0.5");
  OK
}

#[cfg(unix)]
mod invoker {
  use aok::{OK, Void};
  use ranksel_bench::{
    BenchConf, Error, Invoker, Measure, ResultTable, Runner, SweepPoint, Variant,
  };

  const POINT: SweepPoint = SweepPoint {
    size: 1_000_000,
    density: 0.1,
  };

  fn invoker() -> Invoker {
    Invoker::new(&BenchConf::default())
  }

  /// `printf <size> ...` prints its first argument
  /// `printf <size> ...` 输出第一个参数
  #[test]
  fn test_numeric_stdout() -> Void {
    let mean = invoker().measure(&Variant::new("p", "printf", true), POINT)?;
    assert_eq!(mean, 1_000_000.0);
    OK
  }

  #[test]
  fn test_non_numeric_stdout() -> Void {
    match invoker().measure(&Variant::new("e", "echo", true), POINT) {
      Err(Error::NotNumeric { output, .. }) => assert_eq!(output, "1000000 10 70000000 0.1 0.1"),
      other => panic!("expected non-numeric, got {other:?}"),
    }
    match invoker().measure(&Variant::new("t", "true", true), POINT) {
      Err(Error::NotNumeric { output, .. }) => assert!(output.is_empty()),
      other => panic!("expected empty output, got {other:?}"),
    }
    OK
  }

  #[test]
  fn test_exit_status() -> Void {
    let err = invoker()
      .measure(&Variant::new("f", "false", true), POINT)
      .unwrap_err();
    assert!(matches!(err, Error::Exit { .. }));
    assert!(err.is_external());

    let err = invoker()
      .measure(&Variant::new("m", "/nonexistent/ranksel_missing", true), POINT)
      .unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
    OK
  }

  /// Program printing nothing leaves a visible gap in every row
  /// 无输出的程序在每行留下可见空缺
  #[test]
  fn test_empty_output_recorded() -> Void {
    let dir = tempfile::tempdir()?;
    let conf = BenchConf::new(vec![64, 128], vec![0.5]).results_dir(dir.path().to_path_buf());
    let mut runner = Runner::new(&conf, Invoker::new(&conf));
    let path = runner.run_variant(&Variant::new("silent", "true", true))?;

    assert_eq!(std::fs::read_to_string(&path)?, "64,0.5,\n128,0.5,\n");
    let table = ResultTable::load(&path)?;
    assert!(table.rows.iter().all(|r| r.mean.is_none()));
    OK
  }
}
