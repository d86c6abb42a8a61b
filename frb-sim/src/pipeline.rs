use std::fs;

use frb_core::{build_container, parse_burst, sparsify};
use frb_types::BurstContainer;
use log::info;

use crate::{params::write_param_files, runner::SimulatorRunner, SimConfig, SimError, SimResult};

/// Оркестрирует один прогон: параметры → симулятор → контейнер.
pub struct SimPipeline {
    config: SimConfig,
}

/// Итог прогона для отчёта.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source_name: String,
    pub nt: i64,
    pub nf: i64,
    pub nnz: usize,
    pub sparsity_pct: f64,
    pub container_bytes: usize,
    pub window_secs: f64,
}

impl SimPipeline {
    /// Создаёт пайплайн, проверяя конфигурацию.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Запускает прогон. Блокируется до завершения симулятора.
    ///
    /// Контейнер пишется только после успешной сборки целиком: при любой
    /// ошибке частичный выход не создаётся.
    pub fn run(
        &self,
        runner: &dyn SimulatorRunner,
    ) -> SimResult<RunSummary> {
        let cfg = &self.config;
        let window = cfg.grid().capture_window(cfg.dm);

        // Файлы параметров
        write_param_files(cfg)?;
        let sys_path = cfg.sys_params_path()?;
        let burst_path = cfg.burst_params_path()?;
        let dat_path = cfg.dat_path()?;

        info!(
            "Launching simulator: dm={} pc/cm^3, window={}s, output {:?}",
            cfg.dm, window, dat_path
        );
        runner.run(&sys_path, &burst_path, &dat_path)?;

        // Выход симулятора читается целиком в память
        let bytes = fs::read(&dat_path).map_err(|e| {
            SimError::Upstream(format!("simulator output {dat_path:?} is unreadable: {e}"))
        })?;

        let (header, dense) = parse_burst(&bytes)?;
        info!(
            "Parsed {} ({}): {} samples x {} channels",
            header.name,
            header.version.tag(),
            dense.nt(),
            dense.nf(),
        );

        let sparse = sparsify(&dense);
        let total = dense.nt() * dense.nf();
        let sparsity_pct = if total == 0 {
            0.0
        } else {
            100.0 * (1.0 - sparse.nnz() as f64 / total as f64)
        };

        let container = BurstContainer {
            nf: dense.nf() as i64,
            nt: dense.nt() as i64,
            dm: cfg.dm,
            flux: cfg.flux,
            width: cfg.width,
            tburst: cfg.tburst,
            sparse,
        };

        let out_bytes = build_container(&container)?;
        fs::write(&cfg.outfile, &out_bytes)?;
        info!("Container written: {:?}", cfg.outfile);

        Ok(RunSummary {
            source_name: header.name,
            nt: container.nt,
            nf: container.nf,
            nnz: container.nnz(),
            sparsity_pct,
            container_bytes: out_bytes.len(),
            window_secs: window,
        })
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Source        : {}", self.source_name)?;
        writeln!(f, "  Window        : {:.0}s", self.window_secs)?;
        writeln!(f, "  Matrix        : {} x {}", self.nt, self.nf)?;
        writeln!(f, "  Nonzero       : {}", self.nnz)?;
        writeln!(f, "  Sparsity      : {:.2}%", self.sparsity_pct)?;
        writeln!(
            f,
            "  Container     : {:.1} KB",
            self.container_bytes as f64 / 1e3
        )?;
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use frb_core::{parse_container, write_burst};
    use frb_types::{BurstHeader, FormatVersion, Position};

    use super::*;

    /// Подменный симулятор: пишет детерминированный burst-файл формата 1.2.
    struct FakeSimulator {
        nchan: i32,
        samples: Vec<f32>,
    }

    impl SimulatorRunner for FakeSimulator {
        fn run(
            &self,
            sys_params: &Path,
            burst_params: &Path,
            out: &Path,
        ) -> SimResult<()> {
            // Настоящий симулятор читает оба файла параметров — проверяем,
            // что пайплайн их создал
            assert!(sys_params.exists(), "sys params must exist");
            assert!(burst_params.exists(), "burst params must exist");

            let header = BurstHeader {
                version: FormatVersion::V1_2,
                name: "FAKE FRB #1000".to_string(),
                t_start: 0.0,
                t_end: 100.0,
                t_samp: 1.31072e-3,
                f_lo: 300.0244,
                f_hi: 500.0,
                nchan: self.nchan,
                position: Position::Angle {
                    raj_rad: 0.0,
                    decj_rad: 0.0,
                },
                useangle: false,
                initial_seed: 42,
            };
            std::fs::write(out, write_burst(&header, &self.samples).unwrap())?;
            Ok(())
        }
    }

    /// Подменный симулятор, не создающий выхода.
    struct BrokenSimulator;

    impl SimulatorRunner for BrokenSimulator {
        fn run(
            &self,
            _sys_params: &Path,
            _burst_params: &Path,
            _out: &Path,
        ) -> SimResult<()> {
            Err(SimError::Upstream("simulator crashed".to_string()))
        }
    }

    fn test_config(outfile: PathBuf) -> SimConfig {
        SimConfig {
            dm: 500.0,
            flux: 3.2,
            tburst: 12.5,
            nchan: 2,
            outfile,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_pipeline_writes_valid_container() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("burst.sim");

        let pipeline = SimPipeline::new(test_config(outfile.clone())).unwrap();
        let fake = FakeSimulator {
            nchan: 2,
            samples: vec![1.0, 0.0, 0.0, 3.0],
        };

        let summary = pipeline.run(&fake).unwrap();
        assert_eq!(summary.nt, 2);
        assert_eq!(summary.nf, 2);
        assert_eq!(summary.nnz, 2);
        assert!((summary.sparsity_pct - 50.0).abs() < 1e-9);

        // Контейнер читается обратно и несёт метаданные конфигурации
        let container = parse_container(&std::fs::read(&outfile).unwrap()).unwrap();
        assert_eq!(container.dm, 500.0);
        assert_eq!(container.flux, 3.2);
        assert_eq!(container.tburst, 12.5);
        assert_eq!(container.sparse.rows, vec![0, 1]);
        assert_eq!(container.sparse.cols, vec![1, 0]);
        assert_eq!(container.sparse.values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_pipeline_failed_upstream_leaves_no_container() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("burst.sim");

        let pipeline = SimPipeline::new(test_config(outfile.clone())).unwrap();
        let err = pipeline.run(&BrokenSimulator).unwrap_err();

        assert!(matches!(err, SimError::Upstream(_)));
        assert!(!outfile.exists(), "частичный выход не создаётся");
    }

    #[test]
    fn test_pipeline_malformed_dat_leaves_no_container() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("burst.sim");

        let pipeline = SimPipeline::new(test_config(outfile.clone())).unwrap();
        // nchan в заголовке = 2, payload из трёх значений — не кратно строке
        let fake = FakeSimulator {
            nchan: 2,
            samples: vec![1.0, 2.0, 3.0],
        };

        let err = pipeline.run(&fake).unwrap_err();
        assert!(matches!(
            err,
            SimError::Burst(frb_types::BurstError::MalformedPayload(_))
        ));
        assert!(!outfile.exists());
    }

    #[test]
    fn test_pipeline_all_zero_burst() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("quiet.sim");

        let pipeline = SimPipeline::new(test_config(outfile.clone())).unwrap();
        let fake = FakeSimulator {
            nchan: 2,
            samples: vec![0.0; 8],
        };

        let summary = pipeline.run(&fake).unwrap();
        assert_eq!(summary.nnz, 0);
        assert!((summary.sparsity_pct - 100.0).abs() < 1e-9);

        let container = parse_container(&std::fs::read(&outfile).unwrap()).unwrap();
        assert_eq!(container.nnz(), 0);
        assert_eq!(container.nt, 4);
    }

    #[test]
    fn test_summary_display_banner() {
        let summary = RunSummary {
            source_name: "FAKE FRB #1000".to_string(),
            nt: 1700,
            nf: 4096,
            nnz: 12345,
            sparsity_pct: 99.82,
            container_bytes: 296336,
            window_secs: 2229.0,
        };
        let text = format!("{summary}");

        assert!(text.contains("FAKE FRB #1000"));
        assert!(text.contains("1700 x 4096"));
        assert!(text.contains("99.82%"));
        assert!(text.starts_with('━'));
    }
}
