//! Составление текстовых файлов параметров для внешнего симулятора.
//!
//! Два входа: системный блок ключ-значение (`sys_<stem>.params`) и
//! однострочное описание burst-а (`<stem>.params`). Формат чисел — как
//! выводит Display; симулятор разбирает их как обычные float-литералы.

use std::fs;

use crate::{SimConfig, SimResult};

/// Текст файла системных параметров.
///
/// t1 — округлённое окно захвата по дисперсионной задержке нижнего канала,
/// записывается целым числом.
pub fn render_sys_params(cfg: &SimConfig) -> String {
    let grid = cfg.grid();
    let t1 = grid.capture_window(cfg.dm) as i64;

    format!(
        "name: {name}\n\
         telescope: {telescope}\n\
         observer: {observer}\n\
         f1: {f1}\n\
         f2: {f2}\n\
         nchan: {nchan}\n\
         t0: 0.0\n\
         t1: {t1}\n\
         tsamp: {tsamp}\n\
         gain: {gain}\n\
         tsys: {tsys}\n\
         nbits: {nbits}\n",
        name = cfg.source_name,
        telescope = cfg.telescope,
        observer = cfg.observer,
        f1 = grid.f_lo(),
        f2 = cfg.f_hi,
        nchan = cfg.nchan,
        t1 = t1,
        tsamp = cfg.tsamp,
        gain = cfg.gain,
        tsys = cfg.tsys,
        nbits = cfg.nbits,
    )
}

/// Однострочное описание burst-а.
pub fn render_burst_params(cfg: &SimConfig) -> String {
    let mut line = format!(
        "dmburst: 0.0 {fh} {flux} {dm_index} {width} {dm} 2",
        fh = cfg.f_hi,
        flux = cfg.flux,
        dm_index = cfg.dm_index,
        width = cfg.width,
        dm = cfg.dm,
    );
    if !cfg.spectrum.is_empty() {
        line.push(' ');
        line.push_str(&cfg.spectrum);
    }
    line
}

/// Записывает оба файла параметров в рабочий каталог прогона.
pub fn write_param_files(cfg: &SimConfig) -> SimResult<()> {
    fs::write(cfg.sys_params_path()?, render_sys_params(cfg))?;
    fs::write(cfg.burst_params_path()?, render_burst_params(cfg))?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            dm: 500.0,
            flux: 3.2,
            tburst: 12.5,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_sys_params_layout() {
        let text = render_sys_params(&config());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "name: FAKE FRB #1000");
        assert_eq!(lines[1], "telescope: GMRT");
        assert_eq!(lines[2], "observer: upanda");
        assert_eq!(lines[5], "nchan: 4096");
        assert_eq!(lines[6], "t0: 0.0");
        assert_eq!(lines[8], "tsamp: 0.00131072");
        assert_eq!(lines[9], "gain: 7.6");
        assert_eq!(lines[10], "tsys: 165");
        assert_eq!(lines[11], "nbits: 2");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_sys_params_window_is_integer() {
        let text = render_sys_params(&config());
        let t1_line = text
            .lines()
            .find(|l| l.starts_with("t1: "))
            .expect("t1 line present");
        let t1: i64 = t1_line["t1: ".len()..].parse().unwrap();
        assert!(t1 > 0, "окно захвата при dm=500 строго положительное");
    }

    #[test]
    fn test_burst_params_line() {
        let text = render_burst_params(&config());
        assert_eq!(text, "dmburst: 0.0 500 3.2 -2 0.005 500 2");
    }

    #[test]
    fn test_burst_params_with_spectrum() {
        let cfg = SimConfig {
            spectrum: "plaw -1.4".to_string(),
            ..config()
        };
        assert_eq!(
            render_burst_params(&cfg),
            "dmburst: 0.0 500 3.2 -2 0.005 500 2 plaw -1.4"
        );
    }

    #[test]
    fn test_write_param_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SimConfig {
            outfile: dir.path().join("burst.sim"),
            ..config()
        };

        write_param_files(&cfg).unwrap();

        let sys = std::fs::read_to_string(dir.path().join("sys_burst.params")).unwrap();
        let burst = std::fs::read_to_string(dir.path().join("burst.params")).unwrap();
        assert_eq!(sys, render_sys_params(&cfg));
        assert_eq!(burst, render_burst_params(&cfg));
    }
}
