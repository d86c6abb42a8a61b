use std::path::PathBuf;

use frb_core::ChannelGrid;

use crate::{SimError, SimResult};

/// Полная конфигурация одного прогона симуляции.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Мера дисперсии burst-а (пк/см³)
    pub dm: f64,
    /// Поток burst-а (Ян)
    pub flux: f64,
    /// Время прихода burst-а (с)
    pub tburst: f64,
    /// Количество частотных каналов
    pub nchan: u32,
    /// Верхняя граница полосы (МГц)
    pub f_hi: f64,
    /// Ширина полосы (МГц)
    pub bandwidth: f64,
    /// Системная температура (К)
    pub tsys: f64,
    /// Усиление (К/Ян)
    pub gain: f64,
    /// Ширина импульса (с)
    pub width: f64,
    /// Спектральный индекс дисперсии
    pub dm_index: f64,
    /// Интервал дискретизации (с)
    pub tsamp: f64,
    /// Путь к выходному .sim контейнеру
    pub outfile: PathBuf,
    /// Дополнительное описание спектра (прокидывается симулятору как есть)
    pub spectrum: String,
    /// Имя источника для системных параметров
    pub source_name: String,
    /// Телескоп
    pub telescope: String,
    /// Наблюдатель
    pub observer: String,
    /// Разрядность квантования симулятора
    pub nbits: u32,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SimConfig {
    /// Частотная сетка наблюдения.
    pub fn grid(&self) -> ChannelGrid {
        ChannelGrid {
            f_hi: self.f_hi,
            bandwidth: self.bandwidth,
            nchan: self.nchan,
        }
    }

    /// Базовое имя прогона (stem выходного файла).
    pub fn stem(&self) -> SimResult<String> {
        self.outfile
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SimError::Config(format!(
                    "outfile {:?} has no usable file stem",
                    self.outfile
                ))
            })
    }

    /// Каталог, в котором живут рабочие файлы прогона.
    pub fn workdir(&self) -> PathBuf {
        match self.outfile.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Путь к файлу системных параметров: sys_<stem>.params.
    pub fn sys_params_path(&self) -> SimResult<PathBuf> {
        Ok(self.workdir().join(format!("sys_{}.params", self.stem()?)))
    }

    /// Путь к файлу параметров burst-а: <stem>.params.
    pub fn burst_params_path(&self) -> SimResult<PathBuf> {
        Ok(self.workdir().join(format!("{}.params", self.stem()?)))
    }

    /// Путь к выходу симулятора: <stem>.dat.
    pub fn dat_path(&self) -> SimResult<PathBuf> {
        Ok(self.workdir().join(format!("{}.dat", self.stem()?)))
    }

    /// Проверяет согласованность конфигурации перед запуском.
    pub fn validate(&self) -> SimResult<()> {
        if self.nchan == 0 {
            return Err(SimError::Config("nchan must be > 0".to_string()));
        }
        if self.bandwidth <= 0.0 {
            return Err(SimError::Config("bandwidth must be > 0".to_string()));
        }
        if self.f_hi <= self.bandwidth {
            return Err(SimError::Config(format!(
                "f_hi {} MHz must exceed bandwidth {} MHz",
                self.f_hi, self.bandwidth
            )));
        }
        if self.tsamp <= 0.0 {
            return Err(SimError::Config("tsamp must be > 0".to_string()));
        }
        self.stem().map(|_| ())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dm: 0.0,
            flux: 0.0,
            tburst: 0.0,
            nchan: 4096,
            f_hi: 500.0,
            bandwidth: 200.0,
            tsys: 165.0,
            gain: 7.60,
            width: 5e-3,
            dm_index: -2.0,
            tsamp: 1.31072e-3,
            outfile: PathBuf::from("frb.sim"),
            spectrum: String::new(),
            source_name: "FAKE FRB #1000".to_string(),
            telescope: "GMRT".to_string(),
            observer: "upanda".to_string(),
            nbits: 2,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let cfg = SimConfig {
            outfile: PathBuf::from("/tmp/run7/burst.sim"),
            ..SimConfig::default()
        };

        assert_eq!(cfg.stem().unwrap(), "burst");
        assert_eq!(
            cfg.sys_params_path().unwrap(),
            PathBuf::from("/tmp/run7/sys_burst.params")
        );
        assert_eq!(
            cfg.burst_params_path().unwrap(),
            PathBuf::from("/tmp/run7/burst.params")
        );
        assert_eq!(cfg.dat_path().unwrap(), PathBuf::from("/tmp/run7/burst.dat"));
    }

    #[test]
    fn test_relative_outfile_uses_current_dir() {
        let cfg = SimConfig {
            outfile: PathBuf::from("frb.sim"),
            ..SimConfig::default()
        };
        assert_eq!(cfg.workdir(), PathBuf::from("."));
        assert_eq!(cfg.dat_path().unwrap(), PathBuf::from("./frb.dat"));
    }

    #[test]
    fn test_validate_catches_bad_grid() {
        let mut cfg = SimConfig::default();
        cfg.validate().unwrap();

        cfg.nchan = 0;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));

        cfg = SimConfig {
            f_hi: 100.0,
            bandwidth: 200.0,
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }
}
