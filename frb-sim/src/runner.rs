use std::path::Path;
use std::process::Command;

use crate::{SimError, SimResult};

/// Узкий интерфейс запуска внешнего симулятора.
///
/// Логика разбора и сборки форматов ничего не знает о запуске процессов:
/// контракт — "по завершении по пути `out` лежит читаемый burst-файл,
/// иначе [`SimError::Upstream`]".
// Реализации: [`CommandRunner`], и подменные runner-ы в тестах пайплайна.
pub trait SimulatorRunner {
    fn run(
        &self,
        sys_params: &Path,
        burst_params: &Path,
        out: &Path,
    ) -> SimResult<()>;
}

/// Запуск симулятора системным процессом:
/// `simulateBurst -p <sys> -p <burst> -o <out>`.
pub struct CommandRunner {
    /// Имя или путь исполняемого файла симулятора
    pub program: String,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self {
            program: "simulateBurst".to_string(),
        }
    }
}

impl SimulatorRunner for CommandRunner {
    fn run(
        &self,
        sys_params: &Path,
        burst_params: &Path,
        out: &Path,
    ) -> SimResult<()> {
        let status = Command::new(&self.program)
            .arg("-p")
            .arg(sys_params)
            .arg("-p")
            .arg(burst_params)
            .arg("-o")
            .arg(out)
            .status()
            .map_err(|e| SimError::Upstream(format!("failed to launch '{}': {e}", self.program)))?;

        if !status.success() {
            return Err(SimError::Upstream(format!(
                "'{}' exited with {status}",
                self.program
            )));
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
