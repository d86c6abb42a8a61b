use std::path::PathBuf;

use clap::Parser;
use frb_sim::{CommandRunner, SimConfig, SimPipeline};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "frb-sim",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run the burst simulator and pack its output into a .sim container",
    long_about = None,
)]
struct Cli {
    /// Мера дисперсии burst-а (пк/см³)
    dm: f64,
    /// Поток burst-а (Ян)
    flux: f64,
    /// Время прихода burst-а (с)
    tburst: f64,
    /// Количество частотных каналов
    #[arg(long, default_value = "4096")]
    nchan: u32,
    /// Верхняя граница полосы (МГц)
    #[arg(long, default_value = "500.0")]
    f_hi: f64,
    /// Ширина полосы (МГц)
    #[arg(long, default_value = "200.0")]
    bandwidth: f64,
    /// Системная температура (К)
    #[arg(long, default_value = "165.0")]
    tsys: f64,
    /// Усиление (К/Ян)
    #[arg(long, default_value = "7.60")]
    gain: f64,
    /// Ширина импульса (с)
    #[arg(long, default_value = "5e-3")]
    width: f64,
    /// Спектральный индекс дисперсии
    #[arg(long, default_value = "-2.0", allow_hyphen_values = true)]
    dm_index: f64,
    /// Интервал дискретизации (с)
    #[arg(long, default_value = "1.31072e-3")]
    tsamp: f64,
    /// Путь к выходному контейнеру
    #[arg(short, long, default_value = "frb.sim")]
    outfile: PathBuf,
    /// Дополнительное описание спектра для симулятора
    #[arg(long, default_value = "")]
    spectrum: String,
    /// Имя или путь исполняемого файла симулятора
    #[arg(long, default_value = "simulateBurst")]
    simulator: String,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let config = SimConfig {
        dm: cli.dm,
        flux: cli.flux,
        tburst: cli.tburst,
        nchan: cli.nchan,
        f_hi: cli.f_hi,
        bandwidth: cli.bandwidth,
        tsys: cli.tsys,
        gain: cli.gain,
        width: cli.width,
        dm_index: cli.dm_index,
        tsamp: cli.tsamp,
        outfile: cli.outfile.clone(),
        spectrum: cli.spectrum,
        ..SimConfig::default()
    };

    let grid = config.grid();

    // Выводим конфигурацию
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  DM            : {} pc/cm^3", config.dm);
    info!("  Flux          : {} Jy", config.flux);
    info!("  Band          : {:.4}-{} MHz", grid.f_lo(), config.f_hi);
    info!("  Channels      : {}", config.nchan);
    info!("  Window        : {:.0}s", grid.capture_window(config.dm));
    info!("  Simulator     : {}", cli.simulator);
    info!("  Output        : {:?}", cli.outfile);
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let pipeline = match SimPipeline::new(config) {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let runner = CommandRunner {
        program: cli.simulator,
    };

    match pipeline.run(&runner) {
        Ok(summary) => {
            info!("\n{summary}");
            info!("✓ Simulation packed: {:?}", cli.outfile);
        }
        Err(e) => {
            error!("Simulation failed: {e}");
            std::process::exit(1);
        }
    }
}
