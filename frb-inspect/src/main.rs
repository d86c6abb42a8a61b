use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frb_inspect::{inspect_burst, inspect_plot, InspectResult};
use log::error;

#[derive(Parser, Debug)]
#[command(
    name = "frb-inspect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect burst .dat and raw plot files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Показать метаданные burst-файла симулятора
    Burst {
        /// Путь к .dat файлу
        file: PathBuf,
    },
    /// Разобрать plot-файл и восстановить плотную матрицу
    Plot {
        /// Путь к raw plot-файлу
        file: PathBuf,
    },
}

fn run(command: &Command) -> InspectResult<String> {
    match command {
        Command::Burst { file } => inspect_burst(&fs::read(file)?),
        Command::Plot { file } => inspect_plot(&fs::read(file)?),
    }
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    match run(&cli.command) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
