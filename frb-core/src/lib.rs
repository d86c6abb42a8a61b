//! Библиотека бинарных форматов FRB
//!
//! Эталонная реализация чтения burst-файлов симулятора (четыре ревизии
//! заголовка), извлечения и разрежения матрицы время×частота, а также
//! компактного выходного контейнера и plot-формата.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use frb_core::{burst::parse_burst, matrix::sparsify};
//!
//! let bytes = std::fs::read("frb.dat")?;
//! let (header, dense) = parse_burst(&bytes)?;
//! let sparse = sparsify(&dense);
//! println!("{}: {} nonzero of {}x{}", header.name, sparse.nnz(), dense.nt(), dense.nf());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod burst;
pub mod container;
pub mod dispersion;
pub mod matrix;
pub mod plot;

pub use binary::*;
pub use burst::*;
pub use container::*;
pub use dispersion::*;
pub use matrix::*;
pub use plot::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
