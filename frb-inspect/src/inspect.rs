//! Отчёты по burst- и plot-файлам: метаданные + сводка по матрице.

use frb_core::{parse_burst, parse_plot, sparsify};
use frb_types::DenseMatrix;

use crate::{table::render_table, InspectResult};

/// Отчёт по burst-файлу симулятора: таблица метаданных и сводка по
/// извлечённой матрице.
pub fn inspect_burst(bytes: &[u8]) -> InspectResult<String> {
    let (header, dense) = parse_burst(bytes)?;

    let mut report = render_table(&header.metadata());
    report.push('\n');
    report.push_str(&render_table(&matrix_summary(&dense)));
    Ok(report)
}

/// Отчёт по plot-файлу: таблица метаданных и восстановленная плотная
/// матрица (сводкой; сама отрисовка — забота внешнего потребителя).
pub fn inspect_plot(bytes: &[u8]) -> InspectResult<String> {
    let (header, dense) = parse_plot(bytes)?;

    let mut report = render_table(&header.metadata());
    report.push('\n');
    report.push_str(&render_table(&matrix_summary(&dense)));
    Ok(report)
}

/// Сводка по плотной матрице: размерность, диапазон значений, ненулевые.
fn matrix_summary(m: &DenseMatrix) -> Vec<(&'static str, String)> {
    let sparse = sparsify(m);
    let total = m.nt() * m.nf();

    let (min, max) = m
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let mut rows = vec![
        ("samples (nt)", format!("{}", m.nt())),
        ("channels (nf)", format!("{}", m.nf())),
        ("nonzero", format!("{}", sparse.nnz())),
    ];
    if total > 0 {
        rows.push((
            "sparsity",
            format!("{:.2}%", 100.0 * (1.0 - sparse.nnz() as f64 / total as f64)),
        ));
        rows.push(("min", format!("{min}")));
        rows.push(("max", format!("{max}")));
    }
    rows
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
