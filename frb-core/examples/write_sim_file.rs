//! Пример: сборка .sim контейнера из синтетической матрицы
//!
//! Демонстрирует:
//! - извлечение плотной матрицы из сырого payload-а
//! - COO-разрежение
//! - сериализацию контейнера через build_container

use frb_core::{build_container, extract_dense, sparsify};
use frb_types::BurstContainer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "frb-core/test_output.sim";

    // --- Синтетический payload: 4 строки по 8 каналов, редкий сигнал ---
    let nchan = 8;
    let mut samples = vec![0.0f32; 4 * nchan];
    samples[3] = 1.5; // строка 0
    samples[nchan + 7] = -0.25; // строка 1
    samples[3 * nchan] = 9.0; // строка 3

    let bytes: Vec<u8> = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
    let dense = extract_dense(&bytes, nchan as i32)?;
    let sparse = sparsify(&dense);

    println!(
        "Matrix {}x{}: {} nonzero",
        dense.nt(),
        dense.nf(),
        sparse.nnz()
    );

    // --- Контейнер ---
    let container = BurstContainer {
        nf: dense.nf() as i64,
        nt: dense.nt() as i64,
        dm: 500.0,
        flux: 3.2,
        width: 5e-3,
        tburst: 12.5,
        sparse,
    };

    let out = build_container(&container)?;
    std::fs::write(output_path, &out)?;

    println!("\n✓ Записано: {output_path}");
    println!("  Bytes    : {}", out.len());
    println!("  Nonzero  : {}", container.nnz());

    Ok(())
}
