//! Пример: чтение .sim контейнера и восстановление плотной матрицы
//!
//! Демонстрирует:
//! - разбор контейнера через parse_container
//! - восстановление плотной матрицы из COO-троек

use frb_core::{densify, parse_container};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = "frb-core/test_output.sim";

    let bytes = std::fs::read(input_path)?;
    let container = match parse_container(&bytes) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✗ Container validation failed: {e}");
            return Err(Box::new(e));
        }
    };

    println!("✓ Container parsed");
    println!("  Matrix        : {} x {}", container.nt, container.nf);
    println!("  Nonzero       : {}", container.nnz());
    println!("  DM            : {} pc/cm^3", container.dm);
    println!("  Flux          : {} Jy", container.flux);
    println!("  Width         : {} s", container.width);
    println!("  t_burst       : {} s", container.tburst);

    // --- Восстановление плотной матрицы (нулевой фон) ---
    let dense = densify(
        &container.sparse,
        container.nt as usize,
        container.nf as usize,
    )?;

    // --- Показываем первые тройки ---
    println!("\nFirst entries:");
    for i in 0..container.nnz().min(3) {
        println!(
            "  [{i}] ({}, {}) = {}",
            container.sparse.rows[i], container.sparse.cols[i], container.sparse.values[i]
        );
    }

    println!("\nDense check: {} rows reconstructed", dense.nt());

    Ok(())
}
