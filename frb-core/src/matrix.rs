//! Извлечение плотной матрицы из payload-а и COO-разрежение.

use byteorder::{ByteOrder, LittleEndian};

use frb_types::{BurstError, BurstResult, DenseMatrix, SparseMatrix};

/// Разворачивает порядок столбцов каждой строки (j → nf-1-j).
///
/// Нормализует спектральную ось: на диске каналы идут от высоких частот
/// к низким. Инволюция — двойное применение возвращает исходную матрицу.
pub fn reverse_columns(m: &DenseMatrix) -> DenseMatrix {
    let (nt, nf) = (m.nt(), m.nf());
    let mut data = Vec::with_capacity(nt * nf);

    for row in 0..nt {
        let src = m.row(row);
        data.extend(src.iter().rev());
    }

    DenseMatrix::new(nt, nf, data)
}

/// Интерпретирует payload как плоскую последовательность f32 (little-endian)
/// и формирует матрицу `nt × nchan` с каноническим порядком каналов.
///
/// Длина payload-а обязана быть кратной ширине строки (`4 * nchan` байт);
/// иначе — [`BurstError::MalformedPayload`]. Пустой payload допустим и
/// даёт матрицу из нуля строк.
pub fn extract_dense(
    bytes: &[u8],
    nchan: i32,
) -> BurstResult<DenseMatrix> {
    if nchan <= 0 {
        return Err(BurstError::malformed(format!(
            "channel count must be positive, got {nchan}"
        )));
    }

    let nf = nchan as usize;
    let row_bytes = nf * 4;
    if bytes.len() % row_bytes != 0 {
        return Err(BurstError::malformed(format!(
            "payload of {} bytes is not a multiple of the row width ({} channels x 4 bytes)",
            bytes.len(),
            nf,
        )));
    }

    let mut data = Vec::with_capacity(bytes.len() / 4);
    for chunk in bytes.chunks_exact(4) {
        data.push(LittleEndian::read_f32(chunk));
    }

    let nt = data.len() / nf;
    Ok(reverse_columns(&DenseMatrix::new(nt, nf, data)))
}

/// COO-разрежение: собирает все ненулевые элементы матрицы.
///
/// Скан строго по строкам по возрастанию (строка 0 — все столбцы, затем
/// строка 1, …) — наблюдаемый порядок, на который полагается детерминизм
/// выходного контейнера. Нулевые элементы отбрасываются полностью, включая
/// шум, округлившийся точно в ноль — намеренное сжатие с потерями.
pub fn sparsify(m: &DenseMatrix) -> SparseMatrix {
    let mut sparse = SparseMatrix::default();

    for row in 0..m.nt() {
        for (col, &v) in m.row(row).iter().enumerate() {
            if v != 0.0 {
                sparse.rows.push(row as i64);
                sparse.cols.push(col as i64);
                sparse.values.push(v as f64);
            }
        }
    }

    sparse
}

/// Восстанавливает плотную матрицу из разреженной (нулевой фон).
pub fn densify(
    s: &SparseMatrix,
    nt: usize,
    nf: usize,
) -> BurstResult<DenseMatrix> {
    if !s.is_consistent() {
        return Err(BurstError::malformed(format!(
            "inconsistent sparse triple: {} rows, {} cols, {} values",
            s.rows.len(),
            s.cols.len(),
            s.values.len(),
        )));
    }

    let mut data = vec![0.0f32; nt * nf];
    for i in 0..s.nnz() {
        let (row, col) = (s.rows[i], s.cols[i]);
        if row < 0 || col < 0 || row as usize >= nt || col as usize >= nf {
            return Err(BurstError::malformed(format!(
                "sparse index ({row}, {col}) outside {nt}x{nf} matrix"
            )));
        }
        data[row as usize * nf + col as usize] = s.values[i] as f32;
    }

    Ok(DenseMatrix::new(nt, nf, data))
}
