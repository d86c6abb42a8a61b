//! Кодек выходного контейнера `.sim`.
//!
//! Раскладка (все числа little-endian, без выравнивающих вставок):
//! ```text
//! [nf:i64][nt:i64][nnz:i64][dm:f64][flux:f64][width:f64][tburst:f64]
//! [rows:i64 × nnz][cols:i64 × nnz][values:f64 × nnz]
//! ```
//! Массивы пишутся вплотную; читатель обязан знать nnz из заголовка до
//! чтения массивов.

use frb_types::{BurstContainer, BurstError, BurstResult, SparseMatrix};

use crate::binary::{ByteCursor, ByteWriter};

/// Размер скалярного заголовка контейнера (7 полей по 8 байт).
pub const CONTAINER_HEADER_SIZE: usize = 7 * 8;

/// Сериализует контейнер в байты.
pub fn build_container(c: &BurstContainer) -> BurstResult<Vec<u8>> {
    if !c.sparse.is_consistent() {
        return Err(BurstError::malformed(format!(
            "inconsistent sparse triple: {} rows, {} cols, {} values",
            c.sparse.rows.len(),
            c.sparse.cols.len(),
            c.sparse.values.len(),
        )));
    }

    let nnz = c.nnz();
    let mut w = ByteWriter::new();

    w.put_i64(c.nf);
    w.put_i64(c.nt);
    w.put_i64(nnz as i64);
    w.put_f64(c.dm);
    w.put_f64(c.flux);
    w.put_f64(c.width);
    w.put_f64(c.tburst);

    for &row in &c.sparse.rows {
        w.put_i64(row);
    }
    for &col in &c.sparse.cols {
        w.put_i64(col);
    }
    for &value in &c.sparse.values {
        w.put_f64(value);
    }

    Ok(w.into_bytes())
}

/// Разбирает контейнер (обратная операция к [`build_container`]).
///
/// Читает ровно nnz элементов каждого массива; недостающие байты —
/// [`BurstError::TruncatedInput`], лишние в хвосте —
/// [`BurstError::MalformedPayload`].
pub fn parse_container(bytes: &[u8]) -> BurstResult<BurstContainer> {
    let mut cur = ByteCursor::new(bytes);

    let nf = cur.read_i64()?;
    let nt = cur.read_i64()?;
    let nnz = cur.read_i64()?;
    let dm = cur.read_f64()?;
    let flux = cur.read_f64()?;
    let width = cur.read_f64()?;
    let tburst = cur.read_f64()?;

    if nf < 0 || nt < 0 || nnz < 0 {
        return Err(BurstError::malformed(format!(
            "negative dimension in container header: nf={nf}, nt={nt}, nnz={nnz}"
        )));
    }
    let nnz = nnz as usize;

    let mut sparse = SparseMatrix {
        rows: Vec::with_capacity(nnz),
        cols: Vec::with_capacity(nnz),
        values: Vec::with_capacity(nnz),
    };
    for _ in 0..nnz {
        sparse.rows.push(cur.read_i64()?);
    }
    for _ in 0..nnz {
        sparse.cols.push(cur.read_i64()?);
    }
    for _ in 0..nnz {
        sparse.values.push(cur.read_f64()?);
    }

    if cur.remaining() != 0 {
        return Err(BurstError::malformed(format!(
            "{} trailing bytes after container arrays",
            cur.remaining()
        )));
    }

    Ok(BurstContainer {
        nf,
        nt,
        dm,
        flux,
        width,
        tburst,
        sparse,
    })
}
