//! Кодек plot-файлов (raw-выгрузка симулятора).
//!
//! 64 резервных байта, затем скалярный заголовок фиксированной раскладки,
//! затем сырой f32-payload. Вариантов формата нет; разрежение на этом
//! пути не выполняется — результатом является полная плотная матрица.

use frb_types::{BurstResult, DenseMatrix, PlotHeader, NAME_FIELD_SIZE};

use crate::{
    binary::{ByteCursor, ByteWriter},
    matrix::extract_dense,
};

/// Размер резервной области в начале plot-файла.
pub const PLOT_RESERVED_SIZE: usize = 64;

/// Смещение начала payload-а в plot-файле.
pub const PLOT_PAYLOAD_OFFSET: usize = PLOT_RESERVED_SIZE + NAME_FIELD_SIZE + 4 * 11 + 8;

/// Разбирает plot-файл: заголовок + плотная матрица в каноническом
/// порядке каналов.
pub fn parse_plot(bytes: &[u8]) -> BurstResult<(PlotHeader, DenseMatrix)> {
    let mut cur = ByteCursor::new(bytes);

    cur.skip(PLOT_RESERVED_SIZE)?;

    let header = PlotHeader {
        name: cur.read_text(NAME_FIELD_SIZE)?,
        t0: cur.read_f32()?,
        t1: cur.read_f32()?,
        tsamp: cur.read_f32()?,
        f1: cur.read_f32()?,
        f2: cur.read_f32()?,
        nchan: cur.read_i32()?,
        postype: cur.read_i32()?,
        raj_rad: cur.read_f32()?,
        dec_rad: cur.read_f32()?,
        useangle: cur.read_i32()?,
        initialseed: cur.read_i64()?,
        writelabels: cur.read_i32()?,
    };

    let dense = extract_dense(cur.rest(), header.nchan)?;
    Ok((header, dense))
}

/// Собирает plot-файл (для тестовых векторов).
///
/// `samples` даются в порядке каналов на диске.
pub fn write_plot(
    header: &PlotHeader,
    samples: &[f32],
) -> BurstResult<Vec<u8>> {
    let mut w = ByteWriter::new();

    w.put_text("reserved", "", PLOT_RESERVED_SIZE)?;
    w.put_text("name", &header.name, NAME_FIELD_SIZE)?;
    w.put_f32(header.t0);
    w.put_f32(header.t1);
    w.put_f32(header.tsamp);
    w.put_f32(header.f1);
    w.put_f32(header.f2);
    w.put_i32(header.nchan);
    w.put_i32(header.postype);
    w.put_f32(header.raj_rad);
    w.put_f32(header.dec_rad);
    w.put_i32(header.useangle);
    w.put_i64(header.initialseed);
    w.put_i32(header.writelabels);

    for &v in samples {
        w.put_f32(v);
    }

    Ok(w.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> PlotHeader {
        PlotHeader {
            name: "FAKE FRB #1000".to_string(),
            t0: 0.0,
            t1: 2229.0,
            tsamp: 1.31072e-3,
            f1: 300.0244,
            f2: 500.0,
            nchan: 2,
            postype: 1,
            raj_rad: 1.25,
            dec_rad: -0.5,
            useangle: 1,
            initialseed: 42,
            writelabels: 0,
        }
    }

    #[test]
    fn test_payload_offset_constant() {
        // 64 + 128 + 11 четырёхбайтовых полей + 8-байтовый seed
        assert_eq!(PLOT_PAYLOAD_OFFSET, 244);

        let bytes = write_plot(&header(), &[]).unwrap();
        assert_eq!(bytes.len(), PLOT_PAYLOAD_OFFSET);
    }

    #[test]
    fn test_round_trip() {
        let samples = [1.0f32, 0.0, 0.0, 3.0];
        let bytes = write_plot(&header(), &samples).unwrap();

        let (parsed, dense) = parse_plot(&bytes).unwrap();
        assert_eq!(parsed, header());

        // Столбцы развёрнуты так же, как на burst-пути
        assert_eq!(dense.nt(), 2);
        assert_eq!(dense.row(0), &[0.0, 1.0]);
        assert_eq!(dense.row(1), &[3.0, 0.0]);
    }

    #[test]
    fn test_reserved_region_ignored() {
        let mut bytes = write_plot(&header(), &[1.0, 2.0]).unwrap();
        bytes[..PLOT_RESERVED_SIZE].fill(0xAA);

        let (parsed, _) = parse_plot(&bytes).unwrap();
        assert_eq!(parsed.name, "FAKE FRB #1000");
    }

    #[test]
    fn test_truncated_header() {
        let bytes = write_plot(&header(), &[]).unwrap();
        let err = parse_plot(&bytes[..100]).unwrap_err();
        assert!(matches!(
            err,
            frb_types::BurstError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn test_ragged_payload_rejected() {
        let mut bytes = write_plot(&header(), &[1.0, 2.0]).unwrap();
        bytes.extend_from_slice(&[0u8; 3]); // хвост не кратен строке

        let err = parse_plot(&bytes).unwrap_err();
        assert!(matches!(err, frb_types::BurstError::MalformedPayload(_)));
    }
}
