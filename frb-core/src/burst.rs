//! Разбор и сборка burst-файлов симулятора.
//!
//! Файл начинается 64-байтовым блоком тега ("FORMAT 1.0" … "FORMAT 2.1"),
//! за которым следует заголовок, раскладка которого зависит от версии,
//! и сырой f32-payload матрицы время×частота.

use frb_types::{
    BurstError, BurstHeader, BurstResult, DenseMatrix, FormatVersion, Position, NAME_FIELD_SIZE,
    TAG_BLOCK_SIZE,
};

use crate::{
    binary::{ByteCursor, ByteWriter},
    matrix::extract_dense,
};

/// Разбирает заголовок burst-файла.
///
/// Возвращает нормализованный заголовок и смещение начала payload-а.
/// На каждую версию формата потребляется ровно документированное число
/// байт; неизвестный тег отвергается без чтения дальнейших полей.
pub fn parse_burst_header(bytes: &[u8]) -> BurstResult<(BurstHeader, usize)> {
    let mut cur = ByteCursor::new(bytes);

    let tag = cur.read_tag(TAG_BLOCK_SIZE)?;
    let version = FormatVersion::from_tag(&tag)?;

    // Общий префикс всех четырёх версий
    let name = cur.read_text(NAME_FIELD_SIZE)?;
    let t_start = cur.read_f32()?;
    let t_end = cur.read_f32()?;
    let t_samp = cur.read_f32()?;
    let f_lo = cur.read_f32()?;
    let f_hi = cur.read_f32()?;
    let nchan = cur.read_i32()?;

    let position = if version.has_postype() {
        let postype = cur.read_i32()?;
        if postype == 1 {
            Position::Angle {
                raj_rad: cur.read_f32()?,
                decj_rad: cur.read_f32()?,
            }
        } else {
            // Любое значение кроме 1 — позиция задана файлом
            Position::File(cur.read_text(NAME_FIELD_SIZE)?)
        }
    } else {
        // Форматы 1.0/1.1: позиция всегда двумя углами
        Position::Angle {
            raj_rad: cur.read_f32()?,
            decj_rad: cur.read_f32()?,
        }
    };

    let useangle = cur.read_i32()? != 0;
    let initial_seed = cur.read_i64()?;

    if version.has_labels_flag() {
        let writelabels = cur.read_i32()?;
        if writelabels == 1 {
            // Расширение labels не поддерживается: заголовок не возвращаем
            return Err(BurstError::UnsupportedFeature("labels"));
        }
    }

    let header = BurstHeader {
        version,
        name,
        t_start,
        t_end,
        t_samp,
        f_lo,
        f_hi,
        nchan,
        position,
        useangle,
        initial_seed,
    };

    Ok((header, cur.offset()))
}

/// Разбирает burst-файл целиком: заголовок + плотная матрица payload-а
/// в каноническом порядке каналов.
pub fn parse_burst(bytes: &[u8]) -> BurstResult<(BurstHeader, DenseMatrix)> {
    let (header, payload_at) = parse_burst_header(bytes)?;
    let dense = extract_dense(&bytes[payload_at..], header.nchan)?;
    Ok((header, dense))
}

/// Собирает заголовок burst-файла для любой версии формата.
///
/// Обратная операция к [`parse_burst_header`]; используется тестовыми
/// векторами и подменой симулятора в тестах пайплайна.
pub fn write_burst_header(header: &BurstHeader) -> BurstResult<Vec<u8>> {
    let mut w = ByteWriter::new();
    let version = header.version;

    w.put_text("format", version.tag(), TAG_BLOCK_SIZE)?;
    w.put_text("name", &header.name, NAME_FIELD_SIZE)?;
    w.put_f32(header.t_start);
    w.put_f32(header.t_end);
    w.put_f32(header.t_samp);
    w.put_f32(header.f_lo);
    w.put_f32(header.f_hi);
    w.put_i32(header.nchan);

    if version.has_postype() {
        match &header.position {
            Position::Angle { raj_rad, decj_rad } => {
                w.put_i32(1);
                w.put_f32(*raj_rad);
                w.put_f32(*decj_rad);
            }
            Position::File(name) => {
                w.put_i32(0);
                w.put_text("position file", name, NAME_FIELD_SIZE)?;
            }
        }
    } else {
        match &header.position {
            Position::Angle { raj_rad, decj_rad } => {
                w.put_f32(*raj_rad);
                w.put_f32(*decj_rad);
            }
            // До FORMAT 1.2 позиция файлом невыразима
            Position::File(_) => {
                return Err(BurstError::UnsupportedFeature(
                    "file position requires FORMAT 1.2 or later",
                ));
            }
        }
    }

    w.put_i32(if header.useangle { 1 } else { 0 });
    w.put_i64(header.initial_seed);

    if version.has_labels_flag() {
        w.put_i32(0); // labels никогда не пишем
    }

    Ok(w.into_bytes())
}

/// Собирает burst-файл целиком: заголовок + сырой f32-payload.
///
/// `samples` даются в порядке каналов на диске (до нормализующего
/// разворота столбцов).
pub fn write_burst(
    header: &BurstHeader,
    samples: &[f32],
) -> BurstResult<Vec<u8>> {
    let mut bytes = write_burst_header(header)?;
    let mut w = ByteWriter::new();
    for &v in samples {
        w.put_f32(v);
    }
    bytes.extend_from_slice(&w.into_bytes());
    Ok(bytes)
}
