use byteorder::{ByteOrder, LittleEndian};

use frb_types::{BurstError, BurstResult};

/// Последовательный курсор по байтовому буферу.
///
/// Каждое чтение продвигает смещение ровно на потреблённое количество байт.
/// Все многобайтовые числа на диске — little-endian (нативный порядок
/// симулятора; зафиксировано, не автоопределяется).
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    off: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteCursor { buf, off: 0 }
    }

    /// Текущее смещение от начала буфера.
    pub fn offset(&self) -> usize {
        self.off
    }

    /// Сколько байт ещё не потреблено.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.off
    }

    fn take(&mut self, n: usize) -> BurstResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(BurstError::TruncatedInput {
                offset: self.off,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.off..self.off + n];
        self.off += n;
        Ok(slice)
    }

    /// Пропускает `n` байт (резервные/устаревшие области).
    pub fn skip(&mut self, n: usize) -> BurstResult<()> {
        self.take(n).map(|_| ())
    }

    pub fn read_i32(&mut self) -> BurstResult<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_i64(&mut self) -> BurstResult<i64> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> BurstResult<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> BurstResult<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    /// Текстовое поле фиксированной ширины; хвостовые NUL-байты
    /// отбрасываются.
    pub fn read_text(&mut self, width: usize) -> BurstResult<String> {
        let raw = self.take(width)?;
        let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }

    /// Тег: байты до первого NUL внутри блока фиксированного размера.
    /// Блок потребляется целиком независимо от длины тега.
    pub fn read_tag(&mut self, width: usize) -> BurstResult<String> {
        let raw = self.take(width)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(width);
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }

    /// Остаток буфера целиком (payload после заголовка).
    pub fn rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.off..];
        self.off = self.buf.len();
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_offset() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&7i32.to_le_bytes());
        buf.extend_from_slice(&(-1i64).to_le_bytes());
        buf.extend_from_slice(&1.5f32.to_le_bytes());
        buf.extend_from_slice(&2.25f64.to_le_bytes());

        let mut cur = ByteCursor::new(&buf);
        assert_eq!(cur.read_i32().unwrap(), 7);
        assert_eq!(cur.offset(), 4);
        assert_eq!(cur.read_i64().unwrap(), -1);
        assert_eq!(cur.offset(), 12);
        assert_eq!(cur.read_f32().unwrap(), 1.5);
        assert_eq!(cur.read_f64().unwrap(), 2.25);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_truncated_input_reports_context() {
        let buf = [0u8; 3];
        let mut cur = ByteCursor::new(&buf);

        let err = cur.read_i32().unwrap_err();
        match err {
            BurstError::TruncatedInput {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 4);
                assert_eq!(available, 3);
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
        // Неудачное чтение не двигает смещение
        assert_eq!(cur.offset(), 0);
    }

    #[test]
    fn test_read_text_strips_trailing_nuls() {
        let mut buf = vec![0u8; 16];
        buf[..5].copy_from_slice(b"CRAB!");

        let mut cur = ByteCursor::new(&buf);
        assert_eq!(cur.read_text(16).unwrap(), "CRAB!");
        assert_eq!(cur.offset(), 16);
    }

    #[test]
    fn test_read_tag_stops_at_first_nul() {
        let mut buf = vec![0u8; 64];
        buf[..10].copy_from_slice(b"FORMAT 1.0");
        buf[20] = b'X'; // мусор после терминатора не попадает в тег

        let mut cur = ByteCursor::new(&buf);
        assert_eq!(cur.read_tag(64).unwrap(), "FORMAT 1.0");
        assert_eq!(cur.offset(), 64);
    }

    #[test]
    fn test_rest_consumes_everything() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut cur = ByteCursor::new(&buf);
        cur.skip(2).unwrap();

        assert_eq!(cur.rest(), &[3, 4, 5]);
        assert_eq!(cur.remaining(), 0);
    }
}
