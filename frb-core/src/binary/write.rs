use byteorder::{ByteOrder, LittleEndian};

use frb_types::{BurstError, BurstResult};

/// Последовательный накопитель байтов (append-only), зеркало [`ByteCursor`].
///
/// [`ByteCursor`]: crate::binary::read::ByteCursor
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        ByteWriter::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put_i32(&mut self, v: i32) {
        let mut b = [0u8; 4];
        LittleEndian::write_i32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn put_i64(&mut self, v: i64) {
        let mut b = [0u8; 8];
        LittleEndian::write_i64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn put_f32(&mut self, v: f32) {
        let mut b = [0u8; 4];
        LittleEndian::write_f32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn put_f64(&mut self, v: f64) {
        let mut b = [0u8; 8];
        LittleEndian::write_f64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    /// Текст с NUL-дополнением до фиксированной ширины.
    ///
    /// Текст длиннее поля — ошибка [`BurstError::FieldTooLong`], никогда
    /// не молчаливое усечение.
    pub fn put_text(
        &mut self,
        field: &'static str,
        text: &str,
        width: usize,
    ) -> BurstResult<()> {
        let bytes = text.as_bytes();
        if bytes.len() > width {
            return Err(BurstError::FieldTooLong {
                field,
                len: bytes.len(),
                max: width,
            });
        }
        self.buf.extend_from_slice(bytes);
        self.buf.resize(self.buf.len() + (width - bytes.len()), 0);
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
