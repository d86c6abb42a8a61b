use crate::{BurstError, BurstResult};

/// Размер блока тега формата в начале burst-файла (байты).
pub const TAG_BLOCK_SIZE: usize = 64;

/// Версия формата burst-файла симулятора.
///
/// Закрытое множество из четырёх известных тегов; всё остальное
/// отвергается, никогда не угадывается.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// "FORMAT 1.0" — позиция всегда двумя углами, без флага labels
    V1_0,
    /// "FORMAT 1.1" — добавлен флаг writelabels
    V1_1,
    /// "FORMAT 1.2" — добавлен дискриминант postype
    V1_2,
    /// "FORMAT 2.1" — как 1.2, payload помечен как сжатый
    V2_1,
}

impl FormatVersion {
    /// Разрешает тег в версию формата. Неизвестный тег — ошибка,
    /// дальнейшие байты не потребляются.
    pub fn from_tag(tag: &str) -> BurstResult<Self> {
        match tag {
            "FORMAT 1.0" => Ok(FormatVersion::V1_0),
            "FORMAT 1.1" => Ok(FormatVersion::V1_1),
            "FORMAT 1.2" => Ok(FormatVersion::V1_2),
            "FORMAT 2.1" => Ok(FormatVersion::V2_1),
            _ => Err(BurstError::unsupported_format(tag)),
        }
    }

    /// Текст тега на диске.
    pub fn tag(&self) -> &'static str {
        match self {
            FormatVersion::V1_0 => "FORMAT 1.0",
            FormatVersion::V1_1 => "FORMAT 1.1",
            FormatVersion::V1_2 => "FORMAT 1.2",
            FormatVersion::V2_1 => "FORMAT 2.1",
        }
    }

    /// Признак сжатия выводится из тега, в байтах файла не хранится.
    pub fn compressed(&self) -> bool {
        matches!(self, FormatVersion::V2_1)
    }

    /// Поле writelabels присутствует начиная с 1.1.
    pub fn has_labels_flag(&self) -> bool {
        !matches!(self, FormatVersion::V1_0)
    }

    /// Дискриминант postype присутствует начиная с 1.2.
    pub fn has_postype(&self) -> bool {
        matches!(self, FormatVersion::V1_2 | FormatVersion::V2_1)
    }
}
