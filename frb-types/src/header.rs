use crate::FormatVersion;

/// Размер текстовых полей фиксированной ширины (имя источника, имя файла
/// позиции) в заголовках burst- и plot-файлов.
pub const NAME_FIELD_SIZE: usize = 128;

/// Положение источника на небе.
///
/// В форматах ≥1.2 выбирается дискриминантом postype: значение 1 — углы,
/// любое другое — имя файла. В форматах 1.0/1.1 позиция всегда даётся
/// двумя углами.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// Прямое восхождение и склонение (радианы)
    Angle { raj_rad: f32, decj_rad: f32 },
    /// Имя файла с позицией
    File(String),
}

/// Нормализованный заголовок burst-файла симулятора.
///
/// Форма на диске зависит от [`FormatVersion`]; после разбора все варианты
/// приводятся к этой записи.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstHeader {
    /// Версия формата, разрешённая из тега
    pub version: FormatVersion,
    /// Имя источника (128-байтовое текстовое поле)
    pub name: String,
    /// Время начала окна (с)
    pub t_start: f32,
    /// Время конца окна (с)
    pub t_end: f32,
    /// Интервал дискретизации (с)
    pub t_samp: f32,
    /// Нижняя частота (МГц)
    pub f_lo: f32,
    /// Верхняя частота (МГц)
    pub f_hi: f32,
    /// Количество частотных каналов
    pub nchan: i32,
    /// Положение источника
    pub position: Position,
    /// Позиция задана углом (ненулевое значение на диске — true)
    pub useangle: bool,
    /// Начальное зерно генератора симулятора
    pub initial_seed: i64,
}

impl BurstHeader {
    /// Признак сжатия, выводимый из версии формата.
    pub fn compressed(&self) -> bool {
        self.version.compressed()
    }

    /// Упорядоченный набор пар ключ-значение для табличного вывода.
    pub fn metadata(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("format", self.version.tag().to_string()),
            ("name", self.name.clone()),
            ("t_start (s)", format!("{}", self.t_start)),
            ("t_end (s)", format!("{}", self.t_end)),
            ("t_samp (s)", format!("{}", self.t_samp)),
            ("f_lo (MHz)", format!("{}", self.f_lo)),
            ("f_hi (MHz)", format!("{}", self.f_hi)),
            ("nchan", format!("{}", self.nchan)),
        ];

        match &self.position {
            Position::Angle { raj_rad, decj_rad } => {
                rows.push(("raj (rad)", format!("{raj_rad}")));
                rows.push(("decj (rad)", format!("{decj_rad}")));
            }
            Position::File(name) => rows.push(("position file", name.clone())),
        }

        rows.push(("compressed", format!("{}", self.compressed())));
        rows.push(("useangle", format!("{}", self.useangle)));
        rows.push(("initial seed", format!("{}", self.initial_seed)));
        rows
    }
}
