/// Заголовок plot-файла (raw-выгрузка симулятора для отрисовки).
///
/// Все поля безусловные, раскладка фиксированная; вариантов формата нет.
/// Поля хранятся как на диске, без нормализации — plot-путь читается
/// только для инспекции.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotHeader {
    /// Имя источника (128-байтовое текстовое поле)
    pub name: String,
    /// Время начала окна (с)
    pub t0: f32,
    /// Время конца окна (с); используется как "end"
    pub t1: f32,
    /// Интервал дискретизации (с)
    pub tsamp: f32,
    /// Нижняя частота (МГц)
    pub f1: f32,
    /// Верхняя частота (МГц)
    pub f2: f32,
    /// Количество частотных каналов
    pub nchan: i32,
    /// Дискриминант позиции (1 — углы; информационно)
    pub postype: i32,
    /// Прямое восхождение (радианы)
    pub raj_rad: f32,
    /// Склонение (радианы)
    pub dec_rad: f32,
    /// Позиция задана углом (сырое значение с диска)
    pub useangle: i32,
    /// Начальное зерно генератора симулятора
    pub initialseed: i64,
    /// Флаг расширения labels (сырое значение с диска)
    pub writelabels: i32,
}

impl PlotHeader {
    /// Упорядоченный набор пар ключ-значение для табличного вывода.
    /// Порядок повторяет раскладку полей на диске.
    pub fn metadata(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("t0 (s)", format!("{}", self.t0)),
            ("t1 (s)", format!("{}", self.t1)),
            ("tsamp (s)", format!("{}", self.tsamp)),
            ("f1 (MHz)", format!("{}", self.f1)),
            ("f2 (MHz)", format!("{}", self.f2)),
            ("nchan", format!("{}", self.nchan)),
            ("postype", format!("{}", self.postype)),
            ("raj (rad)", format!("{}", self.raj_rad)),
            ("dec (rad)", format!("{}", self.dec_rad)),
            ("useangle", format!("{}", self.useangle != 0)),
            ("initial seed", format!("{}", self.initialseed)),
            ("writelabels", format!("{}", self.writelabels != 0)),
        ]
    }
}
