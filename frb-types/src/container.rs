use crate::SparseMatrix;

/// Контейнер результата симуляции: скалярные метаданные + разреженная
/// матрица burst-а.
///
/// Создаётся один раз на прогон, после записи неизменяем. nnz в заголовке
/// контейнера выводится из `sparse` и отдельно не хранится.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstContainer {
    /// Количество частотных каналов
    pub nf: i64,
    /// Количество временных отсчётов
    pub nt: i64,
    /// Мера дисперсии (пк/см³)
    pub dm: f64,
    /// Поток burst-а (Ян)
    pub flux: f64,
    /// Ширина burst-а (с)
    pub width: f64,
    /// Время прихода burst-а (с)
    pub tburst: f64,
    /// Ненулевые элементы матрицы
    pub sparse: SparseMatrix,
}

impl BurstContainer {
    /// Количество ненулевых элементов.
    pub fn nnz(&self) -> usize {
        self.sparse.nnz()
    }
}
