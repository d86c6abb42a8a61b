/// Плотная матрица время×частота: nt строк на nf столбцов, row-major, f32.
///
/// Инвариант: `data.len() == nt * nf`. Конструируется только кодом
/// извлечения, существует транзиентно между разбором и разрежением.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    nt: usize,
    nf: usize,
    data: Vec<f32>,
}

/// Разреженное COO-представление ненулевых элементов плотной матрицы.
///
/// Три параллельных последовательности одинаковой длины nnz; одна и та же
/// перестановка применяется ко всем трём.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseMatrix {
    /// Индексы строк (0-based)
    pub rows: Vec<i64>,
    /// Индексы столбцов (0-based)
    pub cols: Vec<i64>,
    /// Ненулевые значения
    pub values: Vec<f64>,
}

impl DenseMatrix {
    /// Собирает матрицу из готового row-major буфера.
    pub fn new(
        nt: usize,
        nf: usize,
        data: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(data.len(), nt * nf);
        DenseMatrix { nt, nf, data }
    }

    /// Количество строк (временных отсчётов).
    pub fn nt(&self) -> usize {
        self.nt
    }

    /// Количество столбцов (частотных каналов).
    pub fn nf(&self) -> usize {
        self.nf
    }

    /// Элемент в строке `row`, столбце `col`.
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> f32 {
        self.data[row * self.nf + col]
    }

    /// Срез одной строки.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.nf..(row + 1) * self.nf]
    }

    /// Весь буфер в row-major порядке.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl SparseMatrix {
    /// Количество ненулевых элементов.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Проверка инварианта: все три последовательности одной длины.
    pub fn is_consistent(&self) -> bool {
        self.rows.len() == self.values.len() && self.cols.len() == self.values.len()
    }
}
