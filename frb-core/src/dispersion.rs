//! Дисперсионная арифметика для выбора размера окна захвата.

/// Константа дисперсии, МГц²·см³·с/пк.
const DISPERSION_CONST: f64 = 4.1488064239e3;

/// Дисперсионная задержка (с) сигнала на частоте `f` относительно опорной
/// `f0` (обе в МГц) при мере дисперсии `dm` (пк/см³).
///
/// Закрытая форма `4.1488064239e3 * dm * (f⁻² - f0⁻²)`; воспроизводится
/// бит-в-бит для сверки с эталонными выходами.
pub fn dispersive_delay(
    f: f64,
    f0: f64,
    dm: f64,
) -> f64 {
    DISPERSION_CONST * dm * (f.powi(-2) - f0.powi(-2))
}

/// Частотная сетка наблюдения: полоса под верхней границей, разбитая на
/// каналы равной ширины.
#[derive(Debug, Clone, Copy)]
pub struct ChannelGrid {
    /// Верхняя граница полосы (МГц)
    pub f_hi: f64,
    /// Ширина полосы (МГц)
    pub bandwidth: f64,
    /// Количество каналов
    pub nchan: u32,
}

impl ChannelGrid {
    /// Ширина одного канала (МГц).
    pub fn channel_width(&self) -> f64 {
        self.bandwidth / self.nchan as f64
    }

    /// Центр нижнего канала (МГц).
    pub fn f_lo(&self) -> f64 {
        let df = self.channel_width();
        self.f_hi - df * self.nchan as f64 + 0.5 * df
    }

    /// Окно захвата (с): округлённая задержка нижнего канала относительно
    /// верхней границы при мере дисперсии `dm`. Используется только для
    /// выбора t1 системных параметров.
    pub fn capture_window(&self, dm: f64) -> f64 {
        dispersive_delay(self.f_lo(), self.f_hi, dm).round()
    }
}
