//! Табличный вывод метаданных.
//!
//! Чистая функция от упорядоченной последовательности пар ключ-значение к
//! строке; никакого глобального состояния консоли.

/// Форматирует пары ключ-значение в таблицу с верхней и нижней линейками.
///
/// Ширина колонки ключей подстраивается под самый длинный ключ; порядок
/// строк сохраняется как передан.
pub fn render_table(rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let rule = "━".repeat(key_width + 24);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for (key, value) in rows {
        out.push_str(&format!("  {key:<key_width$} : {value}\n"));
    }
    out.push_str(&rule);
    out
}
