use crate::model::Balance;

/// Форматирует целочисленное значение (центы) в человекочитаемый формат, без знака
pub(crate) fn format_minor_units<T>(value: T, decimal_separator: char) -> String
where
    T: Into<i128>,
{
    let v: i128 = value.into();
    let v = v.unsigned_abs();
    let units = v / 100;
    let frac = v % 100;

    format!("{units}{decimal_separator}{frac:02}")
}

/// То же, что [`format_minor_units`], но с минусом для отрицательных значений
pub(crate) fn format_balance(value: Balance, decimal_separator: char) -> String {
    let abs = format_minor_units(value, decimal_separator);
    if value < 0 {
        format!("-{abs}")
    } else {
        abs
    }
}

/// Обрезает текст до `max` символов (не байт)
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
