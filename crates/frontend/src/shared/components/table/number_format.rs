//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Число для ячейки таблицы
///
/// Без явного количества знаков: целые без дробной части, остальные - 2 знака.
pub fn format_number(value: f64, decimals: Option<u8>) -> String {
    let decimals = decimals.unwrap_or(if value.fract() == 0.0 { 0 } else { 2 });
    format_number_with_decimals(value, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 4), "1 234.5670");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1 234.56");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.0, None), "1 234 567");
        assert_eq!(format_number(0.5, None), "0.50");
        assert_eq!(format_number(30.0, Some(1)), "30.0");
    }
}
