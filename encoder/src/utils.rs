use crate::model::{Balance, Direction};
use crate::error::EncodeError;

/// Приводит сумму к виду "1234.56".
///
/// Банк пишет суммы с запятой ("1.234,56"), точки в таком случае считаются
/// разделителями тысяч.
fn normalize_number(raw: &str) -> String {
    let cleaned: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    }
}

/// Парсит неотрицательную сумму в центы
pub(crate) fn parse_amount(raw: &str) -> Result<u64, EncodeError> {
    let cleaned = normalize_number(raw);

    if cleaned.is_empty() {
        return Err(EncodeError::InvalidAmount("empty amount".into()));
    }
    if cleaned.starts_with('-') {
        return Err(EncodeError::InvalidAmount(format!("negative amount: {cleaned}")));
    }
    let cleaned = cleaned.trim_start_matches('+');

    let mut split = cleaned.split('.');
    let int_part = split.next().unwrap_or("");
    let dec_part = split.next().unwrap_or("");
    if split.next().is_some() {
        // больше одной точки: странный формат
        return Err(EncodeError::InvalidAmount(format!("too many dots in amount: {cleaned}")));
    }

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !all_digits(dec_part) {
        return Err(EncodeError::InvalidAmount(format!("not a number: {raw}")));
    }

    let int_part: u64 = int_part.parse()?;

    let dec_part: u64 = match dec_part.len() {
        0 => 0,
        1 => dec_part.parse::<u64>()? * 10,
        2 => dec_part.parse()?,
        _ => {
            return Err(EncodeError::InvalidAmount(format!("too many fractional digits in amount: {cleaned}")));
        }
    };

    int_part
        .checked_mul(100)
        .and_then(|v| v.checked_add(dec_part))
        .ok_or_else(|| EncodeError::InvalidAmount(format!("amount too large: {cleaned}")))
}

/// Парсит баланс со знаком ("-12,34" / "+5,00" / "100,00") в центы
pub(crate) fn parse_signed_balance(raw: &str) -> Result<Balance, EncodeError> {
    let s = raw.trim();
    match s.strip_prefix('-') {
        Some(rest) => Ok(-(parse_amount(rest)? as Balance)),
        None => Ok(parse_amount(s)? as Balance),
    }
}

/// "af" -> дебет, "bij" -> кредит
pub(crate) fn parse_direction(raw: &str) -> Result<Direction, EncodeError> {
    match raw.trim().to_lowercase().as_str() {
        "af" => Ok(Direction::Debit),
        "bij" => Ok(Direction::Credit),
        other => Err(EncodeError::InvalidDirection(other.to_string())),
    }
}
