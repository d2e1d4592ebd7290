use std::cmp::Ordering;
use std::fmt;
use chrono::{Days, NaiveDate};
use tracing::warn;

/// Дата операции из выписки.
///
/// Банк отдаёт даты как `YYYYMMDD` (иногда `YYYY-MM-DD`).
/// Если дату распознать не удалось, она не отбрасывается: исходная строка
/// сохраняется в [`StatementDate::Raw`] и дальше подставляется в вывод как есть.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatementDate {
    /// Распознанная дата
    Normalized(NaiveDate),
    /// Нераспознанная строка (без кавычек и пробелов по краям)
    Raw(String),
}

impl StatementDate {
    /// Разбирает `YYYYMMDD` или `YYYY-MM-DD`, никогда не падает
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim().trim_matches('"').trim();

        let fmt = if s.contains('-') { "%Y-%m-%d" } else { "%Y%m%d" };
        match NaiveDate::parse_from_str(s, fmt) {
            Ok(d) => StatementDate::Normalized(d),
            Err(_) => {
                warn!("unrecognized date '{s}', passing it through unchanged");
                StatementDate::Raw(s.to_string())
            }
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, StatementDate::Normalized(_))
    }

    pub fn naive(&self) -> Option<NaiveDate> {
        match self {
            StatementDate::Normalized(d) => Some(*d),
            StatementDate::Raw(_) => None,
        }
    }

    /// `YYYY-MM-DD` для CAMT.053
    pub fn to_iso(&self) -> String {
        match self {
            StatementDate::Normalized(d) => d.format("%Y-%m-%d").to_string(),
            StatementDate::Raw(s) => s.clone(),
        }
    }

    /// `YYMMDD` для MT940 и для референсов.
    ///
    /// Важно: для нераспознанной даты возвращается исходная строка,
    /// так что ширина поля в выводе может поплыть.
    pub fn to_short(&self) -> String {
        match self {
            StatementDate::Normalized(d) => d.format("%y%m%d").to_string(),
            StatementDate::Raw(s) => s.clone(),
        }
    }

    /// Предыдущий календарный день в формате `YYYY-MM-DD`
    pub fn previous_day_iso(&self) -> String {
        match self {
            StatementDate::Normalized(d) => d
                .checked_sub_days(Days::new(1))
                .unwrap_or(*d)
                .format("%Y-%m-%d")
                .to_string(),
            StatementDate::Raw(s) => s.clone(),
        }
    }
}

impl Ord for StatementDate {
    fn cmp(&self, other: &Self) -> Ordering {
        use StatementDate::*;
        match (self, other) {
            (Normalized(a), Normalized(b)) => a.cmp(b),
            (Normalized(_), Raw(_)) => Ordering::Less,
            (Raw(_), Normalized(_)) => Ordering::Greater,
            (Raw(a), Raw(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for StatementDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

/// `YYYYMMDD` / `YYYY-MM-DD` -> `YYYY-MM-DD`, при ошибке строка возвращается без изменений
pub fn to_iso_date(raw: &str) -> String {
    StatementDate::parse(raw).to_iso()
}

/// `YYYYMMDD` -> `YYMMDD`, при ошибке строка возвращается без изменений
pub fn to_short_date(raw: &str) -> String {
    StatementDate::parse(raw).to_short()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_compact_and_dashed_forms() {
        assert_eq!(StatementDate::parse("20250131"), StatementDate::Normalized(d(2025, 1, 31)));
        assert_eq!(StatementDate::parse("2025-01-31"), StatementDate::Normalized(d(2025, 1, 31)));
        assert_eq!(StatementDate::parse(" \"20250131\" "), StatementDate::Normalized(d(2025, 1, 31)));
    }

    #[test]
    fn malformed_date_is_kept_raw() {
        let date = StatementDate::parse("31.01.2025");
        assert!(!date.is_normalized());
        assert_eq!(date, StatementDate::Raw("31.01.2025".to_string()));
        assert_eq!(date.naive(), None);
    }

    #[test]
    fn iso_and_short_conversions() {
        assert_eq!(to_iso_date("20251208"), "2025-12-08");
        assert_eq!(to_iso_date("2025-12-08"), "2025-12-08");
        assert_eq!(to_short_date("20251208"), "251208");
        assert_eq!(to_short_date("2000-01-01"), "000101");
    }

    #[test]
    fn conversions_pass_malformed_input_through() {
        assert_eq!(to_iso_date("garbage"), "garbage");
        assert_eq!(to_short_date("2025AB01"), "2025AB01");
        assert_eq!(to_short_date("20251332"), "20251332");
    }

    #[test]
    fn previous_day_crosses_month_and_year() {
        assert_eq!(StatementDate::parse("20250301").previous_day_iso(), "2025-02-28");
        assert_eq!(StatementDate::parse("20250101").previous_day_iso(), "2024-12-31");
        assert_eq!(StatementDate::parse("bad").previous_day_iso(), "bad");
    }

    #[test]
    fn normalized_dates_sort_before_raw_ones() {
        let mut dates = vec![
            StatementDate::parse("zzz"),
            StatementDate::parse("20250102"),
            StatementDate::parse("2025-01-01"),
            StatementDate::parse("aaa"),
        ];
        dates.sort();
        let iso: Vec<String> = dates.iter().map(|d| d.to_iso()).collect();
        assert_eq!(iso, vec!["2025-01-01", "2025-01-02", "aaa", "zzz"]);
    }
}
