use std::io::Read;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;
use crate::date::StatementDate;
use crate::error::EncodeError;
use crate::model::TransactionRecord;
use crate::utils::{parse_amount, parse_direction, parse_signed_balance};

/// Операция из CSV-выгрузки банка в сыром виде.
///
/// Колонки ищутся по заголовку, порядок не важен.
#[derive(Debug, Default, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Datum", default)]
    date: Option<String>,
    #[serde(rename = "Naam / Omschrijving", default)]
    name: Option<String>,
    #[serde(rename = "Rekening", default)]
    account: Option<String>,
    #[serde(rename = "Tegenrekening", default)]
    counterparty_account: Option<String>,
    #[serde(rename = "Af Bij", default)]
    direction: Option<String>,
    #[serde(rename = "Bedrag (EUR)", default)]
    amount: Option<String>,
    #[serde(rename = "Mededelingen", default)]
    remittance: Option<String>,
    #[serde(rename = "Saldo na mutatie", default)]
    balance_after: Option<String>,
}

/// Пустая строка и отсутствующая колонка: одно и то же
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String, EncodeError> {
    non_empty(value).ok_or(EncodeError::MissingField(name))
}

impl CsvRecord {
    fn is_blank(&self) -> bool {
        [
            &self.date,
            &self.name,
            &self.account,
            &self.counterparty_account,
            &self.direction,
            &self.amount,
            &self.remittance,
            &self.balance_after,
        ]
        .iter()
        .all(|f| f.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    fn into_record(self) -> Result<TransactionRecord, EncodeError> {
        let date = StatementDate::parse(&required(self.date, "Datum")?);
        let direction = parse_direction(&required(self.direction, "Af Bij")?)?;
        let amount = parse_amount(&required(self.amount, "Bedrag (EUR)")?)?;
        let balance_after = parse_signed_balance(&required(self.balance_after, "Saldo na mutatie")?)?;

        let mut record = TransactionRecord::new(
            date,
            amount,
            direction,
            non_empty(self.counterparty_account),
            non_empty(self.name),
            self.remittance.unwrap_or_default().trim().to_string(),
            balance_after,
        );
        record.own_account = non_empty(self.account);
        Ok(record)
    }
}

/// Данные CSV-выгрузки банка
#[derive(Debug)]
pub struct CsvInput {
    records: Vec<CsvRecord>,
}

impl CsvInput {
    /// Читает выгрузку с разделителем `;`
    pub fn parse<R: Read>(reader: R) -> Result<Self, EncodeError> {
        Self::parse_with_delimiter(reader, b';')
    }

    pub fn parse_with_delimiter<R: Read>(reader: R, delimiter: u8) -> Result<Self, EncodeError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for name in ["Datum", "Af Bij", "Bedrag (EUR)", "Saldo na mutatie"] {
            if !headers.iter().any(|h| h.trim_start_matches('\u{feff}') == name) {
                return Err(EncodeError::MissingField(name));
            }
        }

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let rec: CsvRecord = result?;
            if rec.is_blank() {
                continue;
            }
            records.push(rec);
        }

        debug!("read {} csv rows", records.len());
        Ok(CsvInput { records })
    }

    /// Превращает сырые строки в операции; первая же ошибка прерывает разбор
    pub fn into_records(self) -> Result<Vec<TransactionRecord>, EncodeError> {
        self.records
            .into_iter()
            .map(CsvRecord::into_record)
            .collect()
    }
}
