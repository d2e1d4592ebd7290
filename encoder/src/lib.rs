pub mod error;
pub mod model;
pub mod date;
pub mod bic;
pub mod grouping;
pub mod balance;
pub mod references;
pub mod csv_input;
pub mod camt053;
pub mod mt940;
pub mod serialization;

mod utils;

pub use crate::model::{AccountProfile, Balance, Direction, StatementBatch, TransactionRecord};
pub use crate::date::StatementDate;
pub use crate::csv_input::CsvInput;
pub use crate::error::EncodeError;
pub use crate::references::{Clock, FixedClock, SystemClock};

/// Разбирает сумму из командной строки или конфигурации ("1.234,56", "-10,00") в центы
pub fn parse_balance(raw: &str) -> Result<Balance, EncodeError> {
    utils::parse_signed_balance(raw)
}
