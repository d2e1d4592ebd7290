use std::io::Error as IoError;
use quick_xml::se::SeError;
use thiserror::Error;

/// Ошибки при чтении выписки и кодировании её в CAMT.053 / MT940
#[derive(Debug, Error)]
pub enum EncodeError {
    // обёртки

    /// обёртка csv::Error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// обёртка quick_xml::se::SeError
    #[error("Xml serialization error: {0}")]
    XmlSe(#[from] SeError),
    /// обёртка std::num::ParseIntError
    #[error("number parse error: {0}")]
    Int(#[from] std::num::ParseIntError),
    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),

    // логические ошибки

    /// ошибка при парсинге денежной суммы или баланса
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// ошибка при парсинге направления транзакции (af/bij)
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
    /// ошибка отсутствия обязательного поля
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// очень общая ошибка плохих входных данных
    #[error("bad input: {0}")]
    BadInput(String),
}
