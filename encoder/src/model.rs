use std::fmt;
use crate::balance;
use crate::date::StatementDate;
use crate::grouping::{self, StatementGroup};

/// Тип для хранения баланса счёта в центах, signed
pub type Balance = i128;

/// IBAN счёта, для которого строится выписка, если его не удалось узнать иначе
pub const DEFAULT_ACCOUNT_IBAN: &str = "NL91INGB0004386274";
/// BIC банка, обслуживающего счёт
pub const DEFAULT_SERVICER_BIC: &str = "INGBNL2A";
/// Единственная поддерживаемая валюта
pub const CURRENCY: &str = "EUR";

/// Направление транзакции (Дебет/Кредит)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Дебет, "af" в выгрузке банка
    Debit,
    /// Кредит, "bij" в выгрузке банка
    Credit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Credit => write!(f, "Credit"),
            Direction::Debit  => write!(f, "Debit"),
        }
    }
}

/// Одна операция из выгрузки банка.
///
/// Создаётся при чтении CSV и дальше не меняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// дата проводки
    pub date: StatementDate,
    /// денежная сумма (в центах), всегда неотрицательная
    pub amount: u64,
    /// направление транзакции
    pub direction: Direction,
    /// счёт контрагента
    pub counterparty_account: Option<String>,
    /// имя контрагента
    pub counterparty_name: Option<String>,
    /// назначение платежа
    pub remittance_info: String,
    /// остаток после операции, как его указал банк
    pub balance_after: Balance,
    /// наш счёт ("Rekening"), если он есть в выгрузке
    pub own_account: Option<String>,
}

impl TransactionRecord {
    /// Go to [`TransactionRecord`]
    pub fn new(
        date: StatementDate,
        amount: u64,
        direction: Direction,
        counterparty_account: Option<String>,
        counterparty_name: Option<String>,
        remittance_info: String,
        balance_after: Balance,
    ) -> Self {
        TransactionRecord {
            date,
            amount,
            direction,
            counterparty_account,
            counterparty_name,
            remittance_info,
            balance_after,
            own_account: None,
        }
    }

    /// Сумма со знаком: дебет уменьшает баланс, кредит увеличивает
    pub fn signed_amount(&self) -> Balance {
        match self.direction {
            Direction::Debit => -(self.amount as Balance),
            Direction::Credit => self.amount as Balance,
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<6} {:>15} {} {} {}",
            self.date,
            self.direction,
            self.amount,
            self.counterparty_account.as_deref().unwrap_or(""),
            self.counterparty_name.as_deref().unwrap_or(""),
            self.remittance_info,
        )
    }
}

/// Реквизиты счёта, для которого строится выписка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub iban: String,
    pub currency: String,
    pub servicer_bic: String,
}

impl AccountProfile {
    pub fn new(iban: impl Into<String>) -> Self {
        AccountProfile {
            iban: iban.into(),
            currency: CURRENCY.to_string(),
            servicer_bic: DEFAULT_SERVICER_BIC.to_string(),
        }
    }
}

impl Default for AccountProfile {
    fn default() -> Self {
        AccountProfile::new(DEFAULT_ACCOUNT_IBAN)
    }
}

/// Центральная структура библиотеки: все операции одного счёта за период.
///
/// Операции раскладываются по дням один раз при создании,
/// а уже потом батч сериализуется в нужный формат.
///
/// Пример использования:
/// ```no_run
/// # use encoder::{CsvInput, StatementBatch, AccountProfile};
/// # fn main() -> Result<(), encoder::EncodeError> {
/// let reader = std::io::stdin();
/// let records = CsvInput::parse(reader)?.into_records()?;
/// let batch = StatementBatch::new(AccountProfile::default(), records);
///
/// let stdout = std::io::stdout();
/// batch.write_mt940(stdout.lock(), None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StatementBatch {
    /// наш счёт
    pub account: AccountProfile,
    /// операции в исходном порядке
    pub records: Vec<TransactionRecord>,
    /// операции, разложенные по дням (по возрастанию даты)
    pub groups: Vec<StatementGroup>,
}

impl StatementBatch {
    pub fn new(account: AccountProfile, records: Vec<TransactionRecord>) -> Self {
        let groups = grouping::group_by_day(&records);
        StatementBatch {
            account,
            records,
            groups,
        }
    }

    /// Входящий остаток по умолчанию для всего периода
    pub fn default_opening_balance(&self) -> Balance {
        balance::default_opening_balance(&self.records)
    }

    /// Отсортированный список дат, за которые есть операции
    pub fn dates(&self) -> Vec<&StatementDate> {
        self.groups.iter().map(|g| &g.date).collect()
    }
}
