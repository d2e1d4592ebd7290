use tracing::info;
use crate::balance::{track_balances, ArithmeticClosing, BalancePair};
use crate::grouping::{GroupTotals, StatementGroup};
use crate::model::{AccountProfile, Balance, StatementBatch};
use crate::serialization::common::format_balance;
use crate::serialization::mt940_helpers::{format_61_line, format_86_line};

/// :20: в банковских выписках всегда одинаковый
pub(crate) const SESSION_REFERENCE: &str = "P251208000000001";
/// :28C:
pub(crate) const STATEMENT_NUMBER: &str = "00000";

/// Баланс в строках :60F: / :62F: / :64: / :65:
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt940Balance {
    /// Всегда 'C': знак остатка пишется в самой сумме
    pub dc_mark: char,
    /// YYMMDD
    pub date: String,
    pub currency: String,
    /// остаток в центах со знаком
    pub amount: Balance,
}

impl Mt940Balance {
    pub fn new(value: Balance, date: String, currency: &str) -> Self {
        Mt940Balance {
            dc_mark: 'C',
            date,
            currency: currency.to_string(),
            amount: value,
        }
    }
}

/// Проводка: строка :61: (с продолжением /TRCD/) и строка :86:
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt940Entry {
    pub movement: String,
    pub narrative: String,
}

/// Одно сообщение MT940: выписка за один день
#[derive(Debug, Clone)]
pub struct Mt940Message {
    /// BIC банка в заголовках {1:} и {2:}
    pub servicer_bic: String,

    /// :20: Transaction Reference Number
    pub transaction_reference: String,

    /// :25: Account Identification (IBAN + валюта)
    pub account_id: String,

    /// :28C: Statement Number/Sequence
    pub statement_number: String,

    /// :60F: Opening Balance
    pub opening_balance: Mt940Balance,

    /// :61: + :86: по каждой операции дня
    pub entries: Vec<Mt940Entry>,

    /// :62F: Closing Balance
    pub closing_balance: Mt940Balance,

    /// :64: Closing Available Balance
    pub closing_available_balance: Mt940Balance,

    /// :65: Forward Available Balance, дважды
    pub forward_available_balances: Vec<Mt940Balance>,

    /// итоговая :86:/SUM/
    pub totals: GroupTotals,
}

impl Mt940Message {
    pub(crate) fn from_group(
        account: &AccountProfile,
        group: &StatementGroup,
        pair: BalancePair,
    ) -> Self {
        let day = group.date.to_short();
        let ccy = account.currency.as_str();
        let closing = Mt940Balance::new(pair.closing, day.clone(), ccy);

        let entries = group
            .records
            .iter()
            .enumerate()
            .map(|(idx, tx)| Mt940Entry {
                movement: format_61_line(tx, idx),
                narrative: format_86_line(tx),
            })
            .collect();

        Mt940Message {
            servicer_bic: account.servicer_bic.clone(),
            transaction_reference: SESSION_REFERENCE.to_string(),
            account_id: format!("{}{}", account.iban, ccy),
            statement_number: STATEMENT_NUMBER.to_string(),
            opening_balance: Mt940Balance::new(pair.opening, day.clone(), ccy),
            entries,
            closing_available_balance: closing.clone(),
            forward_available_balances: vec![closing.clone(), closing.clone()],
            closing_balance: closing,
            totals: group.totals(),
        }
    }

    /// Сообщения по всем дням батча.
    ///
    /// Остатки считаются по правилу [`ArithmeticClosing`]; входящий остаток
    /// первого дня: `opening_override`, если задан, иначе остаток по умолчанию.
    pub fn from_batch(batch: &StatementBatch, opening_override: Option<Balance>) -> Vec<Self> {
        let default_opening = batch.default_opening_balance();
        info!("mt940 default opening balance: {}", format_balance(default_opening, '.'));

        let opening = opening_override.unwrap_or(default_opening);
        if opening_override.is_some() {
            info!("mt940 opening balance overridden: {}", format_balance(opening, '.'));
        }

        let pairs = track_balances(&ArithmeticClosing, opening, &batch.groups);

        batch
            .groups
            .iter()
            .zip(pairs)
            .map(|(group, pair)| Mt940Message::from_group(&batch.account, group, pair))
            .collect()
    }
}
