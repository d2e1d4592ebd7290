use crate::grouping::GroupTotals;
use crate::model::{Direction, TransactionRecord};
use crate::mt940::Mt940Balance;
use crate::references::mt940_reference;
use super::common;

/// Тип операции и референс клиента в :61:
const TRANSACTION_TYPE: &str = "NTRFNONREF";

/// Форматируем одну строку :61: (без тега) из TransactionRecord
pub(crate) fn format_61_line(tx: &TransactionRecord, idx: usize) -> String {
    let value_part = tx.date.to_short();

    // entry_date: MMDD из value_date
    let entry_part = value_part.get(2..6).unwrap_or_default();

    // D / C
    let dc_mark = match tx.direction {
        Direction::Debit => 'D',
        Direction::Credit => 'C',
    };

    // Сумма в формате "1234,56" (с разделителем ',')
    let amount_str = common::format_minor_units(tx.amount, ',');
    let reference = mt940_reference(&tx.date, idx);

    format!("{value_part}{entry_part}{dc_mark}{amount_str}{TRANSACTION_TYPE}//{reference}")
}

/// Формирует строку :86: (без тега):
/// "/CNTP/<счёт>//<имя>///REMI/USTD//<назначение>/"
///
/// Двоеточия в назначении платежа заменяются точками, чтобы их не приняли за тег.
pub(crate) fn format_86_line(tx: &TransactionRecord) -> String {
    let account = tx.counterparty_account.as_deref().unwrap_or("");
    let name = tx.counterparty_name.as_deref().unwrap_or("");

    let mut line = format!("/CNTP/{account}//{name}");

    if !tx.remittance_info.is_empty() {
        let remittance = tx.remittance_info.replace(':', ".");
        line.push_str("///REMI/USTD//");
        line.push_str(&remittance);
    }

    line.push('/');
    line
}

/// "C251208EUR1234,56", отрицательный остаток: "C251208EUR-12,34"
pub(crate) fn format_balance_field(bal: &Mt940Balance) -> String {
    format!(
        "{}{}{}{}",
        bal.dc_mark,
        bal.date,
        bal.currency,
        common::format_balance(bal.amount, ',')
    )
}

/// Итоговая :86:, количество и суммы дебета и кредита за день
pub(crate) fn format_sum_line(totals: &GroupTotals) -> String {
    format!(
        "/SUM/{}/{}/{}/{}/",
        totals.debit_count,
        totals.credit_count,
        common::format_minor_units(totals.debit_sum, '.'),
        common::format_minor_units(totals.credit_sum, '.'),
    )
}
