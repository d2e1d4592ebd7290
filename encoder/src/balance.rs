use tracing::info;
use crate::grouping::StatementGroup;
use crate::model::{Balance, Direction, TransactionRecord};
use crate::serialization::common::format_balance;

/// Входящий и исходящий остаток за один день
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePair {
    pub opening: Balance,
    pub closing: Balance,
}

/// Правило вычисления исходящего остатка дня.
///
/// CAMT.053 и MT940 исторически считают остатки по-разному,
/// поэтому правил два и они между собой не согласованы.
pub trait ClosingRule {
    fn closing(&self, opening: Balance, group: &StatementGroup) -> Balance;
}

/// CAMT.053: исходящий остаток дня равен "Saldo na mutatie" *первой* операции дня
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEntryClosing;

impl ClosingRule for FirstEntryClosing {
    fn closing(&self, opening: Balance, group: &StatementGroup) -> Balance {
        group
            .records
            .first()
            .map(|tx| tx.balance_after)
            .unwrap_or(opening)
    }
}

/// MT940: входящий остаток минус дебет плюс кредит за день
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticClosing;

impl ClosingRule for ArithmeticClosing {
    fn closing(&self, opening: Balance, group: &StatementGroup) -> Balance {
        let totals = group.totals();
        opening - totals.debit_sum + totals.credit_sum
    }
}

/// Входящий остаток по умолчанию.
///
/// Восстанавливается по *последней* операции всей выгрузки:
/// остаток до неё = остаток после неё с отменённой суммой.
/// Для пустой выгрузки: 0.
pub fn default_opening_balance(records: &[TransactionRecord]) -> Balance {
    let Some(last) = records.last() else {
        return 0;
    };

    match last.direction {
        Direction::Debit => last.balance_after + last.amount as Balance,
        Direction::Credit => last.balance_after - last.amount as Balance,
    }
}

/// Протягивает остатки по дням: исходящий остаток дня становится входящим следующего
pub fn track_balances<R: ClosingRule>(
    rule: &R,
    opening: Balance,
    groups: &[StatementGroup],
) -> Vec<BalancePair> {
    groups
        .iter()
        .scan(opening, |previous, group| {
            let pair = BalancePair {
                opening: *previous,
                closing: rule.closing(*previous, group),
            };
            info!(
                "closing balance for {}: {}",
                group.date,
                format_balance(pair.closing, '.')
            );
            *previous = pair.closing;
            Some(pair)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::StatementDate;
    use crate::grouping::group_by_day;

    fn tx(date: &str, amount: u64, direction: Direction, balance_after: Balance) -> TransactionRecord {
        TransactionRecord::new(
            StatementDate::parse(date),
            amount,
            direction,
            None,
            None,
            String::new(),
            balance_after,
        )
    }

    fn two_days() -> Vec<TransactionRecord> {
        vec![
            tx("20250101", 10_000, Direction::Credit, 10_000),
            tx("20250102", 4_000, Direction::Debit, 6_000),
        ]
    }

    #[test]
    fn default_opening_of_empty_input_is_zero() {
        assert_eq!(default_opening_balance(&[]), 0);
    }

    #[test]
    fn default_opening_is_reconstructed_from_last_transaction() {
        assert_eq!(default_opening_balance(&two_days()), 10_000);

        let credit_last = vec![tx("20250101", 2_500, Direction::Credit, 7_500)];
        assert_eq!(default_opening_balance(&credit_last), 5_000);
    }

    #[test]
    fn first_entry_rule_takes_balance_of_first_transaction() {
        let records = vec![
            tx("20250101", 100, Direction::Credit, 1_100),
            tx("20250101", 300, Direction::Credit, 1_400),
            tx("20250102", 50, Direction::Debit, 1_350),
        ];
        let groups = group_by_day(&records);

        let pairs = track_balances(&FirstEntryClosing, 1_000, &groups);
        assert_eq!(pairs[0], BalancePair { opening: 1_000, closing: 1_100 });
        assert_eq!(pairs[1], BalancePair { opening: 1_100, closing: 1_350 });
    }

    #[test]
    fn arithmetic_rule_applies_day_turnover() {
        let records = vec![
            tx("20250101", 100, Direction::Credit, 0),
            tx("20250101", 300, Direction::Debit, 0),
            tx("20250102", 50, Direction::Credit, 0),
        ];
        let groups = group_by_day(&records);

        let pairs = track_balances(&ArithmeticClosing, 1_000, &groups);
        assert_eq!(pairs[0], BalancePair { opening: 1_000, closing: 800 });
        assert_eq!(pairs[1], BalancePair { opening: 800, closing: 850 });
    }

    #[test]
    fn closing_carries_into_next_opening() {
        let records = vec![
            tx("20250101", 100, Direction::Credit, 5),
            tx("20250103", 300, Direction::Debit, 7),
            tx("20250104", 50, Direction::Credit, 9),
        ];
        let groups = group_by_day(&records);

        for pairs in [
            track_balances(&FirstEntryClosing, 42, &groups),
            track_balances(&ArithmeticClosing, 42, &groups),
        ] {
            assert_eq!(pairs[0].opening, 42);
            for w in pairs.windows(2) {
                assert_eq!(w[0].closing, w[1].opening);
            }
        }
    }

    #[test]
    fn the_two_rules_diverge_on_the_two_day_example() {
        let records = two_days();
        let groups = group_by_day(&records);
        let opening = default_opening_balance(&records);

        let camt = track_balances(&FirstEntryClosing, opening, &groups);
        let mt940 = track_balances(&ArithmeticClosing, opening, &groups);

        assert_eq!(camt[0].closing, 10_000);
        assert_eq!(mt940[0].closing, 20_000);
        assert_ne!(camt[0].closing, mt940[0].closing);
        assert_eq!(mt940[1].closing, 16_000);
        assert_eq!(camt[1].closing, 6_000);
    }
}
