use std::collections::BTreeMap;
use tracing::debug;
use crate::date::StatementDate;
use crate::model::{Balance, Direction, TransactionRecord};

/// Все операции за один день в исходном порядке
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGroup {
    pub date: StatementDate,
    pub records: Vec<TransactionRecord>,
}

impl StatementGroup {
    /// Количество и обороты по направлениям
    pub fn totals(&self) -> GroupTotals {
        GroupTotals::from_records(&self.records)
    }
}

/// Обороты за день (суммы по модулю, в центах)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupTotals {
    pub debit_count: usize,
    pub debit_sum: Balance,
    pub credit_count: usize,
    pub credit_sum: Balance,
}

impl GroupTotals {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        records.iter().fold(GroupTotals::default(), |mut acc, tx| {
            match tx.direction {
                Direction::Debit => {
                    acc.debit_count += 1;
                    acc.debit_sum += tx.amount as Balance;
                }
                Direction::Credit => {
                    acc.credit_count += 1;
                    acc.credit_sum += tx.amount as Balance;
                }
            }
            acc
        })
    }

    pub fn total_count(&self) -> usize {
        self.debit_count + self.credit_count
    }

    pub fn total_sum(&self) -> Balance {
        self.debit_sum + self.credit_sum
    }
}

/// Раскладывает операции по дням.
///
/// Дни идут по возрастанию даты, внутри дня порядок операций сохраняется.
pub fn group_by_day(records: &[TransactionRecord]) -> Vec<StatementGroup> {
    let mut blocks: BTreeMap<StatementDate, Vec<TransactionRecord>> = BTreeMap::new();

    for tx in records {
        blocks.entry(tx.date.clone()).or_default().push(tx.clone());
    }

    let groups: Vec<StatementGroup> = blocks
        .into_iter()
        .map(|(date, records)| StatementGroup { date, records })
        .collect();

    debug!("grouped {} transactions into {} days", records.len(), groups.len());
    groups
}
