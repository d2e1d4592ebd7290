pub mod serde_models;

use tracing::info;
use crate::balance::{track_balances, FirstEntryClosing};
use crate::model::StatementBatch;
use crate::references::{creation_timestamp, message_id, Clock, StatementIdSequence};
use crate::serialization::camt053_helpers::*;
use crate::serialization::common::format_balance;
use serde_models::*;

pub use serde_models::Camt053Document;

impl Camt053Document {
    /// Собирает документ CAMT.053: одна <Stmt> на каждый день батча.
    ///
    /// Остатки считаются по правилу [`FirstEntryClosing`],
    /// входящий остаток первого дня: остаток по умолчанию для всего периода.
    pub fn from_batch<C: Clock>(batch: &StatementBatch, clock: &C) -> Self {
        let ccy_code = batch.account.currency.as_str();
        let opening = batch.default_opening_balance();
        let pairs = track_balances(&FirstEntryClosing, opening, &batch.groups);

        info!("camt053 opening balance: {}", format_balance(opening, '.'));
        if let Some(last) = pairs.last() {
            info!("camt053 closing balance: {}", format_balance(last.closing, '.'));
        }

        let header_time = clock.now();
        let mut ids = StatementIdSequence::new();

        let statements = batch
            .groups
            .iter()
            .zip(pairs)
            .map(|(group, pair)| {
                let now = clock.now();
                Camt053Statement {
                    id: ids.next_id(&now),
                    created_at: creation_timestamp(&now),
                    period: period_for(&group.date),
                    account: account_for(&batch.account),
                    balances: balances_for_group(&group.date, pair, ccy_code),
                    summary: summary_from_totals(&group.totals()),
                    entries: entries_from_group(group, ccy_code),
                }
            })
            .collect();

        Camt053Document {
            xmlns_xsi: XSI_NAMESPACE,
            xmlns_xsd: XSD_NAMESPACE,
            xmlns: CAMT_NAMESPACE,
            schema_location: SCHEMA_LOCATION,
            bank_to_customer: Camt053BankToCustomer {
                group_header: Camt053GroupHeader {
                    message_id: message_id(&header_time),
                    created_at: creation_timestamp(&header_time),
                },
                statements,
            },
        }
    }
}
