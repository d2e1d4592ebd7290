use crate::balance::BalancePair;
use crate::bic::resolve_bic;
use crate::camt053::serde_models::*;
use crate::date::StatementDate;
use crate::grouping::{GroupTotals, StatementGroup};
use crate::model::{AccountProfile, Balance, Direction, TransactionRecord};
use crate::references::{account_servicer_reference, entry_reference};
use super::common;

/// Максимальная длина <Ustrd>
const USTRD_MAX_CHARS: usize = 140;

/// CAMT-формат суммы: "1234.56"
pub(crate) fn format_camt_amount_minor(v: Balance) -> String {
    common::format_minor_units(v, '.')
}

fn amount_xml(value: Balance, ccy_code: &str) -> CamtAmtXml {
    CamtAmtXml {
        currency: ccy_code.to_string(),
        value: format_camt_amount_minor(value),
    }
}

pub(crate) fn period_for(date: &StatementDate) -> Camt053Period {
    let iso = date.to_iso();
    Camt053Period {
        from: format!("{iso}T00:00:00"),
        to: format!("{iso}T23:59:59"),
    }
}

pub(crate) fn account_for(profile: &AccountProfile) -> Camt053Account {
    Camt053Account {
        id: CamtAccountId {
            iban: profile.iban.clone(),
        },
        account_type: CamtCode {
            code: "CACC".to_string(),
        },
        currency: profile.currency.clone(),
        servicer: agent(&profile.servicer_bic),
    }
}

fn agent(bic: &str) -> CamtAgent {
    CamtAgent {
        institution: CamtFinancialInstitution {
            bic: bic.to_string(),
        },
    }
}

/// Балансы дня: PRCD / OPBD на предыдущий день, CLBD / CLAV / FWAV / FWAV на сам день.
///
/// FWAV дублируется так же, как в выписках банка.
pub(crate) fn balances_for_group(
    date: &StatementDate,
    pair: BalancePair,
    ccy_code: &str,
) -> Vec<Camt053Balance> {
    let prev_day = date.previous_day_iso();
    let day = date.to_iso();

    [
        ("PRCD", pair.opening, &prev_day),
        ("OPBD", pair.opening, &prev_day),
        ("CLBD", pair.closing, &day),
        ("CLAV", pair.closing, &day),
        ("FWAV", pair.closing, &day),
        ("FWAV", pair.closing, &day),
    ]
    .into_iter()
    .map(|(code, value, bal_date)| make_balance(code, value, bal_date, ccy_code))
    .collect()
}

/// Остаток всегда помечен CRDT, отрицательное значение пишется с минусом
fn make_balance(code: &str, value: Balance, bal_date: &str, ccy_code: &str) -> Camt053Balance {

    Camt053Balance {
        balance_type: Camt053BalanceType {
            code_or_proprietary: CamtCode {
                code: code.to_string(),
            },
        },
        amount: CamtAmtXml {
            currency: ccy_code.to_string(),
            value: common::format_balance(value, '.'),
        },
        cdt_dbt_ind: "CRDT".to_string(),
        date: CamtDateXml {
            date: bal_date.to_string(),
        },
    }
}

/// <TxsSummry>.
///
/// Как и у банка, "af" (дебет) попадает в TtlCdtNtries, а "bij" (кредит): в TtlDbtNtries.
pub(crate) fn summary_from_totals(totals: &GroupTotals) -> Camt053Summary {
    let count = |count: usize, sum: Balance| CamtEntryCount {
        count,
        sum: format_camt_amount_minor(sum),
    };

    Camt053Summary {
        total: count(totals.total_count(), totals.total_sum()),
        total_credit: count(totals.debit_count, totals.debit_sum),
        total_debit: count(totals.credit_count, totals.credit_sum),
    }
}

// ---------- Операции -> Ntry ----------

pub(crate) fn entries_from_group(group: &StatementGroup, ccy_code: &str) -> Vec<Camt053Entry> {
    group
        .records
        .iter()
        .enumerate()
        .map(|(idx, tx)| entry_from_record(&group.date, idx, tx, ccy_code))
        .collect()
}

pub(crate) fn entry_from_record(
    group_date: &StatementDate,
    idx: usize,
    tx: &TransactionRecord,
    ccy_code: &str,
) -> Camt053Entry {
    let (cdt_dbt_ind, family) = match tx.direction {
        Direction::Credit => ("CRDT", "RCDT"),
        Direction::Debit => ("DBIT", "ICDT"),
    };

    let tx_date = CamtDateXml {
        date: tx.date.to_iso(),
    };

    Camt053Entry {
        reference: entry_reference(group_date, idx),
        amount: amount_xml(tx.amount as Balance, ccy_code),
        cdt_dbt_ind: cdt_dbt_ind.to_string(),
        status: "BOOK".to_string(),
        booking_date: CamtDateXml {
            date: tx_date.date.clone(),
        },
        value_date: tx_date,
        account_servicer_reference: account_servicer_reference(group_date, idx),
        bank_tx_code: CamtBankTxCode {
            domain: CamtTxDomain {
                code: "PMNT".to_string(),
                family: CamtTxFamily {
                    code: family.to_string(),
                    sub_family_code: "ESCT".to_string(),
                },
            },
            proprietary: CamtProprietaryCode {
                code: "00100".to_string(),
                issuer: "ING Group".to_string(),
            },
        },
        details: CamtEntryDetails {
            tx_details: tx_details_from_record(tx, ccy_code),
        },
        additional_info: tx.remittance_info.clone(),
    }
}

/// Контрагент: для кредита он плательщик (Dbtr), для дебета: получатель (Cdtr)
fn tx_details_from_record(tx: &TransactionRecord, ccy_code: &str) -> CamtTxDtls {
    let party = CamtParty {
        name: tx.counterparty_name.clone().unwrap_or_default(),
    };

    let account = tx.counterparty_account.as_ref().map(|iban| CamtAccount {
        id: CamtAccountId { iban: iban.clone() },
        account_type: CamtProprietaryType {
            proprietary: "General".to_string(),
        },
        currency: ccy_code.to_string(),
    });

    let counterparty_agent = tx
        .counterparty_account
        .as_deref()
        .and_then(resolve_bic)
        .map(agent);

    let (related_parties, related_agents) = match tx.direction {
        Direction::Credit => (
            CamtRelatedParties {
                debtor: Some(party),
                debtor_account: account,
                ..Default::default()
            },
            counterparty_agent.map(|a| CamtRelatedAgents {
                debtor_agent: Some(a),
                creditor_agent: None,
            }),
        ),
        Direction::Debit => (
            CamtRelatedParties {
                creditor: Some(party),
                creditor_account: account,
                ..Default::default()
            },
            counterparty_agent.map(|a| CamtRelatedAgents {
                debtor_agent: None,
                creditor_agent: Some(a),
            }),
        ),
    };

    CamtTxDtls {
        related_parties,
        related_agents,
        rmt_inf: CamtRemittanceInfo {
            unstructured: common::truncate_chars(&tx.remittance_info, USTRD_MAX_CHARS),
        },
    }
}
