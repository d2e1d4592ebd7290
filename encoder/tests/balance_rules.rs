use chrono::{FixedOffset, TimeZone};
use encoder::balance::{default_opening_balance, track_balances, ArithmeticClosing, FirstEntryClosing};
use encoder::{AccountProfile, CsvInput, FixedClock, StatementBatch};

/// День 1: поступление 100,00 (остаток 100,00); день 2: списание 40,00 (остаток 60,00)
const TWO_DAYS: &str = "\
Datum;Naam / Omschrijving;Tegenrekening;Af Bij;Bedrag (EUR);Mededelingen;Saldo na mutatie
20250101;Jan Jansen;NL91INGB0004386274;Bij;100,00;Terugbetaling;100,00
20250102;Winkel;DE89370400440532013000;Af;40,00;Aankoop;60,00
";

fn two_day_batch() -> StatementBatch {
    let records = CsvInput::parse(TWO_DAYS.as_bytes())
        .expect("failed to parse inline CSV")
        .into_records()
        .expect("failed to convert inline CSV");
    StatementBatch::new(AccountProfile::default(), records)
}

fn clock() -> FixedClock {
    FixedClock(
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 12, 8, 9, 0, 0)
            .unwrap(),
    )
}

#[test]
fn period_default_comes_from_last_transaction() {
    let batch = two_day_batch();
    // последняя операция: списание: 60,00 + 40,00
    assert_eq!(default_opening_balance(&batch.records), 10_000);
    assert_eq!(batch.default_opening_balance(), 10_000);
}

#[test]
fn camt_and_mt940_closings_diverge_for_day_one() {
    let batch = two_day_batch();
    let opening = batch.default_opening_balance();

    let camt = track_balances(&FirstEntryClosing, opening, &batch.groups);
    let mt940 = track_balances(&ArithmeticClosing, opening, &batch.groups);

    assert_eq!(camt[0].closing, 10_000);
    assert_eq!(mt940[0].closing, 20_000);
    assert_ne!(camt[0].closing, mt940[0].closing);
}

#[test]
fn divergence_is_visible_in_both_outputs() {
    let batch = two_day_batch();

    let mut xml: Vec<u8> = Vec::new();
    batch.write_camt053_with_clock(&mut xml, &clock()).unwrap();
    let xml = String::from_utf8(xml).unwrap();

    let mut mt: Vec<u8> = Vec::new();
    batch.write_mt940(&mut mt, None).unwrap();
    let mt = String::from_utf8(mt).unwrap();

    // CAMT: CLBD первого дня = остаток первой операции дня
    let day1 = xml.split("<Stmt>").nth(1).expect("first statement");
    assert!(day1.contains("<Cd>CLBD</Cd>"));
    assert!(day1.contains("<Amt Ccy=\"EUR\">100.00</Amt>"));
    assert!(!day1.contains("200.00"));

    // MT940: 100,00 - 0 + 100,00
    assert!(mt.contains(":62F:C250101EUR200,00\n"));
    assert!(mt.contains(":60F:C250102EUR200,00\n"));
    assert!(mt.contains(":62F:C250102EUR160,00\n"));
}

#[test]
fn counterparty_bic_only_for_dutch_accounts() {
    let batch = two_day_batch();

    let mut xml: Vec<u8> = Vec::new();
    batch.write_camt053_with_clock(&mut xml, &clock()).unwrap();
    let xml = String::from_utf8(xml).unwrap();

    assert_eq!(xml.matches("<RltdAgts>").count(), 1);
    assert!(xml.contains("<DbtrAgt>"));
    assert!(!xml.contains("<CdtrAgt>"));
    assert_eq!(xml.matches("<BIC>INGBNL2A</BIC>").count(), 3, "two servicer blocks + one debtor agent");
}

#[test]
fn line_rule_reconciles_every_day() {
    let records = CsvInput::parse(
        "\
Datum;Af Bij;Bedrag (EUR);Saldo na mutatie
20250105;Af;1,01;0,00
20250105;Bij;2,02;0,00
20250106;Af;0,99;0,00
20250107;Bij;1000,00;0,00
20250107;Bij;0,01;0,00
"
        .as_bytes(),
    )
    .unwrap()
    .into_records()
    .unwrap();
    let batch = StatementBatch::new(AccountProfile::default(), records);

    let pairs = track_balances(&ArithmeticClosing, 5_000, &batch.groups);
    for (group, pair) in batch.groups.iter().zip(&pairs) {
        let totals = group.totals();
        assert_eq!(pair.closing, pair.opening - totals.debit_sum + totals.credit_sum);
    }
    assert_eq!(pairs.last().unwrap().closing, 5_000 - 101 + 202 - 99 + 100_000 + 1);
}

#[test]
fn negative_balances_keep_credit_mark_and_sign() {
    let records = CsvInput::parse("Datum;Af Bij;Bedrag (EUR);Saldo na mutatie\n20250101;Af;10,00;-12,34\n".as_bytes())
        .unwrap()
        .into_records()
        .unwrap();
    let batch = StatementBatch::new(AccountProfile::default(), records);
    assert_eq!(batch.default_opening_balance(), -234);

    let mut xml: Vec<u8> = Vec::new();
    batch.write_camt053_with_clock(&mut xml, &clock()).unwrap();
    let xml = String::from_utf8(xml).unwrap();

    assert!(xml.contains("<Amt Ccy=\"EUR\">-2.34</Amt>"));
    assert!(xml.contains("<Amt Ccy=\"EUR\">-12.34</Amt>"));
    assert_eq!(xml.matches("<CdtDbtInd>CRDT</CdtDbtInd>").count(), 6, "all six balances");
    // единственная операция: списание
    assert_eq!(xml.matches("<CdtDbtInd>DBIT</CdtDbtInd>").count(), 1);

    let mut mt: Vec<u8> = Vec::new();
    batch.write_mt940(&mut mt, None).unwrap();
    let mt = String::from_utf8(mt).unwrap();

    assert!(mt.contains(":60F:C250101EUR-2,34\n"));
    assert!(mt.contains(":62F:C250101EUR-12,34\n"));
    assert!(mt.contains(":64:C250101EUR-12,34\n"));
    assert_eq!(mt.matches(":65:C250101EUR-12,34\n").count(), 2);
    assert!(!mt.contains(":60F:D") && !mt.contains(":62F:D"));
}
