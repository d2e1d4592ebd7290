use encoder::{parse_balance, AccountProfile, CsvInput, StatementBatch};
use std::{fs::File, io::BufReader, path::PathBuf};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("csv")
        .join("ing_example.csv")
}

fn load_fixture_batch() -> StatementBatch {
    let path = fixture_path();
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open CSV fixture {path:?}: {e}"));
    let reader = BufReader::new(file);

    let records = CsvInput::parse(reader)
        .expect("failed to parse CSV fixture")
        .into_records()
        .expect("failed to convert CSV rows into records");

    StatementBatch::new(AccountProfile::default(), records)
}

fn render(batch: &StatementBatch, opening: Option<i128>) -> String {
    let mut buf: Vec<u8> = Vec::new();
    batch
        .write_mt940(&mut buf, opening)
        .expect("failed to write MT940");
    String::from_utf8(buf).expect("MT940 output should be valid UTF-8")
}

fn blocks(out: &str) -> Vec<&str> {
    out.split_inclusive("-}\n").collect()
}

#[test]
fn writes_one_block_per_day() {
    let out = render(&load_fixture_batch(), None);

    assert_eq!(blocks(&out).len(), 3, "fixture spans three days");
    assert_eq!(out.matches("{1:F01INGBNL2ABXXX0000000000}").count(), 3);
    assert_eq!(out.matches(":61:").count(), 5);
}

#[test]
fn first_day_block_matches_expected_layout() {
    let out = render(&load_fixture_batch(), None);
    let first = blocks(&out)[0];

    let expected = "\
{1:F01INGBNL2ABXXX0000000000}
{2:I940INGBNL2AXXXN}
{4:
:20:P251208000000001
:25:NL91INGB0004386274EUR
:28C:00000
:60F:C250101EUR1000,00
:61:2501010101D40,00NTRFNONREF//25010100000001
/TRCD/00100/
:86:/CNTP/NL44RABO0123456789//Verhuur & Co///REMI/USTD//Huur. januari/
:61:2501010101C250,00NTRFNONREF//25010100000002
/TRCD/00100/
:86:/CNTP/NL02ABNA0123456789//Werkgever B.V.///REMI/USTD//Salaris december/
:62F:C250101EUR1210,00
:64:C250101EUR1210,00
:65:C250101EUR1210,00
:65:C250101EUR1210,00
:86:/SUM/1/1/40.00/250.00/
-}
";
    assert_eq!(first, expected);
}

#[test]
fn closing_balance_feeds_next_opening() {
    let out = render(&load_fixture_batch(), None);
    let days = blocks(&out);

    assert!(days[1].contains(":60F:C250102EUR1210,00\n"));
    assert!(days[1].contains(":62F:C250102EUR1197,65\n"));
    assert!(days[2].contains(":60F:C250103EUR1197,65\n"));
    assert!(days[2].contains(":62F:C250103EUR1182,15\n"));
}

#[test]
fn narrative_without_account_or_remittance() {
    let out = render(&load_fixture_batch(), None);
    let last = blocks(&out)[2];

    assert!(last.contains(":86:/CNTP/NL12KNAB0123456789//J. de Vries/\n"));
    assert!(last.contains(":86:/CNTP///Albert Heijn 1234///REMI/USTD//Pasvolgnr. 001 03-01-2025 12.01/\n"));
    assert!(last.contains(":86:/SUM/1/1/25.50/10.00/\n"));
}

#[test]
fn opening_override_replaces_period_default() {
    let batch = load_fixture_batch();
    let opening = parse_balance("-100,00").unwrap();
    let out = render(&batch, Some(opening));
    let days = blocks(&out);

    assert!(days[0].contains(":60F:C250101EUR-100,00\n"));
    // -100,00 - 40,00 + 250,00
    assert!(days[0].contains(":62F:C250101EUR110,00\n"));
    assert!(days[1].contains(":60F:C250102EUR110,00\n"));
}

#[test]
fn empty_batch_writes_nothing() {
    let batch = StatementBatch::new(AccountProfile::default(), Vec::new());
    assert_eq!(batch.default_opening_balance(), 0);
    assert_eq!(render(&batch, None), "");
}
