use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum};
use encoder::{parse_balance, AccountProfile, CsvInput, EncodeError, StatementBatch};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cli_converter",
    version,
    about = "Конвертирует CSV-выгрузку банка в выписки CAMT.053 и MT940.",
    long_about = None,
)]
struct Args {
    /// Входной файл (.csv)
    input: PathBuf,

    /// Какие выписки строить
    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Входящий остаток для MT940 (например "1234,56"); по умолчанию восстанавливается из выгрузки
    #[arg(long, allow_hyphen_values = true)]
    opening_balance: Option<String>,

    /// IBAN счёта; по умолчанию берётся из колонки "Rekening"
    #[arg(long)]
    account: Option<String>,

    /// Разделитель колонок CSV
    #[arg(long, default_value_t = ';')]
    delimiter: char,
}

/// Поддерживаемые форматы для CLI
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Camt053,
    Mt940,
    All,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version тоже приходят сюда, но это не ошибка
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn check_input(path: &Path) -> Result<(), EncodeError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if !is_csv {
        return Err(EncodeError::BadInput(format!(
            "input file must have a .csv extension: {}",
            path.display()
        )));
    }
    if !path.exists() {
        return Err(EncodeError::BadInput(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }
    Ok(())
}

fn run(args: Args) -> Result<(), EncodeError> {
    check_input(&args.input)?;

    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| EncodeError::BadInput(format!("delimiter must be ASCII: {}", args.delimiter)))?;

    let opening_override = args
        .opening_balance
        .as_deref()
        .map(parse_balance)
        .transpose()?;

    let file = File::open(&args.input)?;
    let records = CsvInput::parse_with_delimiter(BufReader::new(file), delimiter)?.into_records()?;
    info!("read {} transactions from {}", records.len(), args.input.display());

    // чужой счёт из командной строки важнее колонки "Rekening"
    let iban = args
        .account
        .clone()
        .or_else(|| records.iter().find_map(|r| r.own_account.clone()));
    let account = iban.map(AccountProfile::new).unwrap_or_default();

    let batch = StatementBatch::new(account, records);

    if matches!(args.format, Format::Camt053 | Format::All) {
        let out_path = args.input.with_extension("camt053.xml");
        let writer = BufWriter::new(File::create(&out_path)?);
        batch.write_camt053(writer)?;
        info!("written {}", out_path.display());
    }

    if matches!(args.format, Format::Mt940 | Format::All) {
        let out_path = args.input.with_extension("mt940");
        let writer = BufWriter::new(File::create(&out_path)?);
        batch.write_mt940(writer, opening_override)?;
        info!("written {}", out_path.display());
    }

    Ok(())
}
