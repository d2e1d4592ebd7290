pub(crate) mod camt053_helpers;
pub(crate) mod mt940_helpers;
pub(crate) mod common;

use std::io::Write;
use quick_xml::se::Serializer;
use serde::Serialize;
use crate::camt053::Camt053Document;
use crate::error::EncodeError;
use crate::model::{Balance, StatementBatch};
use crate::mt940::Mt940Message;
use crate::references::{Clock, SystemClock};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

impl StatementBatch {
    /// Записывает батч в формате CAMT.053 (XML), по одной <Stmt> на день
    pub fn write_camt053<W: Write>(&self, writer: W) -> Result<(), EncodeError> {
        self.write_camt053_with_clock(writer, &SystemClock)
    }

    /// То же, что [`StatementBatch::write_camt053`], но время для идентификаторов берётся из `clock`
    pub fn write_camt053_with_clock<W: Write, C: Clock>(
        &self,
        mut writer: W,
        clock: &C,
    ) -> Result<(), EncodeError> {
        let doc = Camt053Document::from_batch(self, clock);

        let mut xml = String::new();
        let mut ser = Serializer::new(&mut xml);
        ser.indent('\t', 1);
        doc.serialize(ser)?;

        writer.write_all(XML_DECLARATION.as_bytes())?;
        writer.write_all(xml.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Записывает батч в формате MT940, по одному сообщению на день.
    ///
    /// `opening_override` заменяет входящий остаток первого дня.
    pub fn write_mt940<W: Write>(
        &self,
        mut writer: W,
        opening_override: Option<Balance>,
    ) -> Result<(), EncodeError> {
        for message in Mt940Message::from_batch(self, opening_override) {
            write_mt940_message(&mut writer, &message)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_mt940_message<W: Write>(writer: &mut W, msg: &Mt940Message) -> Result<(), EncodeError> {
    use mt940_helpers::{format_balance_field, format_sum_line};

    // ---- заголовки ----
    writeln!(writer, "{{1:F01{}BXXX0000000000}}", msg.servicer_bic)?;
    writeln!(writer, "{{2:I940{}XXXN}}", msg.servicer_bic)?;
    writeln!(writer, "{{4:")?;
    writeln!(writer, ":20:{}", msg.transaction_reference)?;
    writeln!(writer, ":25:{}", msg.account_id)?;
    writeln!(writer, ":28C:{}", msg.statement_number)?;
    writeln!(writer, ":60F:{}", format_balance_field(&msg.opening_balance))?;

    // ---- проводки ----
    for entry in &msg.entries {
        writeln!(writer, ":61:{}", entry.movement)?;
        writeln!(writer, "/TRCD/00100/")?;
        writeln!(writer, ":86:{}", entry.narrative)?;
    }

    // ---- остатки и итоги ----
    writeln!(writer, ":62F:{}", format_balance_field(&msg.closing_balance))?;
    writeln!(writer, ":64:{}", format_balance_field(&msg.closing_available_balance))?;
    for fwd in &msg.forward_available_balances {
        writeln!(writer, ":65:{}", format_balance_field(fwd))?;
    }
    writeln!(writer, ":86:{}", format_sum_line(&msg.totals))?;
    writeln!(writer, "-}}")?;

    Ok(())
}
