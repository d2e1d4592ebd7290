use chrono::{DateTime, FixedOffset, Local};
use crate::date::StatementDate;

/// Источник текущего времени для идентификаторов выписки
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Системное локальное время
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Всегда одно и то же время (для тестов и воспроизводимого вывода)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// `<NtryRef>`: YYMMDD + номер операции за день (с 1), всего 27 символов
pub fn entry_reference(date: &StatementDate, idx: usize) -> String {
    format!("{}{:021}", date.to_short(), idx + 1)
}

/// `<AcctSvcrRef>`: YYMMDD + номер операции за день (с 1), всего 32 символа
pub fn account_servicer_reference(date: &StatementDate, idx: usize) -> String {
    format!("{}{:026}", date.to_short(), idx + 1)
}

/// Референс в строке :61:, YYMMDD + номер операции за день (с 1) на 8 знаков
pub fn mt940_reference(date: &StatementDate, idx: usize) -> String {
    format!("{}{:08}", date.to_short(), idx + 1)
}

/// `<GrpHdr><MsgId>`
pub fn message_id(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y%m%d0000000_%Y%m%d%H%M%S000").to_string()
}

/// `<CreDtTm>` с миллисекундами и смещением
pub fn creation_timestamp(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

/// Счётчик выписок за один запуск: `<Stmt><Id>` = время до миллисекунд + номер на 7 знаков
#[derive(Debug, Default)]
pub struct StatementIdSequence {
    counter: u32,
}

impl StatementIdSequence {
    pub fn new() -> Self {
        StatementIdSequence { counter: 0 }
    }

    pub fn next_id(&mut self, now: &DateTime<FixedOffset>) -> String {
        self.counter += 1;
        format!("{}{:07}", now.format("%Y%m%d%H%M%S%3f"), self.counter)
    }
}
