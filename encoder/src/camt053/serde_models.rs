use serde::Serialize;

pub(crate) const CAMT_NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:camt.053.001.02";
pub(crate) const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub(crate) const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub(crate) const SCHEMA_LOCATION: &str =
    "urn:iso:std:iso:20022:tech:xsd:camt.053.001.02 camt.053.001.02.xsd";

#[derive(Debug, Serialize)]
#[serde(rename = "Document")]
pub struct Camt053Document {
    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: &'static str,

    #[serde(rename = "@xmlns:xsd")]
    pub xmlns_xsd: &'static str,

    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,

    #[serde(rename = "@xsi:schemaLocation")]
    pub schema_location: &'static str,

    /// <BkToCstmrStmt>...</BkToCstmrStmt>
    #[serde(rename = "BkToCstmrStmt")]
    pub bank_to_customer: Camt053BankToCustomer,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053BankToCustomer {
    /// <GrpHdr>...</GrpHdr>
    #[serde(rename = "GrpHdr")]
    pub group_header: Camt053GroupHeader,

    /// <Stmt>...</Stmt>, по одной на день
    #[serde(rename = "Stmt", default)]
    pub statements: Vec<Camt053Statement>,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053GroupHeader {
    /// <MsgId>...</MsgId>
    #[serde(rename = "MsgId")]
    pub message_id: String,

    /// <CreDtTm>2025-12-08T14:05:09.000+01:00</CreDtTm>
    #[serde(rename = "CreDtTm")]
    pub created_at: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Statement {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "CreDtTm")]
    pub created_at: String,

    #[serde(rename = "FrToDt")]
    pub period: Camt053Period,

    #[serde(rename = "Acct")]
    pub account: Camt053Account,

    /// Все <Bal>...</Bal>
    #[serde(rename = "Bal")]
    pub balances: Vec<Camt053Balance>,

    #[serde(rename = "TxsSummry")]
    pub summary: Camt053Summary,

    /// Все <Ntry>...</Ntry>
    #[serde(rename = "Ntry")]
    pub entries: Vec<Camt053Entry>,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Period {
    /// <FrToDt><FrDtTm>2025-12-08T00:00:00</FrDtTm></FrToDt>
    #[serde(rename = "FrDtTm")]
    pub from: String,

    /// <FrToDt><ToDtTm>2025-12-08T23:59:59</ToDtTm></FrToDt>
    #[serde(rename = "ToDtTm")]
    pub to: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Account {
    #[serde(rename = "Id")]
    pub id: CamtAccountId,

    /// <Tp><Cd>CACC</Cd></Tp>
    #[serde(rename = "Tp")]
    pub account_type: CamtCode,

    #[serde(rename = "Ccy")]
    pub currency: String,

    #[serde(rename = "Svcr")]
    pub servicer: CamtAgent,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtAccountId {
    /// <IBAN>
    #[serde(rename = "IBAN")]
    pub iban: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtCode {
    #[serde(rename = "Cd")]
    pub code: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtAgent {
    #[serde(rename = "FinInstnId")]
    pub institution: CamtFinancialInstitution,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtFinancialInstitution {
    #[serde(rename = "BIC")]
    pub bic: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Balance {
    /// Тип баланса (PRCD / OPBD / CLBD / ...)
    #[serde(rename = "Tp")]
    pub balance_type: Camt053BalanceType,

    /// <Amt Ccy="EUR">360000.00</Amt>
    #[serde(rename = "Amt")]
    pub amount: CamtAmtXml,

    /// <CdtDbtInd>CRDT</CdtDbtInd>
    #[serde(rename = "CdtDbtInd")]
    pub cdt_dbt_ind: String,

    /// <Dt><Dt>2025-12-08</Dt></Dt>
    #[serde(rename = "Dt")]
    pub date: CamtDateXml,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053BalanceType {
    /// <Tp><CdOrPrtry><Cd>OPBD</Cd></CdOrPrtry></Tp>
    #[serde(rename = "CdOrPrtry")]
    pub code_or_proprietary: CamtCode,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtAmtXml {
    #[serde(rename = "@Ccy")]
    pub currency: String,

    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtDateXml {
    #[serde(rename = "Dt")]
    pub date: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Summary {
    #[serde(rename = "TtlNtries")]
    pub total: CamtEntryCount,

    #[serde(rename = "TtlCdtNtries")]
    pub total_credit: CamtEntryCount,

    #[serde(rename = "TtlDbtNtries")]
    pub total_debit: CamtEntryCount,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtEntryCount {
    #[serde(rename = "NbOfNtries")]
    pub count: usize,

    #[serde(rename = "Sum")]
    pub sum: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Camt053Entry {
    #[serde(rename = "NtryRef")]
    pub reference: String,

    #[serde(rename = "Amt")]
    pub amount: CamtAmtXml,

    #[serde(rename = "CdtDbtInd")]
    pub cdt_dbt_ind: String,

    /// <Sts>BOOK</Sts>
    #[serde(rename = "Sts")]
    pub status: String,

    #[serde(rename = "BookgDt")]
    pub booking_date: CamtDateXml,

    #[serde(rename = "ValDt")]
    pub value_date: CamtDateXml,

    #[serde(rename = "AcctSvcrRef")]
    pub account_servicer_reference: String,

    #[serde(rename = "BkTxCd")]
    pub bank_tx_code: CamtBankTxCode,

    #[serde(rename = "NtryDtls")]
    pub details: CamtEntryDetails,

    #[serde(rename = "AddtlNtryInf")]
    pub additional_info: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtBankTxCode {
    #[serde(rename = "Domn")]
    pub domain: CamtTxDomain,

    #[serde(rename = "Prtry")]
    pub proprietary: CamtProprietaryCode,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtTxDomain {
    /// <Cd>PMNT</Cd>
    #[serde(rename = "Cd")]
    pub code: String,

    #[serde(rename = "Fmly")]
    pub family: CamtTxFamily,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtTxFamily {
    /// RCDT / ICDT
    #[serde(rename = "Cd")]
    pub code: String,

    /// ESCT
    #[serde(rename = "SubFmlyCd")]
    pub sub_family_code: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtProprietaryCode {
    #[serde(rename = "Cd")]
    pub code: String,

    #[serde(rename = "Issr")]
    pub issuer: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtEntryDetails {
    #[serde(rename = "TxDtls")]
    pub tx_details: CamtTxDtls,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtTxDtls {
    #[serde(rename = "RltdPties")]
    pub related_parties: CamtRelatedParties,

    #[serde(rename = "RltdAgts", skip_serializing_if = "Option::is_none")]
    pub related_agents: Option<CamtRelatedAgents>,

    #[serde(rename = "RmtInf")]
    pub rmt_inf: CamtRemittanceInfo,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtRelatedParties {
    /// <Dbtr>
    #[serde(rename = "Dbtr", skip_serializing_if = "Option::is_none")]
    pub debtor: Option<CamtParty>,

    /// <DbtrAcct>
    #[serde(rename = "DbtrAcct", skip_serializing_if = "Option::is_none")]
    pub debtor_account: Option<CamtAccount>,

    /// <Cdtr>
    #[serde(rename = "Cdtr", skip_serializing_if = "Option::is_none")]
    pub creditor: Option<CamtParty>,

    /// <CdtrAcct>
    #[serde(rename = "CdtrAcct", skip_serializing_if = "Option::is_none")]
    pub creditor_account: Option<CamtAccount>,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtRelatedAgents {
    #[serde(rename = "DbtrAgt", skip_serializing_if = "Option::is_none")]
    pub debtor_agent: Option<CamtAgent>,

    #[serde(rename = "CdtrAgt", skip_serializing_if = "Option::is_none")]
    pub creditor_agent: Option<CamtAgent>,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtParty {
    /// <Nm>
    #[serde(rename = "Nm")]
    pub name: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtAccount {
    #[serde(rename = "Id")]
    pub id: CamtAccountId,

    /// <Tp><Prtry>General</Prtry></Tp>
    #[serde(rename = "Tp")]
    pub account_type: CamtProprietaryType,

    #[serde(rename = "Ccy")]
    pub currency: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtProprietaryType {
    #[serde(rename = "Prtry")]
    pub proprietary: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CamtRemittanceInfo {
    /// <Ustrd>, не длиннее 140 символов
    #[serde(rename = "Ustrd")]
    pub unstructured: String,
}
