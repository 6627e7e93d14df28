use serde::{Deserialize, Serialize};

/// Whether a line is registered or voided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemMode {
    #[default]
    Hold,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    DiscountSale,
    DiscountDepartment,
    DiscountSubtotalPrint,
    DiscountSubtotalNotPrint,
    SurchargeSale,
    SurchargeDepartment,
    SurchargeSubtotalPrint,
    SurchargeSubtotalNotPrint,
    Deposit,
    FreeOfCharge,
    SingleUseVoucher,
}

impl AdjustmentKind {
    pub const ALL: [AdjustmentKind; 11] = [
        AdjustmentKind::DiscountSale,
        AdjustmentKind::DiscountDepartment,
        AdjustmentKind::DiscountSubtotalPrint,
        AdjustmentKind::DiscountSubtotalNotPrint,
        AdjustmentKind::SurchargeSale,
        AdjustmentKind::SurchargeDepartment,
        AdjustmentKind::SurchargeSubtotalPrint,
        AdjustmentKind::SurchargeSubtotalNotPrint,
        AdjustmentKind::Deposit,
        AdjustmentKind::FreeOfCharge,
        AdjustmentKind::SingleUseVoucher,
    ];
}

/// Subtotal `option` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtotalOption {
    #[default]
    PrintDisplay,
    Print,
    Display,
}

impl SubtotalOption {
    pub fn code(self) -> u8 {
        match self {
            SubtotalOption::PrintDisplay => 0,
            SubtotalOption::Print => 1,
            SubtotalOption::Display => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Cheque,
    CreditOrCreditCard,
    Ticket,
    MultiTicket,
    NotPaid,
    PaymentDiscount,
}

impl PaymentMethod {
    pub fn code(self) -> u8 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::Cheque => 1,
            PaymentMethod::CreditOrCreditCard => 2,
            PaymentMethod::Ticket => 3,
            PaymentMethod::MultiTicket => 4,
            PaymentMethod::NotPaid => 5,
            PaymentMethod::PaymentDiscount => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub amount: f64,
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<u32>,
    #[serde(default)]
    pub justification: Option<u32>,
}

impl Adjustment {
    pub fn new(kind: AdjustmentKind, amount: f64) -> Self {
        Self {
            kind,
            amount,
            operator: None,
            description: None,
            department: None,
            justification: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(default)]
    pub mode: ItemMode,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub department: Option<u32>,
    #[serde(default)]
    pub justification: Option<u32>,
}

impl SaleLine {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            mode: ItemMode::Hold,
            adjustments: Vec::new(),
            operator: None,
            description: Some(description.into()),
            quantity,
            unit_price,
            department: None,
            justification: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefundLine {
    #[serde(default)]
    pub mode: ItemMode,
    /// When present the refund is emitted amount-based instead of quantity/price-based.
    #[serde(default)]
    pub adjustment: Option<Adjustment>,
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<u32>,
    #[serde(default)]
    pub justification: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubtotalLine {
    #[serde(default)]
    pub mode: ItemMode,
    #[serde(default)]
    pub option: SubtotalOption,
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentLine {
    #[serde(default)]
    pub method: Option<PaymentMethod>,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub justification: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lottery {
    pub code: String,
    #[serde(default)]
    pub operator: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarCode {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub hri_position: Option<u32>,
    #[serde(default)]
    pub hri_font: Option<String>,
    #[serde(default)]
    pub code_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub operator: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QrCode {
    #[serde(default)]
    pub alignment: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub error_correction: Option<u32>,
    #[serde(default)]
    pub code_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub operator: Option<u32>,
}

/// A raster image printed at the end of the receipt; `value` is the base64 payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphicCoupon {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub operator: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawerOpen {
    #[serde(default)]
    pub operator: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReceiptDocument {
    #[serde(default)]
    pub operator: Option<u32>,
    #[serde(default)]
    pub sales: Vec<SaleLine>,
    #[serde(default)]
    pub refunds: Vec<RefundLine>,
    #[serde(default)]
    pub subtotals: Vec<SubtotalLine>,
    #[serde(default)]
    pub lottery: Option<Lottery>,
    #[serde(default)]
    pub payments: Vec<PaymentLine>,
    #[serde(default)]
    pub bar_code: Option<BarCode>,
    #[serde(default)]
    pub qr_code: Option<QrCode>,
    #[serde(default)]
    pub graphic_coupon: Option<GraphicCoupon>,
    #[serde(default)]
    pub open_drawer: Option<DrawerOpen>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// X report.
    DailyFinancial,
    /// Z report.
    DailyFiscalClose,
    /// X followed by Z.
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    #[serde(default)]
    pub operator: Option<u32>,
    /// Milliseconds the device may spend printing the report.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl ReportRequest {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            operator: None,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelKind {
    Refund,
    Void,
}

impl CancelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CancelKind::Refund => "REFUND",
            CancelKind::Void => "VOID",
        }
    }
}

impl std::fmt::Display for CancelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// References a previously printed document to refund or void it.
///
/// Numbers are kept as text because the device expects them zero-padded
/// exactly as printed on the original receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub kind: CancelKind,
    pub z_report_number: String,
    pub document_number: String,
    /// `DDMMYYYY`.
    pub date: String,
    pub fiscal_number: String,
    #[serde(default)]
    pub operator: Option<u32>,
}

impl CancelRequest {
    /// Formats a calendar date the way the device prints it on receipts.
    pub fn format_date(date: chrono::NaiveDate) -> String {
        date.format("%d%m%Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCode {
    OpenDrawer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandData {
    #[serde(default)]
    pub operator: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommand {
    pub code: CommandCode,
    #[serde(default)]
    pub data: CommandData,
}

impl DeviceCommand {
    pub fn open_drawer() -> Self {
        Self {
            code: CommandCode::OpenDrawer,
            data: CommandData::default(),
        }
    }
}

/// Any one document the printer accepts in a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FiscalDocument<'a> {
    Receipt(&'a ReceiptDocument),
    Report(&'a ReportRequest),
    Cancel(&'a CancelRequest),
    Commands(&'a [DeviceCommand]),
}

impl FiscalDocument<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            FiscalDocument::Receipt(_) => "fiscal receipt",
            FiscalDocument::Report(_) => "fiscal report",
            FiscalDocument::Cancel(_) => "cancellation",
            FiscalDocument::Commands(_) => "device command",
        }
    }
}

/// The request/response text pair of one exchange, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Exchange {
    pub request: String,
    pub response: String,
}

/// Outcome of one exchange with the printer.
///
/// `body` is the `response` element exactly as decoded, attributes merged
/// with children; its `addInfo` shape depends on the command sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub success: bool,
    pub body: serde_json::Value,
    pub original: Exchange,
}

impl NormalizedResult {
    pub fn code(&self) -> Option<&str> {
        self.body.get("code").and_then(|v| v.as_str())
    }

    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(|v| v.as_str())
    }

    pub fn add_info(&self) -> Option<&serde_json::Value> {
        self.body.get("addInfo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cancel_date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(CancelRequest::format_date(date), "01012022");

        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
        assert_eq!(CancelRequest::format_date(date), "24122023");
    }

    #[test]
    fn test_payment_and_subtotal_codes() {
        assert_eq!(PaymentMethod::Cash.code(), 0);
        assert_eq!(PaymentMethod::CreditOrCreditCard.code(), 2);
        assert_eq!(PaymentMethod::PaymentDiscount.code(), 6);
        assert_eq!(SubtotalOption::default().code(), 0);
        assert_eq!(SubtotalOption::Display.code(), 2);
    }

    #[test]
    fn test_sale_line_deserializes_with_defaults() {
        let line: SaleLine = toml::from_str(
            r#"
description = "Espresso"
quantity = 2
unit_price = 1.2
"#,
        )
        .unwrap();
        assert_eq!(line.mode, ItemMode::Hold);
        assert!(line.adjustments.is_empty());
        assert_eq!(line.operator, None);
        assert_eq!(line.quantity, 2.0);
    }
}
