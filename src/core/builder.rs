//! Domain documents to FpMate command trees.
//!
//! The device replays the children of a document as one session, so the
//! order of emitted elements is part of the contract.

use crate::core::defaults::{self, CommandDefaults};
use crate::core::tables::{RefundOperationType, SaleAdjustmentType, SubtotalAdjustmentType};
use crate::core::xml::Element;
use crate::domain::model::{
    Adjustment, BarCode, CancelRequest, CommandCode, CommandData, DeviceCommand, DrawerOpen,
    FiscalDocument, GraphicCoupon, ItemMode, Lottery, PaymentLine, QrCode, ReceiptDocument,
    RefundLine, ReportKind, ReportRequest, SaleLine, SubtotalLine,
};

pub const RECEIPT_ROOT: &str = "printerFiscalReceipt";
pub const REPORT_ROOT: &str = "printerFiscalReport";
pub const COMMAND_ROOT: &str = "printerCommand";
pub const COMMANDS_ROOT: &str = "printerCommands";

#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    defaults: CommandDefaults,
}

impl CommandBuilder {
    pub fn new(defaults: CommandDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &CommandDefaults {
        &self.defaults
    }

    pub fn build(&self, document: FiscalDocument<'_>) -> Element {
        match document {
            FiscalDocument::Receipt(receipt) => self.build_receipt(receipt),
            FiscalDocument::Report(report) => self.build_report(report),
            FiscalDocument::Cancel(cancel) => self.build_cancel(cancel),
            FiscalDocument::Commands(commands) => self.build_commands(commands),
        }
    }

    pub fn build_receipt(&self, receipt: &ReceiptDocument) -> Element {
        let mut root = Element::new(RECEIPT_ROOT);
        let operator = self.defaults.operator(receipt.operator);

        root.push(Element::new("beginFiscalReceipt").attr("operator", operator));

        for sale in &receipt.sales {
            self.push_sale(&mut root, sale);
        }
        for refund in &receipt.refunds {
            root.push(self.refund(refund));
        }
        for subtotal in &receipt.subtotals {
            self.push_subtotal(&mut root, subtotal);
        }
        if let Some(lottery) = &receipt.lottery {
            root.push(self.lottery(lottery));
        }
        for payment in &receipt.payments {
            root.push(self.payment(payment));
        }
        if let Some(bar_code) = &receipt.bar_code {
            root.push(self.bar_code(bar_code));
        }
        if let Some(qr_code) = &receipt.qr_code {
            root.push(self.qr_code(qr_code));
        }
        if let Some(coupon) = &receipt.graphic_coupon {
            root.push(self.graphic_coupon(coupon));
        }

        root.push(Element::new("endFiscalReceipt").attr("operator", operator));

        // the drawer kicks once the receipt is closed
        if let Some(drawer) = &receipt.open_drawer {
            root.push(self.open_drawer(drawer));
        }

        root
    }

    pub fn build_report(&self, report: &ReportRequest) -> Element {
        let operator = self.defaults.operator(report.operator);
        let command = match report.kind {
            ReportKind::DailyFinancial => Element::new("printXReport").attr("operator", operator),
            ReportKind::DailyFiscalClose => Element::new("printZReport")
                .attr("operator", operator)
                .attr("timeout", report.timeout.unwrap_or(defaults::Z_REPORT_TIMEOUT)),
            ReportKind::All => Element::new("printXZReport")
                .attr("operator", operator)
                .attr("timeout", report.timeout.unwrap_or(defaults::XZ_REPORT_TIMEOUT)),
        };

        let mut root = Element::new(REPORT_ROOT);
        root.push(command);
        root
    }

    pub fn build_cancel(&self, cancel: &CancelRequest) -> Element {
        let message = format!(
            "{} {} {} {} {}",
            cancel.kind,
            cancel.z_report_number,
            cancel.document_number,
            cancel.date,
            cancel.fiscal_number
        );

        let mut root = Element::new(RECEIPT_ROOT);
        root.push(
            Element::new("printRecMessage")
                .attr("operator", self.defaults.operator(cancel.operator))
                .attr("messageType", defaults::CANCEL_MESSAGE_TYPE)
                .attr("message", message),
        );
        root
    }

    /// The firmware only accepts the plural root for batches of two or more.
    pub fn build_commands(&self, commands: &[DeviceCommand]) -> Element {
        let mut root = Element::new(if commands.len() > 1 {
            COMMANDS_ROOT
        } else {
            COMMAND_ROOT
        });
        for command in commands {
            root.push(self.command(command.code, &command.data));
        }
        root
    }

    fn command(&self, code: CommandCode, data: &CommandData) -> Element {
        match code {
            CommandCode::OpenDrawer => {
                Element::new("openDrawer").attr("operator", self.defaults.operator(data.operator))
            }
        }
    }

    fn push_sale(&self, root: &mut Element, sale: &SaleLine) {
        let line_name = match sale.mode {
            ItemMode::Hold => {
                for adjustment in &sale.adjustments {
                    root.push(self.item_adjustment(adjustment));
                }
                "printRecItem"
            }
            ItemMode::Cancel => {
                for adjustment in &sale.adjustments {
                    root.push(
                        Element::new("printRecItemAdjustmentVoid")
                            .attr("operator", self.defaults.operator(adjustment.operator)),
                    );
                }
                "printRecItemVoid"
            }
        };

        root.push(
            Element::new(line_name)
                .attr("operator", self.defaults.operator(sale.operator))
                .attr("description", self.defaults.description(sale.description.as_deref()))
                .attr("quantity", sale.quantity)
                .attr("unitPrice", sale.unit_price)
                .attr("department", self.defaults.department(sale.department))
                .attr("justification", self.defaults.justification(sale.justification)),
        );
    }

    fn item_adjustment(&self, adjustment: &Adjustment) -> Element {
        Element::new("printRecItemAdjustment")
            .attr("operator", self.defaults.operator(adjustment.operator))
            .attr("description", self.defaults.description(adjustment.description.as_deref()))
            .attr("department", self.defaults.department(adjustment.department))
            .attr("justification", self.defaults.justification(adjustment.justification))
            .attr("amount", adjustment.amount)
            .attr("adjustmentType", SaleAdjustmentType::from(adjustment.kind))
    }

    fn refund(&self, refund: &RefundLine) -> Element {
        let operator = self.defaults.operator(refund.operator);
        let description = self.defaults.description(refund.description.as_deref());
        let department = self.defaults.department(refund.department);
        let justification = self.defaults.justification(refund.justification);

        match (refund.mode, &refund.adjustment) {
            (ItemMode::Hold, Some(adjustment)) => Element::new("printRecRefund")
                .attr("operator", operator)
                .attr("description", description)
                .attr("operationType", RefundOperationType::from(adjustment.kind))
                .attr("amount", refund.amount.unwrap_or(defaults::REFUND_AMOUNT))
                .attr("department", department)
                .attr("justification", justification),
            (ItemMode::Hold, None) => Element::new("printRecRefund")
                .attr("operator", operator)
                .attr("description", description)
                .attr("quantity", refund.quantity.unwrap_or(defaults::REFUND_QUANTITY))
                .attr("unitPrice", refund.unit_price.unwrap_or(defaults::REFUND_UNIT_PRICE))
                .attr("department", department)
                .attr("justification", justification),
            // operator comes from the refund line itself, not from its operation type
            (ItemMode::Cancel, _) => Element::new("printRecRefundVoid").attr("operator", operator),
        }
    }

    fn push_subtotal(&self, root: &mut Element, subtotal: &SubtotalLine) {
        match subtotal.mode {
            ItemMode::Hold => {
                for adjustment in &subtotal.adjustments {
                    root.push(
                        Element::new("printRecSubtotalAdjustment")
                            .attr("operator", self.defaults.operator(adjustment.operator))
                            .attr(
                                "description",
                                self.defaults.description(adjustment.description.as_deref()),
                            )
                            .attr("amount", adjustment.amount)
                            .attr(
                                "justification",
                                self.defaults.justification(adjustment.justification),
                            )
                            .attr("adjustmentType", SubtotalAdjustmentType::from(adjustment.kind)),
                    );
                }
                root.push(
                    Element::new("printRecSubtotal")
                        .attr("operator", self.defaults.operator(subtotal.operator))
                        .attr("option", subtotal.option.code()),
                );
            }
            // a cancelled subtotal only withdraws its adjustments
            ItemMode::Cancel => {
                for adjustment in &subtotal.adjustments {
                    root.push(
                        Element::new("printRecSubtotalAdjustVoid")
                            .attr("operator", self.defaults.operator(adjustment.operator)),
                    );
                }
            }
        }
    }

    fn lottery(&self, lottery: &Lottery) -> Element {
        Element::new("printRecLotteryID")
            .attr("operator", self.defaults.operator(lottery.operator))
            .attr("code", &lottery.code)
    }

    fn payment(&self, payment: &PaymentLine) -> Element {
        Element::new("printRecTotal")
            .attr("operator", self.defaults.operator(payment.operator))
            .attr("description", self.defaults.description(payment.description.as_deref()))
            .attr("payment", payment.amount.unwrap_or(defaults::PAYMENT_AMOUNT))
            .attr("paymentType", payment.method.unwrap_or_default().code())
            .attr("index", payment.index.unwrap_or(defaults::PAYMENT_INDEX))
            .attr("justification", self.defaults.justification(payment.justification))
    }

    fn bar_code(&self, bar_code: &BarCode) -> Element {
        Element::new("printBarCode")
            .attr("operator", self.defaults.operator(bar_code.operator))
            .attr("position", bar_code.position.unwrap_or(defaults::BARCODE_POSITION))
            .attr("width", bar_code.width.unwrap_or(defaults::BARCODE_WIDTH))
            .attr("height", bar_code.height.unwrap_or(defaults::BARCODE_HEIGHT))
            .attr("hRIPosition", bar_code.hri_position.unwrap_or(defaults::BARCODE_HRI_POSITION))
            .attr("hRIFont", bar_code.hri_font.as_deref().unwrap_or(defaults::BARCODE_HRI_FONT))
            .attr("codeType", bar_code.code_type.as_deref().unwrap_or(defaults::CODE_TYPE))
            .attr("code", bar_code.data.as_deref().unwrap_or(defaults::CODE_DATA))
    }

    // QR codes share the barcode element; the qRCode* attributes select the symbology
    fn qr_code(&self, qr_code: &QrCode) -> Element {
        Element::new("printBarCode")
            .attr("operator", self.defaults.operator(qr_code.operator))
            .attr("qRCodeAlignment", qr_code.alignment.unwrap_or(defaults::QR_ALIGNMENT))
            .attr("qRCodeSize", qr_code.size.unwrap_or(defaults::QR_SIZE))
            .attr(
                "qRCodeErrorCorrection",
                qr_code.error_correction.unwrap_or(defaults::QR_ERROR_CORRECTION),
            )
            .attr("codeType", qr_code.code_type.as_deref().unwrap_or(defaults::CODE_TYPE))
            .attr("code", qr_code.data.as_deref().unwrap_or(defaults::CODE_DATA))
    }

    fn graphic_coupon(&self, coupon: &GraphicCoupon) -> Element {
        Element::new("printGraphicCoupon")
            .attr("operator", self.defaults.operator(coupon.operator))
            .attr("graphicFormat", coupon.format.as_deref().unwrap_or(defaults::GRAPHIC_FORMAT))
            .with_text(coupon.value.as_deref().unwrap_or_default())
    }

    fn open_drawer(&self, drawer: &DrawerOpen) -> Element {
        self.command(
            CommandCode::OpenDrawer,
            &CommandData {
                operator: drawer.operator,
            },
        )
    }
}
