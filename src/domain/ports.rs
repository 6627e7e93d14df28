use crate::domain::model::{
    CancelRequest, DeviceCommand, NormalizedResult, ReceiptDocument, ReportRequest,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const XML_CONTENT_TYPE: &str = "text/xml;charset=utf-8";

/// One HTTP request/response exchange with the printer's CGI endpoint.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        url: &str,
        body: String,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait FiscalPrinter: Send + Sync {
    /// Commercial document.
    async fn print_fiscal_receipt(&self, receipt: &ReceiptDocument) -> Result<NormalizedResult>;

    /// Daily closure (X and Z reports).
    async fn print_fiscal_report(&self, report: &ReportRequest) -> Result<NormalizedResult>;

    /// Refund or void of a previously printed document.
    async fn print_cancel(&self, cancel: &CancelRequest) -> Result<NormalizedResult>;

    async fn execute_command(&self, commands: &[DeviceCommand]) -> Result<NormalizedResult>;
}
