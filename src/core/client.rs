use crate::adapters::http::HttpTransport;
use crate::config::PrinterConfig;
use crate::core::builder::CommandBuilder;
use crate::core::defaults::CommandDefaults;
use crate::core::{envelope, interpreter};
use crate::domain::model::{
    CancelRequest, DeviceCommand, FiscalDocument, NormalizedResult, ReceiptDocument,
    ReportRequest,
};
use crate::domain::ports::{FiscalPrinter, Transport, XML_CONTENT_TYPE};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Client for the printer's `fpmate.cgi` endpoint.
///
/// Each call performs exactly one exchange; nothing is cached between calls,
/// so a client can be shared freely across tasks.
pub struct FpMateClient<T: Transport = HttpTransport> {
    config: PrinterConfig,
    builder: CommandBuilder,
    transport: T,
}

impl FpMateClient<HttpTransport> {
    pub fn new(config: PrinterConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.effective_timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> FpMateClient<T> {
    pub fn with_transport(config: PrinterConfig, transport: T) -> Self {
        Self {
            config,
            builder: CommandBuilder::default(),
            transport,
        }
    }

    pub fn with_defaults(mut self, defaults: CommandDefaults) -> Self {
        self.builder = CommandBuilder::new(defaults);
        self
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// The envelope that would be posted for `document`.
    pub fn request_xml(&self, document: FiscalDocument<'_>) -> Result<String> {
        envelope::wrap(self.builder.build(document))
    }

    pub async fn send_document(&self, document: FiscalDocument<'_>) -> Result<NormalizedResult> {
        let url = self.config.endpoint_url()?;
        let request = self.request_xml(document)?;

        tracing::debug!("Sending {} to {}", document.label(), url);

        let raw_response = self
            .transport
            .send(&url, request.clone(), XML_CONTENT_TYPE)
            .await?;
        let response = envelope::unwrap(&raw_response)?;
        let result = interpreter::interpret(response, request, raw_response);

        if result.success {
            tracing::info!("Printer accepted {}", document.label());
        } else {
            tracing::warn!(
                "Printer rejected {} (code: {:?}, status: {:?})",
                document.label(),
                result.code(),
                result.status()
            );
        }

        Ok(result)
    }
}

#[async_trait]
impl<T: Transport> FiscalPrinter for FpMateClient<T> {
    async fn print_fiscal_receipt(&self, receipt: &ReceiptDocument) -> Result<NormalizedResult> {
        self.send_document(FiscalDocument::Receipt(receipt)).await
    }

    async fn print_fiscal_report(&self, report: &ReportRequest) -> Result<NormalizedResult> {
        self.send_document(FiscalDocument::Report(report)).await
    }

    async fn print_cancel(&self, cancel: &CancelRequest) -> Result<NormalizedResult> {
        self.send_document(FiscalDocument::Cancel(cancel)).await
    }

    async fn execute_command(&self, commands: &[DeviceCommand]) -> Result<NormalizedResult> {
        self.send_document(FiscalDocument::Commands(commands)).await
    }
}
