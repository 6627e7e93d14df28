use anyhow::Result;
use fpmate_client::utils::validation::Validate;
use fpmate_client::{FpMateClient, FpMateError, JobConfig};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const OK_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><response success="true" code="" status="2"><addInfo><lastCommand>74</lastCommand></addInfo></response></s:Body></s:Envelope>"#;

fn job_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[tokio::test]
async fn test_receipt_job_from_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/cgi-bin/fpmate.cgi")
                .query_param("devid", "local_printer")
                .body_contains(r#"<printRecItem operator="2" description="Espresso" quantity="2" unitPrice="1.2" department="1" justification="1"/>"#)
                .body_contains(r#"<printRecTotal operator="2" description="Payment in cash" payment="2.4" paymentType="0" index="1" justification="1"/>"#)
                .body_contains(r#"<endFiscalReceipt operator="2"/>"#);
            then.status(200).body(OK_REPLY);
        })
        .await;

    let file = job_file(&format!(
        r#"
[printer]
host = "{}"
device_id = "local_printer"

[defaults]
operator = 2

[receipt]
[[receipt.sales]]
description = "Espresso"
quantity = 2
unit_price = 1.2

[[receipt.payments]]
description = "Payment in cash"
amount = 2.4
"#,
        server.address()
    ))?;

    let job = JobConfig::from_file(file.path())?;
    job.validate()?;

    let client = FpMateClient::new(job.printer.clone())?.with_defaults(job.defaults);
    let result = client.send_document(job.document()?).await?;

    mock.assert_async().await;
    assert!(result.success);
    Ok(())
}

#[tokio::test]
async fn test_command_job_with_env_host() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/cgi-bin/fpmate.cgi")
                .body_contains(r#"<printerCommand><openDrawer operator="1"/></printerCommand>"#);
            then.status(200).body(OK_REPLY);
        })
        .await;

    std::env::set_var("FPMATE_JOB_TEST_HOST", server.address().to_string());
    let file = job_file(
        r#"
[printer]
host = "${FPMATE_JOB_TEST_HOST}"

[[commands]]
code = "open_drawer"
"#,
    )?;

    let job = JobConfig::from_file(file.path())?;
    assert_eq!(job.printer.host, server.address().to_string());

    let client = FpMateClient::new(job.printer.clone())?;
    let result = client.send_document(job.document()?).await?;

    mock.assert_async().await;
    assert!(result.success);
    Ok(())
}

#[test]
fn test_missing_job_file_is_io_error() {
    let err = JobConfig::from_file("/nonexistent/fpmate-job.toml").unwrap_err();
    assert!(matches!(err, FpMateError::IoError(_)));
}

#[test]
fn test_job_without_document_fails_validation() -> Result<()> {
    let file = job_file(
        r#"
[printer]
host = "127.0.0.1"
"#,
    )?;

    let job = JobConfig::from_file(file.path())?;
    let err = job.validate().unwrap_err();
    assert!(matches!(err, FpMateError::MissingConfigError { .. }));
    Ok(())
}
