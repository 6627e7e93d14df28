use clap::Parser;
use fpmate_client::utils::{logger, validation::Validate};
use fpmate_client::{CliArgs, FpMateClient, JobConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading job from: {}", args.config);

    let mut job = match JobConfig::from_file(&args.config) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut job.printer);

    if let Err(e) = job.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let document = job.document()?;
    let client = FpMateClient::new(job.printer.clone())?.with_defaults(job.defaults);

    if args.dry_run {
        println!("POST {}", client.config().endpoint_url()?);
        println!("{}", client.request_xml(document)?);
        return Ok(());
    }

    match client.send_document(document).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result.body)?);
            if result.success {
                println!("✅ Printer accepted the {}", document.label());
            } else {
                eprintln!(
                    "⚠️  Printer rejected the {} (code: {})",
                    document.label(),
                    result.code().unwrap_or("-")
                );
                std::process::exit(4);
            }
        }
        Err(e) => {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
