use crate::config::PrinterConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fpmate")]
#[command(about = "Send fiscal receipts, reports and commands to an Epson FpMate printer")]
pub struct CliArgs {
    /// Path to the TOML job file
    #[arg(short, long, default_value = "fpmate-job.toml")]
    pub config: String,

    /// Override printer host (ip[:port])
    #[arg(long)]
    pub host: Option<String>,

    /// Override device id
    #[arg(long)]
    pub device_id: Option<String>,

    /// Override timeout in milliseconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the request envelope instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliArgs {
    pub fn apply_overrides(&self, printer: &mut PrinterConfig) {
        if let Some(host) = &self.host {
            printer.host = host.clone();
        }
        if let Some(device_id) = &self.device_id {
            printer.device_id = Some(device_id.clone());
        }
        if let Some(timeout) = self.timeout {
            printer.timeout = Some(timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let args = CliArgs::parse_from(["fpmate", "--host", "10.0.0.5:8080", "--timeout", "3000"]);
        let mut printer = PrinterConfig::new("192.168.1.10").with_device_id("local_printer");

        args.apply_overrides(&mut printer);

        assert_eq!(printer.host, "10.0.0.5:8080");
        assert_eq!(printer.device_id.as_deref(), Some("local_printer"));
        assert_eq!(printer.timeout, Some(3000));
        assert_eq!(args.config, "fpmate-job.toml");
        assert!(!args.dry_run);
    }
}
