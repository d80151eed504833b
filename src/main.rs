//! # Uriage CLI
//!
//! Command-line interface for printing sale receipts.
//!
//! ## Usage
//!
//! ```bash
//! # Print a receipt described by a JSON file
//! uriage print --host 192.168.1.50 sale.json
//!
//! # Write the command bytes to a file instead of the printer
//! uriage print --output sale.bin sale.json
//!
//! # Show the command bytes as hex
//! uriage dump sale.json
//!
//! # Print a QR code
//! uriage qr --host 192.168.1.50 "https://example.com"
//! ```
//!
//! Printer settings come from `--config FILE`, or from `--host`, `--port`
//! and `--encoding` (also `URIAGE_PRINTER_HOST`, `URIAGE_PRINTER_PORT`,
//! `URIAGE_ENCODING`). Log verbosity follows `RUST_LOG`.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use uriage::{
    Printer, PrinterConfig, ReceiptSummary, UriageError, printer::config::DEFAULT_ENCODING,
    transport::network::DEFAULT_PORT,
};

/// Uriage - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "uriage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a receipt from a JSON sale summary
    Print {
        /// Sale summary JSON file
        receipt: PathBuf,

        /// Write the command bytes to FILE instead of printing
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        printer: PrinterArgs,
    },

    /// Show the command bytes for a receipt as hex
    Dump {
        /// Sale summary JSON file
        receipt: PathBuf,

        /// Code page label
        #[arg(long, env = "URIAGE_ENCODING", default_value = DEFAULT_ENCODING)]
        encoding: String,
    },

    /// Print a QR code
    Qr {
        /// Text to encode
        payload: String,

        #[command(flatten)]
        printer: PrinterArgs,
    },
}

#[derive(Args, Debug)]
struct PrinterArgs {
    /// Printer config JSON file (overrides the flags below)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Printer hostname or IP address
    #[arg(long, env = "URIAGE_PRINTER_HOST")]
    host: Option<String>,

    /// Raw printing port
    #[arg(long, env = "URIAGE_PRINTER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Code page label
    #[arg(long, env = "URIAGE_ENCODING", default_value = DEFAULT_ENCODING)]
    encoding: String,
}

impl PrinterArgs {
    fn resolve(self) -> Result<PrinterConfig, UriageError> {
        if let Some(path) = self.config {
            return PrinterConfig::from_file(path);
        }
        let host = self.host.ok_or_else(|| {
            UriageError::Config("no printer host (use --host or --config)".to_string())
        })?;
        Ok(PrinterConfig::new(host)
            .with_port(self.port)
            .with_encoding(self.encoding))
    }

    /// Like [`PrinterArgs::resolve`], but a missing `--host` is allowed
    /// since nothing is sent. A `--config` file is still loaded and
    /// validated as-is.
    fn resolve_offline(self) -> Result<PrinterConfig, UriageError> {
        if self.host.is_some() || self.config.is_some() {
            return self.resolve();
        }
        Ok(PrinterConfig::new("localhost")
            .with_port(self.port)
            .with_encoding(self.encoding))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), UriageError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            receipt,
            output,
            printer,
        } => {
            let summary = load_summary(&receipt)?;

            if let Some(path) = output {
                let config = printer.resolve_offline()?;
                let data = Printer::new(config)?.render(&summary)?;
                fs::write(&path, &data)?;
                println!("Wrote {} bytes to {}", data.len(), path.display());
                return Ok(());
            }

            let printer = Printer::new(printer.resolve()?)?;
            println!("Printing receipt to {}...", printer.config().addr());
            printer.print(&summary)?;
            println!("Printed successfully!");
        }
        Commands::Dump { receipt, encoding } => {
            let summary = load_summary(&receipt)?;
            let printer = Printer::new(PrinterConfig::new("localhost").with_encoding(encoding))?;
            let data = printer.render(&summary)?;
            for line in data.chunks(16) {
                let hex: Vec<String> = line.iter().map(|b| format!("{:02X}", b)).collect();
                println!("{}", hex.join(" "));
            }
        }
        Commands::Qr { payload, printer } => {
            let printer = Printer::new(printer.resolve()?)?;
            println!("Printing QR code to {}...", printer.config().addr());
            printer.print_qr(&payload)?;
            println!("Printed successfully!");
        }
    }

    Ok(())
}

/// Read a sale summary JSON file
fn load_summary(path: &Path) -> Result<ReceiptSummary, UriageError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
