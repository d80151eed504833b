//! # Printer Module
//!
//! Ties the composer and the transport together for one configured
//! printer.
//!
//! ## Modules
//!
//! - [`config`]: Printer address and code page
//!
//! ## Example
//!
//! ```no_run
//! use chrono::Local;
//! use uriage::printer::{Printer, PrinterConfig};
//! use uriage::receipt::{ReceiptLineItem, ReceiptSummary};
//!
//! let printer = Printer::new(PrinterConfig::new("192.168.1.50"))?;
//! let summary = ReceiptSummary::new(
//!     vec![ReceiptLineItem::new("Pencil", 100)],
//!     100,
//!     Local::now().naive_local(),
//! );
//! printer.print(&summary)?;
//! # Ok::<(), uriage::UriageError>(())
//! ```

pub mod config;

pub use config::PrinterConfig;

use tracing::{debug, info};

use crate::encoder::CommandEncoder;
use crate::encoding::TextEncoding;
use crate::error::UriageError;
use crate::receipt::{self, ReceiptSummary};
use crate::transport::network;

/// A network receipt printer.
///
/// Holds no connection between jobs. Each call to [`Printer::print`]
/// builds its own transcript and opens its own socket, so concurrent jobs
/// never share state. Serializing jobs for one device is up to the caller.
#[derive(Debug, Clone)]
pub struct Printer {
    config: PrinterConfig,
    encoding: TextEncoding,
}

impl Printer {
    /// ## Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: PrinterConfig) -> Result<Self, UriageError> {
        config.validate()?;
        let encoding = config.text_encoding()?;
        Ok(Self { config, encoding })
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Full job bytes for `summary`: the composed receipt followed by a cut.
    pub fn render(&self, summary: &ReceiptSummary) -> Result<Vec<u8>, UriageError> {
        let mut encoder = CommandEncoder::new(self.encoding);
        receipt::compose_into(&mut encoder, summary)?;
        encoder.cut();
        Ok(encoder.into_bytes())
    }

    /// Render `summary` and send it.
    ///
    /// Nothing is sent unless the whole transcript was built.
    pub fn print(&self, summary: &ReceiptSummary) -> Result<(), UriageError> {
        let data = self.render(summary)?;
        debug!(bytes = data.len(), items = summary.items.len(), "rendered receipt");
        self.send_raw(&data)?;
        info!(addr = %self.config.addr(), total = summary.total(), "printed receipt");
        Ok(())
    }

    /// QR code of `payload` followed by a cut.
    pub fn print_qr(&self, payload: &str) -> Result<(), UriageError> {
        let mut encoder = CommandEncoder::new(self.encoding);
        encoder.draw_qr(payload)?;
        encoder.new_line();
        encoder.cut();
        self.send_raw(&encoder.into_bytes())
    }

    /// Send pre-built command bytes.
    pub fn send_raw(&self, data: &[u8]) -> Result<(), UriageError> {
        network::send(&self.config.host, self.config.port, data)
    }
}
