//! # Uriage - Receipt Printer Library
//!
//! Uriage turns a sale summary into a byte-exact ESC/POS command stream
//! and ships it to a network thermal printer. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Encoder**: text, alignment, rules, CODE39 and QR over one code page
//! - **Receipt composer**: the fixed sale receipt layout
//! - **Transport**: raw TCP (port 9100)
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::Local;
//! use uriage::{
//!     printer::{Printer, PrinterConfig},
//!     receipt::{ReceiptLineItem, ReceiptSummary},
//! };
//!
//! let printer = Printer::new(PrinterConfig::new("192.168.1.50"))?;
//!
//! let summary = ReceiptSummary::new(
//!     vec![
//!         ReceiptLineItem::new("Pencil", 100),
//!         ReceiptLineItem::new("Notebook", 250),
//!     ],
//!     1000,
//!     Local::now().naive_local(),
//! )
//! .store_name("Shibuya")
//! .transaction_id("A01000001A");
//!
//! printer.print(&summary)?;
//! # Ok::<(), uriage::UriageError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`buffer`] | Append-only command buffer |
//! | [`encoding`] | Code page binding |
//! | [`encoder`] | Command encoder session |
//! | [`receipt`] | Sale summary and receipt composer |
//! | [`transport`] | Communication backends |
//! | [`printer`] | Printer configuration and print pipeline |
//! | [`error`] | Error types |
//!
//! ## Data Flow
//!
//! ```text
//! ReceiptSummary ──► receipt::compose ──► CommandEncoder ──► CommandBuffer
//!                                                                 │
//!                               socket ◄── transport::send ◄── bytes
//! ```

pub mod buffer;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use encoder::CommandEncoder;
pub use encoding::TextEncoding;
pub use error::UriageError;
pub use printer::{Printer, PrinterConfig};
pub use receipt::{ReceiptLineItem, ReceiptSummary};
