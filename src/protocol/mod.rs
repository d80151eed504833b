//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS family
//! of thermal receipt printer protocols. Every builder returns the exact
//! bytes for one command; nothing here keeps state or performs I/O.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, line spacing, position, cut)
//! - [`text`]: Text styling (alignment, bold, title)
//! - [`barcode`]: CODE39 and QR codes
//!
//! ## Usage Example
//!
//! ```
//! use uriage::protocol::{commands, text};
//! use uriage::protocol::text::Alignment;
//!
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Set text style
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold_off());
//!
//! // Feed and cut
//! data.extend(commands::cut());
//! ```

pub mod barcode;
pub mod commands;
pub mod text;
