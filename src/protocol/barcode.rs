//! # ESC/POS Barcode Commands
//!
//! This module implements the symbol commands used on receipts.
//!
//! ## Supported Symbols
//!
//! | Type | Description | Length field |
//! |------|-------------|--------------|
//! | CODE39 | Linear, full ASCII alphabet | 1 byte |
//! | QR Code | 2D matrix | 2 bytes (pL pH) |
//!
//! ## CODE39 Usage
//!
//! ```
//! use uriage::protocol::barcode::code39;
//!
//! let data = code39::barcode(b"A01000001A").unwrap();
//! assert_eq!(data[12], 10); // length byte
//! ```
//!
//! ## QR Code Usage
//!
//! QR codes are generated in a three-step process:
//!
//! 1. Configure the symbol (cell size)
//! 2. Store the data to encode
//! 3. Print the stored symbol
//!
//! ```
//! use uriage::protocol::barcode::qr;
//!
//! let mut data = Vec::new();
//! data.extend(qr::set_cell_size(qr::DEFAULT_CELL_SIZE));
//! data.extend(qr::store(b"https://example.com").unwrap());
//! data.extend(qr::print());
//! ```
//!
//! Both length fields are limited to what fits a single byte; longer
//! payloads are rejected with [`UriageError::Encoding`] instead of being
//! truncated or wrapped.

use super::commands::GS;
use crate::error::UriageError;

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// CODE39 command builders
pub mod code39 {
    use super::{GS, UriageError};

    /// Bar height in dots
    pub const BAR_HEIGHT: u8 = 0x50;

    /// Module width selector value
    pub const MODULE_WIDTH: u8 = 0x02;

    /// Symbology id for CODE39 with explicit length byte
    const SYMBOLOGY: u8 = 0x45;

    /// HRI (Human Readable Interpretation) position
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HriPosition {
        /// No HRI text printed by the device
        #[default]
        None = 0,
        Above = 1,
        Below = 2,
        Both = 3,
    }

    /// # Set Bar Height (GS h n)
    ///
    /// | Format  | Bytes     |
    /// |---------|-----------|
    /// | ASCII   | GS h n    |
    /// | Hex     | 1D 68 n   |
    /// | Decimal | 29 104 n  |
    #[inline]
    pub fn set_height(dots: u8) -> Vec<u8> {
        vec![GS, b'h', dots]
    }

    /// # Set Module Width (GS g n)
    ///
    /// | Format  | Bytes     |
    /// |---------|-----------|
    /// | ASCII   | GS g n    |
    /// | Hex     | 1D 67 n   |
    /// | Decimal | 29 103 n  |
    #[inline]
    pub fn set_module_width(n: u8) -> Vec<u8> {
        vec![GS, b'g', n]
    }

    /// # Select HRI Position (GS H n)
    ///
    /// | Format  | Bytes    |
    /// |---------|----------|
    /// | ASCII   | GS H n   |
    /// | Hex     | 1D 48 n  |
    /// | Decimal | 29 72 n  |
    #[inline]
    pub fn set_hri(position: HriPosition) -> Vec<u8> {
        vec![GS, b'H', position as u8]
    }

    /// # Print CODE39 Barcode (GS k m n data)
    ///
    /// Emits the full selector block followed by the symbol itself:
    /// height, module width, HRI off, then `GS k 0x45 n data`.
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k E n d1...dn |
    /// | Hex     | 1D 6B 45 n d1...dn |
    /// | Decimal | 29 107 69 n d1...dn |
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Encoding`] if `data` is longer than 255 bytes.
    pub fn barcode(data: &[u8]) -> Result<Vec<u8>, UriageError> {
        let len = u8::try_from(data.len()).map_err(|_| {
            UriageError::Encoding(format!(
                "CODE39 payload is {} bytes, maximum is 255",
                data.len()
            ))
        })?;

        let mut out = Vec::with_capacity(13 + data.len());
        out.extend(set_height(BAR_HEIGHT));
        out.extend(set_module_width(MODULE_WIDTH));
        out.extend(set_hri(HriPosition::None));
        out.extend([GS, b'k', SYMBOLOGY, len]);
        out.extend_from_slice(data);
        Ok(out)
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k)
// ============================================================================

/// QR Code command builders
pub mod qr {
    use super::{GS, UriageError};

    /// Cell size used by the setup step
    pub const DEFAULT_CELL_SIZE: u8 = 0x05;

    /// Symbol type byte (`cn`) shared by every QR function
    const CN: u8 = b'1';

    /// Bytes of `cn fn m` counted by the store command's length field
    const STORE_HEADER_LEN: usize = 3;

    /// # Set QR Cell Size (GS ( k 3 0 1 C n)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | Hex     | 1D 28 6B 03 00 31 43 n |
    #[inline]
    pub fn set_cell_size(n: u8) -> Vec<u8> {
        vec![GS, b'(', b'k', 3, 0, CN, b'C', n]
    }

    /// # Store QR Data (GS ( k pL pH 1 P 0 data)
    ///
    /// The length field counts the payload plus the three header bytes
    /// `31 50 30`, little-endian. Only `pL` is used; `pH` is always zero.
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | Hex     | 1D 28 6B pL 00 31 50 30 d1...dk |
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Encoding`] if `data.len() + 3` exceeds 255.
    pub fn store(data: &[u8]) -> Result<Vec<u8>, UriageError> {
        let p_l = u8::try_from(data.len() + STORE_HEADER_LEN).map_err(|_| {
            UriageError::Encoding(format!(
                "QR payload is {} bytes, maximum is {}",
                data.len(),
                255 - STORE_HEADER_LEN
            ))
        })?;

        let mut out = Vec::with_capacity(8 + data.len());
        out.extend([GS, b'(', b'k', p_l, 0, CN, b'P', b'0']);
        out.extend_from_slice(data);
        Ok(out)
    }

    /// # Print Stored QR Symbol (GS ( k 3 0 1 Q 0)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | Hex     | 1D 28 6B 03 00 31 51 30 |
    #[inline]
    pub fn print() -> Vec<u8> {
        vec![GS, b'(', b'k', 3, 0, CN, b'Q', b'0']
    }
}

// ============================================================================
// TESTS
// ============================================================================
