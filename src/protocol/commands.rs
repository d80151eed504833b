//! # ESC/POS Control Commands
//!
//! This module implements the printer-control part of the ESC/POS command
//! set: session reset, line spacing, absolute positioning and the cutter.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC 3 n`, `ESC $ nL nH`, `GS V m n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for barcodes, 2D symbols and the cutter.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// FS (File Separator) - Kanji and stored-image command prefix
///
/// - Hex: 0x1C, Decimal: 28
pub const FS: u8 = 0x1C;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// Line spacing issued once at the start of every session (40 motion units).
pub const SESSION_LINE_SPACING: u8 = 0x28;

/// Lines fed before cutting so the last printed row clears the blade.
pub const CUT_FEED_LINES: u8 = 4;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Every receipt stream
/// starts with this command.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use uriage::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line feed amount to `n` motion units.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
/// | Decimal | 27 51 n  |
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// POSITIONING
// ============================================================================

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves the print position to `dots` from the start of the line. Text
/// that follows on the same line starts at this column.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC $ nL nH    |
/// | Hex     | 1B 24 nL nH    |
/// | Decimal | 27 36 nL nH    |
///
/// ## Example
///
/// ```
/// use uriage::protocol::commands;
///
/// assert_eq!(commands::print_position(190), vec![0x1B, 0x24, 190, 0]);
/// ```
#[inline]
pub fn print_position(dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(dots);
    vec![ESC, b'$', lo, hi]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Full Cut (GS V 0 0)
///
/// Cuts the paper completely at the current position without feeding.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | GS V 0 NUL   |
/// | Hex     | 1D 56 30 00  |
/// | Decimal | 29 86 48 0   |
#[inline]
pub fn full_cut() -> Vec<u8> {
    vec![GS, b'V', b'0', 0]
}

/// # Feed Past the Cutter, Then Full Cut
///
/// Feeds [`CUT_FEED_LINES`] lines so the trailing margin clears the blade,
/// then performs a full cut. This is what ends every printed receipt.
///
/// ## Example
///
/// ```
/// use uriage::protocol::commands;
///
/// assert_eq!(
///     commands::cut(),
///     vec![0x1B, 0x64, 0x04, 0x1D, 0x56, 0x30, 0x00]
/// );
/// ```
pub fn cut() -> Vec<u8> {
    let mut out = feed_lines(CUT_FEED_LINES);
    out.extend(full_cut());
    out
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use uriage::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(214), [214, 0x00]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
