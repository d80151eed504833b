//! # Command Encoder
//!
//! Protocol-aware writer on top of [`CommandBuffer`]. Each method appends
//! the bytes for one printer intent (align, bold text, barcode, cut, ...)
//! using the builders in [`crate::protocol`], and encodes text through the
//! session's [`TextEncoding`].
//!
//! The encoder never reads anything back from the device and does not
//! mirror device state such as the current alignment. It only emits the
//! bytes expected to produce each effect.
//!
//! ## Example
//!
//! ```
//! use uriage::encoder::CommandEncoder;
//! use uriage::encoding::TextEncoding;
//! use uriage::protocol::text::Alignment;
//!
//! let mut enc = CommandEncoder::new(TextEncoding::shift_jis());
//! enc.set_gravity(Alignment::Center);
//! enc.write_text_bold("THANK YOU")?;
//! enc.new_line();
//! enc.cut();
//!
//! let bytes = enc.build();
//! assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x33, 0x28]);
//! # Ok::<(), uriage::UriageError>(())
//! ```

use crate::buffer::CommandBuffer;
use crate::encoding::TextEncoding;
use crate::error::UriageError;
use crate::protocol::barcode::{code39, qr};
use crate::protocol::commands::{self, LF, SESSION_LINE_SPACING};
use crate::protocol::text::{self, Alignment};

/// Glyph repeated to draw a horizontal rule.
pub const RULE_GLYPH: char = '-';

/// Width of a horizontal rule in display cells.
pub const RULE_WIDTH: usize = 24;

/// One encoder session: one buffer, one encoding.
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    buffer: CommandBuffer,
    encoding: TextEncoding,
}

impl CommandEncoder {
    /// Start a session. Emits the device reset and line spacing setup.
    pub fn new(encoding: TextEncoding) -> Self {
        let mut buffer = CommandBuffer::with_capacity(512);
        buffer.append(&commands::init());
        buffer.append(&commands::line_spacing(SESSION_LINE_SPACING));
        Self { buffer, encoding }
    }

    /// Snapshot of every byte emitted so far.
    pub fn build(&self) -> Vec<u8> {
        self.buffer.snapshot()
    }

    /// Finish the session and take its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    // ========================================================================
    // RULES AND SYMBOLS
    // ========================================================================

    /// Horizontal rule of [`RULE_WIDTH`] cells, then a line feed.
    pub fn draw_line(&mut self) -> Result<(), UriageError> {
        let rule: String = std::iter::repeat_n(RULE_GLYPH, RULE_WIDTH).collect();
        self.write_text_line(&rule)
    }

    /// CODE39 barcode of `payload`, then its inner text as a plain line.
    ///
    /// The printed line drops the first and last character of `payload`
    /// (the start/stop framing characters); the device's own HRI is off.
    ///
    /// ## Errors
    ///
    /// [`UriageError::Encoding`] if the payload is unmappable or encodes
    /// to more than 255 bytes. Nothing is appended in that case.
    pub fn draw_barcode(&mut self, payload: &str) -> Result<(), UriageError> {
        let data = self.encoding.encode(payload)?;
        let symbol = code39::barcode(&data)?;
        let caption = self.encoding.encode(inner_text(payload))?;

        self.buffer.append(&symbol);
        self.buffer.append(&caption);
        self.new_line();
        Ok(())
    }

    /// QR code of `payload`: cell size, store, print.
    ///
    /// ## Errors
    ///
    /// [`UriageError::Encoding`] if the payload is unmappable or encodes
    /// to more than 252 bytes. Nothing is appended in that case.
    pub fn draw_qr(&mut self, payload: &str) -> Result<(), UriageError> {
        let data = self.encoding.encode(payload)?;
        let store = qr::store(&data)?;

        self.buffer.append(&qr::set_cell_size(qr::DEFAULT_CELL_SIZE));
        self.buffer.append(&store);
        self.buffer.append(&qr::print());
        Ok(())
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    /// Encoded `text`, no terminator.
    pub fn write_text(&mut self, text: &str) -> Result<(), UriageError> {
        let bytes = self.encoding.encode(text)?;
        self.buffer.append(&bytes);
        Ok(())
    }

    /// Encoded `text` followed by a line feed.
    pub fn write_text_line(&mut self, text: &str) -> Result<(), UriageError> {
        self.write_text(text)?;
        self.new_line();
        Ok(())
    }

    /// `text` wrapped in bold on / bold off.
    pub fn write_text_bold(&mut self, text: &str) -> Result<(), UriageError> {
        let bytes = self.encoding.encode(text)?;
        self.buffer.append(&text::bold_on());
        self.buffer.append(&bytes);
        self.buffer.append(&text::bold_off());
        Ok(())
    }

    /// Single line feed.
    #[inline]
    pub fn new_line(&mut self) {
        self.buffer.push(LF);
    }

    // ========================================================================
    // LAYOUT AND PAPER
    // ========================================================================

    /// Select left / center / right justification.
    pub fn set_gravity(&mut self, alignment: Alignment) {
        self.buffer.append(&text::align(alignment));
    }

    /// Move the print position to `dots` from the line start.
    pub fn set_print_position(&mut self, dots: u16) {
        self.buffer.append(&commands::print_position(dots));
    }

    /// Feed past the cutter and cut.
    pub fn cut(&mut self) {
        self.buffer.append(&commands::cut());
    }

    /// Append pre-built command bytes.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buffer.append(bytes);
    }
}

/// `payload` without its first and last character.
fn inner_text(payload: &str) -> &str {
    let mut chars = payload.char_indices();
    let start = match chars.next() {
        Some((_, c)) => c.len_utf8(),
        None => return "",
    };
    match chars.next_back() {
        Some((end, _)) => &payload[start..end],
        None => "",
    }
}
