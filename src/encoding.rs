//! # Text Encoding
//!
//! Receipt text has to reach the printer in the code page the device is
//! configured for (Shift_JIS on Japanese models). A [`TextEncoding`] is
//! bound to one encoder for its whole lifetime; every text-emitting
//! command goes through it.
//!
//! Characters the code page cannot represent are an error. Nothing is
//! replaced with `?` or numeric character references.

use encoding_rs::{Encoding, SHIFT_JIS};

use crate::error::UriageError;

/// A character encoding identified by its WHATWG label.
///
/// ## Example
///
/// ```
/// use uriage::encoding::TextEncoding;
///
/// let sjis = TextEncoding::for_label("shift_jis").unwrap();
/// assert_eq!(sjis.encode("円").unwrap(), vec![0x89, 0x7E]);
/// assert!(TextEncoding::for_label("klingon").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::shift_jis()
    }
}

impl TextEncoding {
    /// Shift_JIS, the code page used by Japanese receipt printers.
    pub fn shift_jis() -> Self {
        Self {
            encoding: SHIFT_JIS,
        }
    }

    /// Look up an encoding by label (`"Shift_JIS"`, `"windows-1252"`, ...).
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Encoding`] if the label is unknown or names
    /// an encoding that cannot be produced byte-for-byte (UTF-16, the
    /// replacement encoding).
    pub fn for_label(label: &str) -> Result<Self, UriageError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| UriageError::Encoding(format!("Unknown encoding '{}'", label)))?;

        if encoding.output_encoding() != encoding {
            return Err(UriageError::Encoding(format!(
                "Encoding '{}' cannot be used for output",
                encoding.name()
            )));
        }

        Ok(Self { encoding })
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Encode `text` into the bound code page.
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Encoding`] if any character is unmappable.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, UriageError> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(UriageError::Encoding(format!(
                "'{}' cannot be represented in {}",
                text,
                self.encoding.name()
            )));
        }
        Ok(bytes.into_owned())
    }
}
