//! # Printer Configuration
//!
//! Where a receipt goes and which code page it is encoded in.
//!
//! ## Usage
//!
//! ```
//! use uriage::printer::PrinterConfig;
//!
//! let config = PrinterConfig::new("192.168.1.50");
//! assert_eq!(config.addr(), "192.168.1.50:9100");
//! assert_eq!(config.text_encoding().unwrap().name(), "Shift_JIS");
//! ```
//!
//! Configs can also be loaded from JSON; `port` and `encoding` are
//! optional:
//!
//! ```json
//! { "host": "192.168.1.50", "port": 9100, "encoding": "Shift_JIS" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;
use crate::error::UriageError;
use crate::transport::network::DEFAULT_PORT;

/// Default code page label
pub const DEFAULT_ENCODING: &str = "Shift_JIS";

/// # Printer Configuration
///
/// - **host**: Printer hostname or IP address
/// - **port**: Raw printing port (9100 unless the device is reconfigured)
/// - **encoding**: Label of the code page the device is set to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

impl PrinterConfig {
    /// Config for `host` with the default port and encoding.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            encoding: default_encoding(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Load a config from a JSON file.
    ///
    /// ## Errors
    ///
    /// I/O and JSON errors, or [`UriageError::Config`] if the result does
    /// not validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UriageError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the host is set and the encoding label resolves.
    pub fn validate(&self) -> Result<(), UriageError> {
        if self.host.trim().is_empty() {
            return Err(UriageError::Config("printer host is empty".to_string()));
        }
        if self.port == 0 {
            return Err(UriageError::Config("printer port must be non-zero".to_string()));
        }
        self.text_encoding()?;
        Ok(())
    }

    /// `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the configured encoding label.
    pub fn text_encoding(&self) -> Result<TextEncoding, UriageError> {
        TextEncoding::for_label(&self.encoding)
    }
}
