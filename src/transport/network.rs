//! # Raw TCP Transport
//!
//! Network receipt printers accept command bytes on a plain TCP socket
//! (port 9100 by convention). There is no handshake and no framing, and
//! the device sends nothing back: connect, write, close.
//!
//! ## Example
//!
//! ```no_run
//! use uriage::transport::network;
//! use uriage::protocol::commands;
//!
//! let mut data = commands::init();
//! data.extend(commands::cut());
//!
//! network::send("192.168.1.50", 9100, &data)?;
//! # Ok::<(), uriage::UriageError>(())
//! ```
//!
//! Calls block until the OS accepts the bytes or the connection fails.
//! No timeout is imposed here.

use std::io::Write;
use std::net::{Shutdown, TcpStream};

use tracing::{debug, warn};

use crate::error::UriageError;

/// Conventional raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// # Network Printer Transport
///
/// One open connection to a printer. The connection is shut down when the
/// transport is dropped, whether or not the last write succeeded.
#[derive(Debug)]
pub struct NetworkTransport {
    stream: TcpStream,
    addr: String,
}

impl NetworkTransport {
    /// Open a connection to `host:port`.
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Connection`] if the address does not resolve
    /// or the device refuses the connection.
    pub fn connect(host: &str, port: u16) -> Result<Self, UriageError> {
        let addr = format!("{}:{}", host, port);
        debug!(%addr, "connecting to printer");

        let stream = TcpStream::connect((host, port)).map_err(|source| {
            UriageError::Connection {
                addr: addr.clone(),
                source,
            }
        })?;

        Ok(Self { stream, addr })
    }

    /// The `host:port` this transport is connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Write all of `data` to the printer.
    ///
    /// ## Errors
    ///
    /// Returns [`UriageError::Write`] if the stream fails before every
    /// byte is accepted.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), UriageError> {
        self.stream
            .write_all(data)
            .and_then(|()| self.stream.flush())
            .map_err(|source| UriageError::Write {
                addr: self.addr.clone(),
                source,
            })?;

        debug!(addr = %self.addr, bytes = data.len(), "wrote transcript");
        Ok(())
    }
}

impl Drop for NetworkTransport {
    fn drop(&mut self) {
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            // The peer may already have closed; nothing left to do.
            if e.kind() != std::io::ErrorKind::NotConnected {
                warn!(addr = %self.addr, error = %e, "failed to close printer connection");
            }
        }
        debug!(addr = %self.addr, "closed printer connection");
    }
}

/// Connect to `host:port`, write `data`, close.
///
/// Neither failure is retried.
///
/// ## Errors
///
/// [`UriageError::Connection`] or [`UriageError::Write`].
pub fn send(host: &str, port: u16, data: &[u8]) -> Result<(), UriageError> {
    let mut transport = NetworkTransport::connect(host, port)?;
    transport.write_all(data)
}
