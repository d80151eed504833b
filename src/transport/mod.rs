//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! ## Available Transports
//!
//! - [`network`]: Raw TCP (port 9100) for network receipt printers
//!
//! Transports only move bytes. The full transcript is built in memory
//! before any of them is opened.

pub mod network;

pub use network::{NetworkTransport, send};
