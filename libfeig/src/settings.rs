// libfeig/src/settings.rs
//! Reader and serial line settings.
//!
//! A [`Reader`](crate::Reader) clones the settings it is created with, so a
//! caller mutating its own copy afterwards never affects an open reader.

use std::time::Duration;

use crate::constants::BROADCAST_ADDRESS;
use crate::types::Protocol;
use crate::utils::default_timeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    None,
    Odd,
    Even,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopBits {
    One,
    Two,
}

/// Serial line parameters.
///
/// Defaults match the reader's factory configuration: 38400 baud, 8 data
/// bits, even parity, 1 stop bit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialSettings {
    pub port: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: 38400,
            data_bits: DataBits::Eight,
            parity: Parity::Even,
            stop_bits: StopBits::One,
        }
    }
}

impl SerialSettings {
    pub fn new(port: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            port: port.into(),
            baud_rate,
            ..Default::default()
        }
    }
}

/// Everything a [`Reader`](crate::Reader) needs besides its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderSettings {
    pub serial: SerialSettings,
    /// Bus address placed in every request.
    pub address: u8,
    /// Framing used when a transfer does not override it.
    pub protocol: Protocol,
    /// Response deadline used when a transfer does not override it.
    pub timeout: Duration,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            serial: SerialSettings::default(),
            address: BROADCAST_ADDRESS,
            protocol: Protocol::Standard,
            timeout: default_timeout(),
        }
    }
}

impl ReaderSettings {
    pub fn with_serial(mut self, serial: SerialSettings) -> Self {
        self.serial = serial;
        self
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
