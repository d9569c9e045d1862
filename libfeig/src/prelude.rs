// libfeig/src/prelude.rs

pub use crate::protocol::{Command, ParseOutcome, Request, Response};
pub use crate::reader::{Reader, ReaderBuilder, TransferOptions};
pub use crate::settings::{DataBits, Parity, ReaderSettings, SerialSettings, StopBits};
pub use crate::transfer::TransferResult;
#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    CommandCode, ConfigAddress, ConfigBlock, ConfigLocation, Error, Protocol, Result,
    SoftwareInfo, Status, Transponder,
};

pub use tokio_util::sync::CancellationToken;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_timeout, ms, parse_hex};
