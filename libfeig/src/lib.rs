// libfeig/src/lib.rs

//! libfeig
//!
//! Async driver for Feig RFID reader modules speaking the standard or
//! advanced framed protocol over a serial line.
//!
//! ```no_run
//! # async fn demo() -> libfeig::Result<()> {
//! use libfeig::prelude::*;
//!
//! let settings = ReaderSettings::default();
//! let reader = Reader::new(MockTransport::new(), &settings);
//! reader.open().await?;
//! let info = reader.get_software_info().await?;
//! println!("firmware {}.{:02}", info.major(), info.minor());
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod settings;
pub mod test_support;
pub mod transfer;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use crate::protocol::{ParseOutcome, Request, Response};
pub use crate::reader::{Reader, ReaderBuilder, TransferOptions};
pub use crate::settings::{ReaderSettings, SerialSettings};
pub use crate::transfer::{Transceiver, TransferResult};
