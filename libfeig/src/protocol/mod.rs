// libfeig/src/protocol/mod.rs

pub mod commands;
pub mod crc;
pub mod frame;
pub mod parser;
pub mod request;
pub mod response;
pub mod responses;

pub use commands::Command;
pub use crc::{crc16, Crc, CrcParameters, InitMode};
pub use frame::{encode_frame, try_parse, ParseOutcome};
pub use request::Request;
pub use response::Response;
