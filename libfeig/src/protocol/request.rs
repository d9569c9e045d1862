// libfeig/src/protocol/request.rs

use crate::constants::{ADVANCED_REQUEST_OVERHEAD, STANDARD_REQUEST_OVERHEAD};
use crate::protocol::frame::encode_frame;
use crate::types::{CommandCode, Protocol};
use crate::Result;

/// An outbound command. Immutable once built; the transfer engine hands it
/// back inside every [`TransferResult`](crate::TransferResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub address: u8,
    pub command: CommandCode,
    pub data: Vec<u8>,
}

impl Request {
    pub fn new(address: u8, command: CommandCode, data: Vec<u8>) -> Self {
        Self {
            address,
            command,
            data,
        }
    }

    /// Encode into a wire frame. Fails with `InvalidLength` when the data
    /// does not fit the framing (250 bytes for standard).
    pub fn to_frame(&self, protocol: Protocol) -> Result<Vec<u8>> {
        let mut body = Vec::with_capacity(2 + self.data.len());
        body.push(self.address);
        body.push(self.command.as_u8());
        body.extend_from_slice(&self.data);
        encode_frame(protocol, &body)
    }

    /// Length of the encoded frame in bytes.
    pub fn frame_len(&self, protocol: Protocol) -> usize {
        let overhead = match protocol {
            Protocol::Standard => STANDARD_REQUEST_OVERHEAD,
            Protocol::Advanced => ADVANCED_REQUEST_OVERHEAD,
        };
        overhead + self.data.len()
    }
}
