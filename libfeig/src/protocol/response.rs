// libfeig/src/protocol/response.rs

use crate::protocol::frame::encode_frame;
use crate::types::{CommandCode, Protocol, Status};
use crate::Result;

/// A decoded response frame.
///
/// `data` is copied out of the receive buffer, so a response stays valid
/// after the buffer is cleared for the next transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Total frame length taken from the length field.
    pub frame_length: usize,
    pub address: u8,
    pub command: CommandCode,
    pub status: Status,
    pub data: Vec<u8>,
    /// CRC recomputed over the received bytes. Equals the wire CRC unless
    /// the frame was reported as a checksum error.
    pub crc: u16,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Encode the response fields back into a wire frame.
    pub fn to_frame(&self, protocol: Protocol) -> Result<Vec<u8>> {
        let mut body = Vec::with_capacity(3 + self.data.len());
        body.push(self.address);
        body.push(self.command.as_u8());
        body.push(self.status.as_u8());
        body.extend_from_slice(&self.data);
        encode_frame(protocol, &body)
    }
}
