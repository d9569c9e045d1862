//! Test support helpers intended for use by unit and integration tests.
//!
//! These build well-formed response frames and readers wired to a
//! [`MockTransport`] so tests across the crate and the tests/ directory
//! share the same setup.
#![allow(dead_code)]

use crate::protocol::encode_frame;
use crate::reader::Reader;
use crate::settings::ReaderSettings;
use crate::transport::MockTransport;
use crate::types::{CommandCode, Protocol, Status};

/// Encode a response frame the way a reader would send it.
///
/// Panics if `data` does not fit the framing; test inputs are expected to.
#[doc(hidden)]
pub fn response_frame(
    protocol: Protocol,
    address: u8,
    command: CommandCode,
    status: Status,
    data: &[u8],
) -> Vec<u8> {
    let mut body = vec![address, command.as_u8(), status.as_u8()];
    body.extend_from_slice(data);
    match encode_frame(protocol, &body) {
        Ok(frame) => frame,
        Err(e) => panic!("test response does not fit the frame: {e}"),
    }
}

/// Build and open a reader on a fresh `MockTransport`, returning a clone
/// of the mock so the caller can script replies.
#[doc(hidden)]
pub async fn mock_reader(settings: ReaderSettings) -> (Reader<MockTransport>, MockTransport) {
    let mock = MockTransport::new();
    let reader = Reader::new(mock.clone(), &settings);
    if let Err(e) = reader.open().await {
        panic!("mock transport failed to open: {e}");
    }
    (reader, mock)
}

/// Push a sequence of replies, one per expected `send`.
#[doc(hidden)]
pub fn seed_replies(mock: &MockTransport, frames: Vec<Vec<u8>>) {
    for frame in frames {
        mock.push_reply(frame);
    }
}
