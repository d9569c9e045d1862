// libfeig/src/protocol/frame.rs

use crate::constants::{
    ADVANCED_FRAME_MARKER, ADVANCED_MAX_FRAME_LEN, ADVANCED_MIN_FRAME_LEN, CRC_LEN,
    STANDARD_MAX_FRAME_LEN, STANDARD_MIN_FRAME_LEN,
};
use crate::protocol::crc::crc16;
use crate::protocol::parser;
use crate::protocol::response::Response;
use crate::types::{CommandCode, Protocol, Status};
use crate::{Error, Result};

/// Result of one parse attempt over the accumulated receive buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A complete frame with a matching CRC.
    Success(Response),
    /// The buffer does not yet hold a complete frame.
    MoreDataNeeded,
    /// A complete frame whose CRC does not match. The decoded fields are
    /// kept for diagnostics; `Response::crc` holds the recomputed value.
    ChecksumError(Response),
    /// The buffer cannot start a valid frame (bad marker or impossible length).
    FrameError,
}

impl ParseOutcome {
    /// Anything other than `MoreDataNeeded` ends a transfer.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ParseOutcome::MoreDataNeeded)
    }
}

/// Wrap `body` (address, command, optional status, data) into a complete
/// frame for `protocol`.
///
/// Standard: `[Len] [body..] [CRC lo] [CRC hi]`
/// Advanced: `[0x02] [Len hi] [Len lo] [body..] [CRC lo] [CRC hi]`
///
/// The length field counts the whole frame. The CRC covers every byte
/// before it and is always little-endian.
pub fn encode_frame(protocol: Protocol, body: &[u8]) -> Result<Vec<u8>> {
    let (header_len, max_len) = match protocol {
        Protocol::Standard => (1, STANDARD_MAX_FRAME_LEN),
        Protocol::Advanced => (3, ADVANCED_MAX_FRAME_LEN),
    };

    let total = header_len + body.len() + CRC_LEN;
    if total > max_len {
        return Err(Error::InvalidLength {
            expected: max_len,
            actual: total,
        });
    }

    let mut out = Vec::with_capacity(total);
    match protocol {
        Protocol::Standard => out.push(total as u8),
        Protocol::Advanced => {
            out.push(ADVANCED_FRAME_MARKER);
            out.extend_from_slice(&(total as u16).to_be_bytes());
        }
    }
    out.extend_from_slice(body);
    let crc = crc16(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    Ok(out)
}

/// Try to decode one response frame from the start of `buffer`.
///
/// `buffer` is the whole receive buffer accumulated so far; it is never
/// modified, and bytes beyond the first frame are ignored.
pub fn try_parse(buffer: &[u8], protocol: Protocol) -> ParseOutcome {
    match protocol {
        Protocol::Standard => try_parse_standard(buffer),
        Protocol::Advanced => try_parse_advanced(buffer),
    }
}

fn try_parse_standard(buffer: &[u8]) -> ParseOutcome {
    if buffer.len() < STANDARD_MIN_FRAME_LEN {
        return ParseOutcome::MoreDataNeeded;
    }

    let frame_len = buffer[0] as usize;
    if frame_len < STANDARD_MIN_FRAME_LEN {
        return ParseOutcome::FrameError;
    }
    if buffer.len() < frame_len {
        return ParseOutcome::MoreDataNeeded;
    }

    decode_frame(&buffer[..frame_len], 1)
}

fn try_parse_advanced(buffer: &[u8]) -> ParseOutcome {
    if buffer.len() < ADVANCED_MIN_FRAME_LEN {
        return ParseOutcome::MoreDataNeeded;
    }
    if buffer[0] != ADVANCED_FRAME_MARKER {
        return ParseOutcome::FrameError;
    }

    let frame_len = match parser::be_u16_at(buffer, 1) {
        Ok(len) => len as usize,
        Err(_) => return ParseOutcome::MoreDataNeeded,
    };
    if frame_len < ADVANCED_MIN_FRAME_LEN {
        return ParseOutcome::FrameError;
    }
    if buffer.len() < frame_len {
        return ParseOutcome::MoreDataNeeded;
    }

    decode_frame(&buffer[..frame_len], 3)
}

/// Decode a complete frame whose length has already been validated.
/// `header_len` is the number of bytes before the address byte.
fn decode_frame(frame: &[u8], header_len: usize) -> ParseOutcome {
    match read_frame(frame, header_len) {
        Ok((response, wire_crc)) if response.crc == wire_crc => ParseOutcome::Success(response),
        Ok((response, _)) => ParseOutcome::ChecksumError(response),
        Err(_) => ParseOutcome::FrameError,
    }
}

/// Split `frame` into its fields and the CRC found on the wire.
fn read_frame(frame: &[u8], header_len: usize) -> Result<(Response, u16)> {
    parser::ensure_len(frame, header_len + 3 + CRC_LEN)?;
    let crc_offset = frame.len() - CRC_LEN;
    let data_offset = header_len + 3;

    let response = Response {
        frame_length: frame.len(),
        address: parser::byte_at(frame, header_len)?,
        command: CommandCode::new(parser::byte_at(frame, header_len + 1)?),
        status: Status::new(parser::byte_at(frame, header_len + 2)?),
        data: parser::slice_at(frame, data_offset, crc_offset - data_offset)?.to_vec(),
        crc: crc16(&frame[..crc_offset]),
    };
    let wire_crc = parser::le_u16_at(frame, crc_offset)?;
    Ok((response, wire_crc))
}
