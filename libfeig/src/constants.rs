// libfeig/src/constants.rs
//! Wire constants shared by the frame codec, the transfer engine and the
//! reader facade.

/// First byte of every advanced protocol frame.
pub const ADVANCED_FRAME_MARKER: u8 = 0x02;

/// Standard request frame: [Len] [Addr] [Cmd] [CRC(2)]
pub const STANDARD_REQUEST_OVERHEAD: usize = 5;

/// Advanced request frame: [0x02] [LenHi] [LenLo] [Addr] [Cmd] [CRC(2)]
pub const ADVANCED_REQUEST_OVERHEAD: usize = 7;

/// Smallest standard response frame: length, address, command, status, CRC.
pub const STANDARD_MIN_FRAME_LEN: usize = 6;

/// Smallest advanced response frame: marker, length(2), address, command,
/// status, CRC.
pub const ADVANCED_MIN_FRAME_LEN: usize = 8;

/// Number of trailing CRC bytes in both framings.
pub const CRC_LEN: usize = 2;

/// Largest standard frame; the length field is a single byte.
pub const STANDARD_MAX_FRAME_LEN: usize = u8::MAX as usize;

/// Largest advanced frame; the length field is a big-endian u16.
pub const ADVANCED_MAX_FRAME_LEN: usize = u16::MAX as usize;

/// Broadcast bus address accepted by every reader.
pub const BROADCAST_ADDRESS: u8 = 0xFF;

/// Size of one configuration block (CFG-REC) in bytes.
pub const CONFIG_BLOCK_LEN: usize = 14;

/// Highest addressable configuration block.
pub const CONFIG_BLOCK_MAX: u8 = 63;

/// ISO host command sub-code for an inventory scan.
pub const ISO_HOST_INVENTORY: u8 = 0x01;

/// Size of a serial read chunk in the serial transport.
pub const SERIAL_READ_CHUNK: usize = 256;
