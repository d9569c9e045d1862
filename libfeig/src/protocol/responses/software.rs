// libfeig/src/protocol/responses/software.rs

use crate::protocol::parser;
use crate::types::SoftwareInfo;
use crate::Result;

/// Decode GetSoftwareVersion response data.
/// Layout: sw_rev(2, BE) + d_rev(1) + hw_type(1) + sw_type(1) + tr_type(2, BE)
pub fn decode_software_version(data: &[u8]) -> Result<SoftwareInfo> {
    const MIN_LEN: usize = 2 + 1 + 1 + 1 + 2; // 7
    parser::ensure_len(data, MIN_LEN)?;

    Ok(SoftwareInfo {
        revision: parser::be_u16_at(data, 0)?,
        development_revision: parser::byte_at(data, 2)?,
        hardware_type: parser::byte_at(data, 3)?,
        software_type: parser::byte_at(data, 4)?,
        transponder_types: parser::be_u16_at(data, 5)?,
    })
}
