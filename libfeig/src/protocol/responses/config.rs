// libfeig/src/protocol/responses/config.rs

use crate::constants::CONFIG_BLOCK_LEN;
use crate::protocol::parser;
use crate::types::ConfigBlock;
use crate::Result;

/// Decode ReadConfiguration response data: one 14-byte CFG-REC.
pub fn decode_read_configuration(data: &[u8]) -> Result<ConfigBlock> {
    let record = parser::slice_at(data, 0, CONFIG_BLOCK_LEN)?;
    ConfigBlock::try_from(record)
}
