// libfeig/src/protocol/responses/inventory.rs

use crate::protocol::parser;
use crate::types::Transponder;
use crate::Result;

const RECORD_LEN: usize = 1 + 1 + 8;

/// Decode Inventory response data.
/// Layout: count(1) + count * (tr_type(1) + dsfid(1) + uid(8))
pub fn decode_inventory(data: &[u8]) -> Result<Vec<Transponder>> {
    let count = parser::byte_at(data, 0)? as usize;
    parser::ensure_len(data, 1 + count * RECORD_LEN)?;

    (0..count)
        .map(|i| -> Result<Transponder> {
            let record = parser::slice_at(data, 1 + i * RECORD_LEN, RECORD_LEN)?;
            let mut uid = [0u8; 8];
            uid.copy_from_slice(&record[2..]);
            Ok(Transponder {
                transponder_type: record[0],
                dsfid: record[1],
                uid,
            })
        })
        .collect()
}
