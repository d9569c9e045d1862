// libfeig/src/protocol/commands/config.rs

use crate::types::{ConfigAddress, ConfigBlock};

/// ReadConfiguration (0x80): CFG-ADR only.
pub fn encode_read_configuration(address: ConfigAddress) -> Vec<u8> {
    vec![address.encode()]
}

/// WriteConfiguration (0x81): CFG-ADR followed by the 14-byte record.
pub fn encode_write_configuration(address: ConfigAddress, block: &ConfigBlock) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + block.as_bytes().len());
    buf.push(address.encode());
    buf.extend_from_slice(block.as_bytes());
    buf
}

/// SaveConfiguration (0x82): copies RAM blocks to EEPROM. `all` saves every
/// block instead of the addressed one.
pub fn encode_save_configuration(address: ConfigAddress, all: bool) -> Vec<u8> {
    vec![if all {
        address.encode_all()
    } else {
        address.encode()
    }]
}

/// SetDefaultConfiguration (0x83): restores factory values.
pub fn encode_set_default_configuration(address: ConfigAddress, all: bool) -> Vec<u8> {
    encode_save_configuration(address, all)
}
