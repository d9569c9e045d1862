// libfeig/src/protocol/commands/system.rs

/// ResetCPU (0x63) carries no data.
pub fn encode_reset_cpu() -> Vec<u8> {
    Vec::new()
}

/// ResetRF (0x69) switches the field off and on again; no data.
pub fn encode_reset_rf() -> Vec<u8> {
    Vec::new()
}

/// SwitchRF (0x6A): one byte, 0x01 = field on, 0x00 = field off.
pub fn encode_switch_rf(on: bool) -> Vec<u8> {
    vec![u8::from(on)]
}

/// GetSoftwareVersion (0x65) carries no data.
pub fn encode_get_software_version() -> Vec<u8> {
    Vec::new()
}
