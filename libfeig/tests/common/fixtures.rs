// fixtures.rs: commonly used test frames

use libfeig::test_support::response_frame;
use libfeig::{CommandCode, Protocol, Request, Status};

/// GetSoftwareVersion data: revision 3.03, dev 0, hw 0x44, sw 0x53,
/// transponder mask 0x0D30.
pub fn software_version_data() -> Vec<u8> {
    hex::decode("03030044530d30").unwrap()
}

/// Standard-framed GetSoftwareVersion response, CRC 0x0933.
pub fn software_version_standard() -> Vec<u8> {
    hex::decode("0d00650003030044530d303309").unwrap()
}

/// Advanced-framed GetSoftwareVersion response, CRC 0x6974.
pub fn software_version_advanced() -> Vec<u8> {
    hex::decode("02000f00650003030044530d307469").unwrap()
}

/// ResetCPU request for the broadcast address.
pub fn reset_cpu_request() -> Request {
    Request::new(0xFF, CommandCode::RESET_CPU, Vec::new())
}

pub fn ok_frame(protocol: Protocol, command: CommandCode) -> Vec<u8> {
    response_frame(protocol, 0x00, command, Status::OK, &[])
}

/// Inventory data with one ISO 15693 transponder.
pub fn inventory_data_one() -> Vec<u8> {
    hex::decode("010300e004010012345678").unwrap()
}

/// Fourteen bytes 0x01..=0x0E.
pub fn config_block_bytes() -> [u8; 14] {
    let mut block = [0u8; 14];
    for (i, b) in block.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    block
}
