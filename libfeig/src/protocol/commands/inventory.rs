// libfeig/src/protocol/commands/inventory.rs

use crate::constants::ISO_HOST_INVENTORY;

/// Inventory mode byte: plain scan, no antenna selection, no more-data
/// continuation.
const INVENTORY_MODE_NEW: u8 = 0x00;

/// ISO host command (0xB0) with the Inventory sub-command.
/// Layout: sub_command(1) + mode(1)
pub fn encode_inventory() -> Vec<u8> {
    vec![ISO_HOST_INVENTORY, INVENTORY_MODE_NEW]
}
