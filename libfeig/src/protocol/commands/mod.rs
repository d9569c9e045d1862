// libfeig/src/protocol/commands/mod.rs

pub mod config;
pub mod inventory;
pub mod system;

pub use config::{
    encode_read_configuration, encode_save_configuration, encode_set_default_configuration,
    encode_write_configuration,
};
pub use inventory::encode_inventory;
pub use system::{encode_get_software_version, encode_reset_cpu, encode_reset_rf, encode_switch_rf};

use crate::protocol::Request;
use crate::types::{CommandCode, ConfigAddress, ConfigBlock};

/// High-level commands the reader facade offers as convenience methods.
/// Each variant's data encoder lives in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ResetCpu,
    ResetRf,
    SwitchRf { on: bool },
    GetSoftwareVersion,
    ReadConfiguration { address: ConfigAddress },
    WriteConfiguration { address: ConfigAddress, block: ConfigBlock },
    SaveConfiguration { address: ConfigAddress, all: bool },
    SetDefaultConfiguration { address: ConfigAddress, all: bool },
    Inventory,
}

impl Command {
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::ResetCpu => CommandCode::RESET_CPU,
            Self::ResetRf => CommandCode::RESET_RF,
            Self::SwitchRf { .. } => CommandCode::SWITCH_RF,
            Self::GetSoftwareVersion => CommandCode::GET_SOFTWARE_VERSION,
            Self::ReadConfiguration { .. } => CommandCode::READ_CONFIGURATION,
            Self::WriteConfiguration { .. } => CommandCode::WRITE_CONFIGURATION,
            Self::SaveConfiguration { .. } => CommandCode::SAVE_CONFIGURATION,
            Self::SetDefaultConfiguration { .. } => CommandCode::SET_DEFAULT_CONFIGURATION,
            Self::Inventory => CommandCode::ISO_HOST_COMMAND,
        }
    }

    /// Encode the request data (everything between command byte and CRC).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ResetCpu => encode_reset_cpu(),
            Self::ResetRf => encode_reset_rf(),
            Self::SwitchRf { on } => encode_switch_rf(*on),
            Self::GetSoftwareVersion => encode_get_software_version(),
            Self::ReadConfiguration { address } => encode_read_configuration(*address),
            Self::WriteConfiguration { address, block } => {
                encode_write_configuration(*address, block)
            }
            Self::SaveConfiguration { address, all } => encode_save_configuration(*address, *all),
            Self::SetDefaultConfiguration { address, all } => {
                encode_set_default_configuration(*address, *all)
            }
            Self::Inventory => encode_inventory(),
        }
    }

    /// Build the request for the reader at bus address `address`.
    pub fn to_request(&self, address: u8) -> Request {
        Request::new(address, self.command_code(), self.encode())
    }
}
