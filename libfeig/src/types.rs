// libfeig/src/types.rs

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From};

use crate::constants::{CONFIG_BLOCK_LEN, CONFIG_BLOCK_MAX};
use crate::{Error, Result};

/// Host protocol framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Protocol {
    /// One-byte length field, frames up to 255 bytes.
    #[default]
    #[display(fmt = "standard")]
    Standard,
    /// 0x02 marker followed by a big-endian two-byte length field.
    #[display(fmt = "advanced")]
    Advanced,
}

impl TryFrom<u8> for Protocol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Protocol::Standard),
            1 => Ok(Protocol::Advanced),
            other => Err(Error::UnsupportedOperation(format!(
                "protocol id {other} is not supported"
            ))),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Protocol::Standard),
            "advanced" => Ok(Protocol::Advanced),
            other => Err(Error::UnsupportedOperation(format!(
                "protocol '{other}' is not supported"
            ))),
        }
    }
}

/// Command byte of a request/response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandCode(u8);

impl CommandCode {
    pub const BAUD_RATE_DETECTION: Self = Self(0x52);
    pub const RESET_CPU: Self = Self(0x63);
    pub const GET_SOFTWARE_VERSION: Self = Self(0x65);
    pub const GET_READER_INFO: Self = Self(0x66);
    pub const RESET_RF: Self = Self(0x69);
    pub const SWITCH_RF: Self = Self(0x6A);
    pub const READ_CONFIGURATION: Self = Self(0x80);
    pub const WRITE_CONFIGURATION: Self = Self(0x81);
    pub const SAVE_CONFIGURATION: Self = Self(0x82);
    pub const SET_DEFAULT_CONFIGURATION: Self = Self(0x83);
    pub const ISO_HOST_COMMAND: Self = Self(0xB0);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Mnemonic for known command codes.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::BAUD_RATE_DETECTION => "BaudRateDetection",
            Self::RESET_CPU => "ResetCPU",
            Self::GET_SOFTWARE_VERSION => "GetSoftwareVersion",
            Self::GET_READER_INFO => "GetReaderInfo",
            Self::RESET_RF => "ResetRF",
            Self::SWITCH_RF => "SwitchRF",
            Self::READ_CONFIGURATION => "ReadConfiguration",
            Self::WRITE_CONFIGURATION => "WriteConfiguration",
            Self::SAVE_CONFIGURATION => "SaveConfiguration",
            Self::SET_DEFAULT_CONFIGURATION => "SetDefaultConfiguration",
            Self::ISO_HOST_COMMAND => "ISOHostCommand",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({:#04x})", name, self.0),
            None => write!(f, "command {:#04x}", self.0),
        }
    }
}

/// Status byte reported by the reader in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(u8);

impl Status {
    pub const OK: Self = Self(0x00);
    pub const NO_TRANSPONDER: Self = Self(0x01);
    pub const DATA_FALSE: Self = Self(0x02);
    pub const WRITE_ERROR: Self = Self(0x03);
    pub const ADDRESS_ERROR: Self = Self(0x04);
    pub const WRONG_TRANSPONDER_TYPE: Self = Self(0x05);
    pub const AUTHENTICATION_ERROR: Self = Self(0x08);
    pub const COLLISION: Self = Self(0x0B);
    pub const GENERAL_ERROR: Self = Self(0x0E);
    pub const EEPROM_FAILURE: Self = Self(0x10);
    pub const PARAMETER_RANGE_ERROR: Self = Self(0x11);
    pub const LOGIN_REQUEST: Self = Self(0x13);
    pub const LOGIN_ERROR: Self = Self(0x14);
    pub const READ_PROTECT: Self = Self(0x15);
    pub const WRITE_PROTECT: Self = Self(0x16);
    pub const UNKNOWN_COMMAND: Self = Self(0x80);
    pub const LENGTH_ERROR: Self = Self(0x81);
    pub const COMMAND_NOT_AVAILABLE: Self = Self(0x82);
    pub const RF_COMMUNICATION_ERROR: Self = Self(0x83);
    pub const RF_WARNING: Self = Self(0x84);
    pub const NO_VALID_DATA: Self = Self(0x92);
    pub const DATA_BUFFER_OVERFLOW: Self = Self(0x93);
    pub const MORE_DATA: Self = Self(0x94);
    pub const ISO15693_ERROR: Self = Self(0x95);
    pub const ISO14443_ERROR: Self = Self(0x96);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::OK => "OK",
            Self::NO_TRANSPONDER => "NoTransponder",
            Self::DATA_FALSE => "DataFalse",
            Self::WRITE_ERROR => "WriteError",
            Self::ADDRESS_ERROR => "AddressError",
            Self::WRONG_TRANSPONDER_TYPE => "WrongTransponderType",
            Self::AUTHENTICATION_ERROR => "AuthenticationError",
            Self::COLLISION => "Collision",
            Self::GENERAL_ERROR => "GeneralError",
            Self::EEPROM_FAILURE => "EepromFailure",
            Self::PARAMETER_RANGE_ERROR => "ParameterRangeError",
            Self::LOGIN_REQUEST => "LoginRequest",
            Self::LOGIN_ERROR => "LoginError",
            Self::READ_PROTECT => "ReadProtect",
            Self::WRITE_PROTECT => "WriteProtect",
            Self::UNKNOWN_COMMAND => "UnknownCommand",
            Self::LENGTH_ERROR => "LengthError",
            Self::COMMAND_NOT_AVAILABLE => "CommandNotAvailable",
            Self::RF_COMMUNICATION_ERROR => "RfCommunicationError",
            Self::RF_WARNING => "RfWarning",
            Self::NO_VALID_DATA => "NoValidData",
            Self::DATA_BUFFER_OVERFLOW => "DataBufferOverflow",
            Self::MORE_DATA => "MoreData",
            Self::ISO15693_ERROR => "Iso15693Error",
            Self::ISO14443_ERROR => "Iso14443Error",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({:#04x})", name, self.0),
            None => write!(f, "status {:#04x}", self.0),
        }
    }
}

/// Memory holding a configuration block.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigLocation {
    #[display(fmt = "RAM")]
    Ram = 0,
    #[display(fmt = "EEPROM")]
    Eeprom = 1,
}

/// CFG-ADR byte: block number in bits 0..5, location in bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigAddress {
    block: u8,
    location: ConfigLocation,
}

impl ConfigAddress {
    const LOCATION_BIT: u8 = 0x80;
    const MODE_ALL_BIT: u8 = 0x40;

    /// Fails for block numbers above 63.
    pub fn new(block: u8, location: ConfigLocation) -> Result<Self> {
        if block > CONFIG_BLOCK_MAX {
            return Err(Error::InvalidParameter(format!(
                "configuration block {block} out of range 0..={CONFIG_BLOCK_MAX}"
            )));
        }
        Ok(Self { block, location })
    }

    pub fn block(&self) -> u8 {
        self.block
    }

    pub fn location(&self) -> ConfigLocation {
        self.location
    }

    pub fn encode(&self) -> u8 {
        let loc = match self.location {
            ConfigLocation::Ram => 0,
            ConfigLocation::Eeprom => Self::LOCATION_BIT,
        };
        loc | self.block
    }

    /// Encoding that addresses every block in the location at once, used
    /// by save and set-default.
    pub fn encode_all(&self) -> u8 {
        self.encode() | Self::MODE_ALL_BIT
    }
}

/// One 14-byte configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBlock([u8; CONFIG_BLOCK_LEN]);

impl ConfigBlock {
    pub fn from_bytes(bytes: [u8; CONFIG_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; CONFIG_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for ConfigBlock {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; CONFIG_BLOCK_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: CONFIG_BLOCK_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Firmware identification returned by GetSoftwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareInfo {
    /// Firmware revision, e.g. 0x0303 for 3.03.
    pub revision: u16,
    pub development_revision: u8,
    pub hardware_type: u8,
    pub software_type: u8,
    /// Bit mask of supported transponder families.
    pub transponder_types: u16,
}

impl SoftwareInfo {
    pub fn major(&self) -> u8 {
        (self.revision >> 8) as u8
    }

    pub fn minor(&self) -> u8 {
        (self.revision & 0xFF) as u8
    }
}

/// A transponder found by an inventory scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transponder {
    pub transponder_type: u8,
    pub dsfid: u8,
    pub uid: [u8; 8],
}

impl Transponder {
    pub fn uid_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.uid)
    }
}
