// libfeig/src/protocol/responses/mod.rs

//! Decoders for the data field of convenience-command responses. Framing,
//! CRC and status checks happen before these run.

pub mod config;
pub mod inventory;
pub mod software;

pub use config::decode_read_configuration;
pub use inventory::decode_inventory;
pub use software::decode_software_version;
