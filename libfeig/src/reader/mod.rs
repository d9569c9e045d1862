// libfeig/src/reader/mod.rs

//! Reader facade.
//!
//! [`Reader::transfer`] hands back the raw [`TransferResult`];
//! [`Reader::execute`] turns anything but an OK response into an [`Error`](crate::Error).
//! The named commands are thin wrappers around `execute`.

pub mod builder;

pub use builder::ReaderBuilder;

use std::time::Duration;

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::protocol::responses::{
    decode_inventory, decode_read_configuration, decode_software_version,
};
use crate::protocol::{Command, Request, Response};
use crate::settings::ReaderSettings;
use crate::transfer::{Transceiver, TransferResult};
use crate::transport::Transport;
use crate::types::{
    CommandCode, ConfigAddress, ConfigBlock, Protocol, SoftwareInfo, Status, Transponder,
};
use crate::Result;

/// Per-call overrides. Unset fields fall back to the reader settings; a
/// missing token means the transfer can only end by response or timeout.
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    pub protocol: Option<Protocol>,
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

impl TransferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

pub struct Reader<T: Transport> {
    settings: ReaderSettings,
    transceiver: Transceiver<T>,
    // One exchange at a time per reader.
    gate: tokio::sync::Mutex<()>,
}

impl<T: Transport> Reader<T> {
    /// `settings` is copied; later changes to the caller's value have no
    /// effect on this reader.
    pub fn new(transport: T, settings: &ReaderSettings) -> Self {
        Self {
            settings: settings.clone(),
            transceiver: Transceiver::new(transport),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub async fn open(&self) -> Result<()> {
        self.transceiver.open().await
    }

    pub async fn close(&self) -> Result<()> {
        self.transceiver.close().await
    }

    pub async fn is_open(&self) -> bool {
        self.transceiver.is_open().await
    }

    /// Build a request addressed to this reader.
    pub fn request(&self, command: CommandCode, data: Vec<u8>) -> Request {
        Request::new(self.settings.address, command, data)
    }

    /// Send `request` and report the outcome without interpreting it.
    pub async fn transfer(
        &self,
        request: Request,
        options: &TransferOptions,
    ) -> Result<TransferResult> {
        let protocol = options.protocol.unwrap_or(self.settings.protocol);
        let timeout = options.timeout.unwrap_or(self.settings.timeout);
        let never = CancellationToken::new();
        let cancel = options.cancel.as_ref().unwrap_or(&never);

        let _turn = self.gate.lock().await;
        self.transceiver
            .transfer(request, protocol, timeout, cancel)
            .await
    }

    /// Send `request` and return its response, or the error describing why
    /// there is no usable one. A non-OK status byte is an error too.
    pub async fn execute(&self, request: Request, options: &TransferOptions) -> Result<Response> {
        let result = self.transfer(request, options).await?;
        result.into_response().inspect_err(|e| debug!("execute failed: {}", e))
    }

    async fn run(&self, command: Command) -> Result<Response> {
        let request = command.to_request(self.settings.address);
        self.execute(request, &TransferOptions::default()).await
    }

    pub async fn reset_cpu(&self) -> Result<()> {
        self.run(Command::ResetCpu).await.map(|_| ())
    }

    pub async fn reset_rf(&self) -> Result<()> {
        self.run(Command::ResetRf).await.map(|_| ())
    }

    pub async fn switch_rf(&self, on: bool) -> Result<()> {
        self.run(Command::SwitchRf { on }).await.map(|_| ())
    }

    pub async fn get_software_info(&self) -> Result<SoftwareInfo> {
        let response = self.run(Command::GetSoftwareVersion).await?;
        decode_software_version(&response.data)
    }

    pub async fn read_configuration(&self, address: ConfigAddress) -> Result<ConfigBlock> {
        let response = self.run(Command::ReadConfiguration { address }).await?;
        decode_read_configuration(&response.data)
    }

    pub async fn write_configuration(
        &self,
        address: ConfigAddress,
        block: &ConfigBlock,
    ) -> Result<()> {
        self.run(Command::WriteConfiguration {
            address,
            block: *block,
        })
        .await
        .map(|_| ())
    }

    /// Copy RAM configuration to EEPROM. With `all` every block of the
    /// location is saved, otherwise only `address.block()`.
    pub async fn save_configuration(&self, address: ConfigAddress, all: bool) -> Result<()> {
        self.run(Command::SaveConfiguration { address, all })
            .await
            .map(|_| ())
    }

    pub async fn set_default_configuration(
        &self,
        address: ConfigAddress,
        all: bool,
    ) -> Result<()> {
        self.run(Command::SetDefaultConfiguration { address, all })
            .await
            .map(|_| ())
    }

    /// ISO host inventory. An empty field is reported by the reader as
    /// `NoTransponder` and returned here as an empty list.
    pub async fn inventory(&self) -> Result<Vec<Transponder>> {
        match self.run(Command::Inventory).await {
            Ok(response) => decode_inventory(&response.data),
            Err(e) if e.status() == Some(Status::NO_TRANSPONDER) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "serial")]
impl Reader<crate::transport::SerialTransport> {
    /// Reader on the serial port described by `settings.serial`. The port
    /// is opened by [`Reader::open`].
    pub fn serial(settings: &ReaderSettings) -> Self {
        let transport = crate::transport::SerialTransport::new(settings.serial.clone());
        Self::new(transport, settings)
    }
}
