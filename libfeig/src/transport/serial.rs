// libfeig/src/transport/serial.rs

#![cfg(feature = "serial")]

//! Serial port transport built on `tokio-serial`.
//!
//! `open` spawns a read task that forwards every chunk read from the port to
//! the receive callback. `close` (or dropping the transport) cancels it.

use async_trait::async_trait;
use log::{debug, info, trace, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::task::JoinHandle;
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tokio_util::sync::CancellationToken;

use crate::constants::SERIAL_READ_CHUNK;
use crate::settings::{DataBits, Parity, SerialSettings, StopBits};
use crate::transport::traits::{DataReceived, Transport};
use crate::utils::HexDump;
use crate::{Error, Result};

impl From<DataBits> for tokio_serial::DataBits {
    fn from(bits: DataBits) -> Self {
        match bits {
            DataBits::Seven => tokio_serial::DataBits::Seven,
            DataBits::Eight => tokio_serial::DataBits::Eight,
        }
    }
}

impl From<Parity> for tokio_serial::Parity {
    fn from(parity: Parity) -> Self {
        match parity {
            Parity::None => tokio_serial::Parity::None,
            Parity::Odd => tokio_serial::Parity::Odd,
            Parity::Even => tokio_serial::Parity::Even,
        }
    }
}

impl From<StopBits> for tokio_serial::StopBits {
    fn from(bits: StopBits) -> Self {
        match bits {
            StopBits::One => tokio_serial::StopBits::One,
            StopBits::Two => tokio_serial::StopBits::Two,
        }
    }
}

struct OpenPort {
    writer: WriteHalf<SerialStream>,
    reader_task: JoinHandle<()>,
    stop: CancellationToken,
}

pub struct SerialTransport {
    settings: SerialSettings,
    port: Option<OpenPort>,
}

impl SerialTransport {
    /// The port is not touched until [`Transport::open`].
    pub fn new(settings: SerialSettings) -> Self {
        Self {
            settings,
            port: None,
        }
    }

    pub fn settings(&self) -> &SerialSettings {
        &self.settings
    }
}

async fn read_loop(
    port_name: String,
    mut reader: ReadHalf<SerialStream>,
    on_data: DataReceived,
    stop: CancellationToken,
) {
    let mut buf = [0u8; SERIAL_READ_CHUNK];
    loop {
        tokio::select! {
            _ = stop.cancelled() => break,
            read = reader.read(&mut buf) => match read {
                Ok(0) => {
                    debug!("{}: end of stream", port_name);
                    break;
                }
                Ok(n) => {
                    trace!("{}: rx {}", port_name, HexDump(&buf[..n]));
                    on_data(&buf[..n]);
                }
                Err(e) => {
                    warn!("{}: read failed: {}", port_name, e);
                    break;
                }
            }
        }
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn open(&mut self, on_data: DataReceived) -> Result<()> {
        if self.port.is_some() {
            return Ok(());
        }

        let s = &self.settings;
        let stream = tokio_serial::new(&s.port, s.baud_rate)
            .data_bits(s.data_bits.into())
            .parity(s.parity.into())
            .stop_bits(s.stop_bits.into())
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| {
                warn!("failed to open serial port {}: {}", s.port, e);
                Error::Transport(format!("failed to open serial port {}: {}", s.port, e))
            })?;

        let (reader, writer) = tokio::io::split(stream);
        let stop = CancellationToken::new();
        let reader_task = tokio::spawn(read_loop(
            s.port.clone(),
            reader,
            on_data,
            stop.clone(),
        ));

        info!("serial port {} opened at {} baud", s.port, s.baud_rate);
        self.port = Some(OpenPort {
            writer,
            reader_task,
            stop,
        });
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            port.stop.cancel();
            if let Err(e) = port.writer.flush().await {
                warn!("{}: flush before close failed: {}", self.settings.port, e);
            }
            if let Err(e) = port.reader_task.await {
                warn!("{}: read task ended abnormally: {}", self.settings.port, e);
            }
            info!("serial port {} closed", self.settings.port);
        }
        Ok(())
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;
        trace!("{}: tx {}", self.settings.port, HexDump(data));
        port.writer.write_all(data).await?;
        port.writer.flush().await?;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if let Some(port) = self.port.take() {
            port.stop.cancel();
            port.reader_task.abort();
        }
    }
}
