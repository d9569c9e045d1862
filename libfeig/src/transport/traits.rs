// libfeig/src/transport/traits.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// Callback invoked with every chunk of bytes the transport receives.
///
/// Chunks carry no framing guarantee: one frame may arrive split over several
/// calls, or several frames may arrive in one. The callback may run on any
/// thread or task owned by the transport.
pub type DataReceived = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// Byte-stream link to a reader, abstracting the serial port away from the
/// protocol engine.
#[async_trait]
pub trait Transport: Send {
    /// Open the link and start delivering inbound bytes to `on_data`.
    async fn open(&mut self, on_data: DataReceived) -> Result<()>;

    /// Stop delivering data and release the link. Closing an already
    /// closed transport is a no-op.
    async fn close(&mut self) -> Result<()>;

    /// Write all of `data` to the link.
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    fn is_open(&self) -> bool;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn open(&mut self, on_data: DataReceived) -> Result<()> {
        (**self).open(on_data).await
    }

    async fn close(&mut self) -> Result<()> {
        (**self).close().await
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data).await
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}
