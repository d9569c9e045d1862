// libfeig/src/reader/builder.rs

use crate::reader::Reader;
use crate::settings::ReaderSettings;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a [`Reader`] step by step.
pub struct ReaderBuilder<T: Transport> {
    settings: ReaderSettings,
    transport: Option<T>,
}

impl<T: Transport> Default for ReaderBuilder<T> {
    fn default() -> Self {
        Self {
            settings: ReaderSettings::default(),
            transport: None,
        }
    }
}

impl<T: Transport> ReaderBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: ReaderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Provide the transport (e.g. a `MockTransport` in tests).
    pub fn transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an unopened reader. Fails with `NotConnected` when no
    /// transport was provided.
    pub fn build(self) -> Result<Reader<T>> {
        match self.transport {
            Some(t) => Ok(Reader::new(t, &self.settings)),
            None => Err(Error::NotConnected),
        }
    }
}
