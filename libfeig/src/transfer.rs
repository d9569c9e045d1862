// libfeig/src/transfer.rs

//! Request/response exchange over a [`Transport`].
//!
//! A [`Transceiver`] owns the transport and a receive buffer. Each
//! [`Transceiver::transfer`] arms the receive path, sends one frame and then
//! races three sources: a terminal parse of the inbound bytes, the timeout
//! and the caller's cancellation token. Whichever is first decides the
//! [`TransferResult`]; the others are dropped with the `select!`.
//!
//! Bytes that arrive while no transfer is armed are discarded, so a late
//! answer to a timed out or canceled request never leaks into the next one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::protocol::{try_parse, ParseOutcome, Request, Response};
use crate::transport::{DataReceived, Transport};
use crate::types::Protocol;
use crate::utils::HexDump;
use crate::{Error, Result};

/// Outcome of one exchange. Every variant carries the request it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferResult {
    Success {
        request: Request,
        response: Response,
    },
    Canceled {
        request: Request,
    },
    Timeout {
        request: Request,
    },
    /// Bytes arrived but did not form a valid frame. `response` is set when
    /// the frame decoded but its CRC did not match, and `None` for framing
    /// errors.
    CommunicationError {
        request: Request,
        response: Option<Response>,
    },
    /// A valid frame for a different command.
    UnexpectedResponse {
        request: Request,
        response: Response,
    },
}

impl TransferResult {
    pub fn request(&self) -> &Request {
        match self {
            TransferResult::Success { request, .. }
            | TransferResult::Canceled { request }
            | TransferResult::Timeout { request }
            | TransferResult::CommunicationError { request, .. }
            | TransferResult::UnexpectedResponse { request, .. } => request,
        }
    }

    pub fn response(&self) -> Option<&Response> {
        match self {
            TransferResult::Success { response, .. }
            | TransferResult::UnexpectedResponse { response, .. } => Some(response),
            TransferResult::CommunicationError { response, .. } => response.as_ref(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransferResult::Success { .. })
    }

    /// Turn the outcome into a response or an error.
    ///
    /// A successful exchange whose status byte is not OK becomes
    /// [`Error::Status`]; every other non-success variant maps to the
    /// error of the same name.
    pub fn into_response(self) -> Result<Response> {
        match self {
            TransferResult::Success { request, response } => {
                if response.is_ok() {
                    Ok(response)
                } else {
                    Err(Error::Status {
                        request: Box::new(request),
                        response: Box::new(response),
                    })
                }
            }
            TransferResult::Canceled { request } => Err(Error::Canceled {
                request: Box::new(request),
            }),
            TransferResult::Timeout { request } => Err(Error::Timeout {
                request: Box::new(request),
            }),
            TransferResult::CommunicationError { request, response } => {
                Err(Error::Communication {
                    request: Box::new(request),
                    response: response.map(Box::new),
                })
            }
            TransferResult::UnexpectedResponse { request, response } => {
                Err(Error::UnexpectedResponse {
                    request: Box::new(request),
                    response: Box::new(response),
                })
            }
        }
    }
}

struct Pending {
    id: u64,
    protocol: Protocol,
    completion: oneshot::Sender<ParseOutcome>,
}

#[derive(Default)]
struct ReceiveState {
    buffer: Vec<u8>,
    pending: Option<Pending>,
    next_id: u64,
}

type SharedState = Arc<Mutex<ReceiveState>>;

fn lock(state: &Mutex<ReceiveState>) -> MutexGuard<'_, ReceiveState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Receive path, called by the transport with every inbound chunk.
fn on_receive(state: &Mutex<ReceiveState>, chunk: &[u8]) {
    let mut state = lock(state);
    let protocol = match &state.pending {
        Some(pending) => pending.protocol,
        None => {
            trace!("dropping {} bytes while idle: {}", chunk.len(), HexDump(chunk));
            return;
        }
    };

    state.buffer.extend_from_slice(chunk);
    trace!("rx {}", HexDump(chunk));
    #[cfg(feature = "diagnostics")]
    trace!(
        "receive buffer ({} bytes): {}",
        state.buffer.len(),
        HexDump(&state.buffer)
    );

    let outcome = try_parse(&state.buffer, protocol);
    if !outcome.is_terminal() {
        return;
    }
    if let Some(pending) = state.pending.take() {
        // The waiting side may already be gone (timeout or cancel won).
        let _ = pending.completion.send(outcome);
    }
}

/// Disarms the receive path when the transfer that armed it ends, however
/// it ends.
struct ArmGuard {
    state: SharedState,
    id: u64,
}

impl Drop for ArmGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        if state.pending.as_ref().map(|p| p.id) == Some(self.id) {
            state.pending = None;
            trace!("transfer {} disarmed", self.id);
        }
    }
}

fn resolve(request: Request, outcome: ParseOutcome) -> TransferResult {
    match outcome {
        ParseOutcome::Success(response) if response.command != request.command => {
            TransferResult::UnexpectedResponse { request, response }
        }
        ParseOutcome::Success(response) => TransferResult::Success { request, response },
        ParseOutcome::ChecksumError(response) => TransferResult::CommunicationError {
            request,
            response: Some(response),
        },
        ParseOutcome::FrameError | ParseOutcome::MoreDataNeeded => {
            TransferResult::CommunicationError {
                request,
                response: None,
            }
        }
    }
}

/// The transfer engine for one transport.
///
/// Only one transfer is expected in flight at a time. A second concurrent
/// `transfer` re-arms the receive path and the first one resolves as
/// [`TransferResult::Canceled`]; [`Reader`](crate::Reader) serializes calls so
/// this never happens through the facade.
pub struct Transceiver<T: Transport> {
    transport: tokio::sync::Mutex<T>,
    state: SharedState,
}

impl<T: Transport> Transceiver<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: tokio::sync::Mutex::new(transport),
            state: SharedState::default(),
        }
    }

    /// Open the transport and hook it to the receive path.
    pub async fn open(&self) -> Result<()> {
        let state = Arc::clone(&self.state);
        let on_data: DataReceived = Arc::new(move |chunk: &[u8]| on_receive(&state, chunk));
        self.transport.lock().await.open(on_data).await
    }

    pub async fn close(&self) -> Result<()> {
        self.transport.lock().await.close().await
    }

    pub async fn is_open(&self) -> bool {
        self.transport.lock().await.is_open()
    }

    /// True while a transfer is waiting for its response.
    pub fn is_armed(&self) -> bool {
        lock(&self.state).pending.is_some()
    }

    fn arm(&self, protocol: Protocol) -> (ArmGuard, oneshot::Receiver<ParseOutcome>) {
        let (tx, rx) = oneshot::channel();
        let mut state = lock(&self.state);
        let id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.buffer.clear();
        if state.pending.is_some() {
            debug!("re-arming while transfer is pending; abandoning it");
        }
        state.pending = Some(Pending {
            id,
            protocol,
            completion: tx,
        });
        let guard = ArmGuard {
            state: Arc::clone(&self.state),
            id,
        };
        (guard, rx)
    }

    /// Send `request` and wait for its response.
    ///
    /// Protocol-level outcomes (timeout, cancellation, bad frames, a reply
    /// to another command) are reported as [`TransferResult`] variants. An
    /// `Err` means the request could not be encoded or sent at all.
    pub async fn transfer(
        &self,
        request: Request,
        protocol: Protocol,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<TransferResult> {
        let frame = request.to_frame(protocol)?;
        if cancel.is_cancelled() {
            debug!("{} canceled before send", request.command);
            return Ok(TransferResult::Canceled { request });
        }

        let (guard, mut rx) = {
            let mut transport = self.transport.lock().await;
            let (guard, rx) = self.arm(protocol);
            debug!(
                "transfer {}: {} to 0x{:02X} ({}, timeout {:?})",
                guard.id, request.command, request.address, protocol, timeout
            );
            trace!("tx {}", HexDump(&frame));
            // On failure the guard drops here and disarms.
            transport.send(&frame).await?;
            (guard, rx)
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => TransferResult::Canceled { request },
            received = &mut rx => match received {
                Ok(outcome) => resolve(request, outcome),
                Err(_) => {
                    debug!("transfer {} abandoned by a newer transfer", guard.id);
                    TransferResult::Canceled { request }
                }
            },
            _ = tokio::time::sleep(timeout) => TransferResult::Timeout { request },
        };
        debug!("transfer {} resolved: {}", guard.id, describe(&result));
        drop(guard);
        Ok(result)
    }
}

fn describe(result: &TransferResult) -> &'static str {
    match result {
        TransferResult::Success { .. } => "success",
        TransferResult::Canceled { .. } => "canceled",
        TransferResult::Timeout { .. } => "timeout",
        TransferResult::CommunicationError { .. } => "communication error",
        TransferResult::UnexpectedResponse { .. } => "unexpected response",
    }
}
