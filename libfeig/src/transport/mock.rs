// libfeig/src/transport/mock.rs

//! Scripted in-memory transport for tests.
//!
//! Clones of a [`MockTransport`] share state, so a test can hand one clone
//! to a reader and keep another to script replies, inject stray bytes and
//! inspect what was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::transport::traits::{DataReceived, Transport};
use crate::{Error, Result};

/// What the mock does after one `send`.
#[derive(Debug, Clone)]
struct Reply {
    chunks: Vec<Vec<u8>>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct MockState {
    on_data: Option<DataReceived>,
    open: bool,
    sent: Vec<Vec<u8>>,
    replies: VecDeque<Reply>,
    fail_sends: bool,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, chunks: Vec<Vec<u8>>, delay: Option<Duration>) {
        self.state().replies.push_back(Reply { chunks, delay });
    }

    /// Deliver `bytes` in one chunk right after the next `send`.
    pub fn push_reply(&self, bytes: Vec<u8>) {
        self.push(vec![bytes], None);
    }

    /// Deliver `bytes` split into `chunk_size` pieces after the next `send`.
    pub fn push_reply_chunked(&self, bytes: Vec<u8>, chunk_size: usize) {
        let chunks = bytes.chunks(chunk_size.max(1)).map(<[u8]>::to_vec).collect();
        self.push(chunks, None);
    }

    /// Deliver each chunk from a spawned task, `delay` apart, starting
    /// `delay` after the next `send`.
    pub fn push_reply_delayed(&self, chunks: Vec<Vec<u8>>, delay: Duration) {
        self.push(chunks, Some(delay));
    }

    /// The next `send` gets no answer.
    pub fn push_silence(&self) {
        self.push(Vec::new(), None);
    }

    /// Make subsequent `send` calls fail with a transport error.
    pub fn set_fail_sends(&self, fail: bool) {
        self.state().fail_sends = fail;
    }

    /// Push bytes into the receive callback as if the device sent them
    /// unprompted. Returns false when the transport is closed.
    pub fn inject(&self, bytes: &[u8]) -> bool {
        let on_data = {
            let state = self.state();
            match (&state.on_data, state.open) {
                (Some(cb), true) => Arc::clone(cb),
                _ => return false,
            }
        };
        on_data(bytes);
        true
    }

    /// Every frame passed to `send`, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state().sent.clone()
    }

    pub fn remaining_replies(&self) -> usize {
        self.state().replies.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn open(&mut self, on_data: DataReceived) -> Result<()> {
        let mut state = self.state();
        state.on_data = Some(on_data);
        state.open = true;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        let mut state = self.state();
        state.open = false;
        state.on_data = None;
        Ok(())
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let (reply, on_data) = {
            let mut state = self.state();
            if !state.open {
                return Err(Error::NotConnected);
            }
            if state.fail_sends {
                return Err(Error::Transport("mock send failure".into()));
            }
            state.sent.push(data.to_vec());
            (state.replies.pop_front(), state.on_data.clone())
        };

        // The callback runs without the mock lock held.
        if let (Some(reply), Some(on_data)) = (reply, on_data) {
            match reply.delay {
                None => reply.chunks.iter().for_each(|chunk| on_data(chunk.as_slice())),
                Some(delay) => {
                    tokio::spawn(async move {
                        for chunk in reply.chunks {
                            tokio::time::sleep(delay).await;
                            on_data(chunk.as_slice());
                        }
                    });
                }
            }
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.state().open
    }
}
