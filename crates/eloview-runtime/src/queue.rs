use crate::{Error, Result};
use std::sync::Mutex;

/// Outbound message bus.
pub trait MessageQueue {
    fn enqueue(&self, payload: Vec<u8>) -> Result<()>;
}

/// Queue that keeps messages in memory, for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryQueue {
    messages: Mutex<Vec<Vec<u8>>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Result<Vec<Vec<u8>>> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .map_err(|e| Error::Queue(e.to_string()))
    }
}

impl MessageQueue for MemoryQueue {
    fn enqueue(&self, payload: Vec<u8>) -> Result<()> {
        self.messages
            .lock()
            .map_err(|e| Error::Queue(e.to_string()))?
            .push(payload);
        Ok(())
    }
}
