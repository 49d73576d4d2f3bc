//! Model client abstraction for the relay.
//!
//! The relay depends on a callable that turns a message pair into the model's raw
//! text output; this module defines the trait, the Workers AI implementation
//! ([`WorkersAi`]), and a fixed-reply [`MockModel`] for tests.

mod workers_ai;

pub use workers_ai::{WorkersAi, MODEL_ID};

use async_trait::async_trait;

use crate::error::RelayError;
use crate::message::Message;

/// Model client: given messages, returns the model's raw text output.
///
/// Implementations: [`WorkersAi`] (real endpoint), [`MockModel`] (canned text).
/// One call per relay request, non-streaming, no retry.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn invoke(&self, messages: &[Message]) -> Result<String, RelayError>;
}

/// Fixed-reply client for tests: returns the configured text for every call.
#[derive(Clone, Debug)]
pub struct MockModel {
    reply: String,
}

impl MockModel {
    pub fn new(reply: impl Into<String>) -> Self {
        MockModel {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl ModelClient for MockModel {
    async fn invoke(&self, _messages: &[Message]) -> Result<String, RelayError> {
        Ok(self.reply.clone())
    }
}
