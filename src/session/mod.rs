//! Session aggregate: the chat message log, the service-request ledger,
//! and the queue of not-yet-fired acknowledgements. Both sequences are
//! append-only for the session's lifetime.

pub mod message;
pub mod request;


pub use message::{ChatMessage, Origin};
pub use request::{Priority, RequestStatus, ServiceRequest};

use crate::config::{Guest, SessionConfig};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled acknowledgement that has not fired yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingAck {
    pub request_id: Uuid,
    pub category: String,
}

/// All state for one guest session. Discarded when the session ends;
/// nothing is persisted.
pub struct Session {
    guest: Guest,
    messages: Vec<ChatMessage>,
    requests: Vec<ServiceRequest>,
    pending_acks: Vec<PendingAck>,
    chat_open: bool,
    assistant_open: bool,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        let mut session = Self {
            guest: config.guest.clone(),
            messages: Vec::new(),
            requests: Vec::new(),
            pending_acks: Vec::new(),
            chat_open: false,
            assistant_open: false,
        };
        if let Some(greeting) = &config.greeting {
            session.push_message(greeting.clone(), Origin::Assistant);
        }
        session
    }

    /// Append a chat entry. Always succeeds; insertion order is final.
    pub fn push_message(&mut self, content: impl Into<String>, origin: Origin) -> ChatMessage {
        let message = ChatMessage::new(content, origin);
        debug!("message {} from {:?}", message.id, message.origin);
        self.messages.push(message.clone());
        message
    }

    /// File a service request. Created `Pending`.
    pub fn push_request(
        &mut self,
        category: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> ServiceRequest {
        let request = ServiceRequest::new(category, description, priority);
        debug!("request {} ({})", request.id, request.category);
        self.requests.push(request.clone());
        request
    }

    /// Record that an acknowledgement has been armed for `request_id`.
    pub(crate) fn arm_ack(&mut self, request_id: Uuid, category: String) {
        self.pending_acks.push(PendingAck {
            request_id,
            category,
        });
    }

    /// Take the pending entry for `request_id` if it has not fired yet.
    /// Firing removes the entry, so a second take finds nothing.
    pub(crate) fn take_ack(&mut self, request_id: Uuid) -> Option<PendingAck> {
        let idx = self
            .pending_acks
            .iter()
            .position(|ack| ack.request_id == request_id)?;
        Some(self.pending_acks.remove(idx))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    pub fn pending_acks(&self) -> &[PendingAck] {
        &self.pending_acks
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn assistant_open(&self) -> bool {
        self.assistant_open
    }
}
