//! Interaction facade: the single entry point presentation collaborators
//! use to mutate session state. Cheap-clone handle over one session,
//! so the rendering side and the ack timers share the same state.

#[cfg(test)]
mod tests;

use crate::config::SessionConfig;
use crate::scheduler::AckScheduler;
use crate::session::{ChatMessage, Origin, PendingAck, Priority, ServiceRequest, Session};
use log::info;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Concierge {
    session: Arc<Mutex<Session>>,
    scheduler: AckScheduler,
}

impl Concierge {
    pub fn new(config: SessionConfig) -> Self {
        let session = Arc::new(Mutex::new(Session::new(&config)));
        let scheduler = AckScheduler::new(Arc::clone(&session), config.ack_delay());
        info!(
            "session opened for {} (room {})",
            config.guest.name, config.guest.room_number
        );
        Self { session, scheduler }
    }

    /// Open the full conversational view.
    pub fn start_session(&self) {
        self.session.lock().unwrap().open_chat();
    }

    /// Show / hide the floating assistant widget.
    pub fn toggle_assistant(&self) {
        self.session.lock().unwrap().toggle_assistant();
    }

    pub fn submit_guest_message(&self, content: impl Into<String>) -> ChatMessage {
        self.session
            .lock()
            .unwrap()
            .push_message(content, Origin::Guest)
    }

    pub fn submit_assistant_message(&self, content: impl Into<String>) -> ChatMessage {
        self.session
            .lock()
            .unwrap()
            .push_message(content, Origin::Assistant)
    }

    /// File a service request: one ledger entry, one synthesized guest
    /// message, one armed acknowledgement. The ledger entry and the
    /// guest message land synchronously; the acknowledgement arrives
    /// after the configured delay. Must be called from within a tokio
    /// runtime.
    pub fn request_service(
        &self,
        category: &str,
        description: &str,
        priority: Option<Priority>,
    ) -> ServiceRequest {
        let request = {
            let mut session = self.session.lock().unwrap();
            let request =
                session.push_request(category, description, priority.unwrap_or_default());
            session.push_message(
                format!("I need {}: {}", category.to_lowercase(), description),
                Origin::Guest,
            );
            session.arm_ack(request.id, request.category.clone());
            request
        };
        // armed outside the lock; the timer takes the same lock to fire
        self.scheduler.schedule(request.id);
        request
    }

    // Read-side snapshots for rendering.

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.session.lock().unwrap().messages().to_vec()
    }

    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.session.lock().unwrap().requests().to_vec()
    }

    pub fn pending_acks(&self) -> Vec<PendingAck> {
        self.session.lock().unwrap().pending_acks().to_vec()
    }

    pub fn chat_open(&self) -> bool {
        self.session.lock().unwrap().chat_open()
    }

    pub fn assistant_open(&self) -> bool {
        self.session.lock().unwrap().assistant_open()
    }
}

impl Default for Concierge {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
