//! One-shot deferred acknowledgements. Fire-and-forget: no cancellation
//! API, and an ack still in flight when the runtime drops is silently
//! lost, matching the original widget's timer behavior.


use crate::session::{Origin, Session};
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub(crate) type SharedSession = Arc<Mutex<Session>>;

/// Arms one timer per filed request and appends the canned assistant
/// acknowledgement when it elapses.
#[derive(Clone)]
pub(crate) struct AckScheduler {
    session: SharedSession,
    delay: Duration,
}

impl AckScheduler {
    pub(crate) fn new(session: SharedSession, delay: Duration) -> Self {
        Self { session, delay }
    }

    /// Arm a one-shot acknowledgement for `request_id`. Exactly one
    /// assistant message is appended per armed request; the pending
    /// entry is consumed on firing, so a stray duplicate timer would
    /// find nothing and append nothing.
    pub(crate) fn schedule(&self, request_id: Uuid) {
        let session = Arc::clone(&self.session);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = session.lock().unwrap();
            if let Some(ack) = session.take_ack(request_id) {
                debug!("acknowledging request {}", request_id);
                session.push_message(ack_text(&ack.category), Origin::Assistant);
            }
        });
    }
}

/// Canned acknowledgement shown to the guest.
pub(crate) fn ack_text(category: &str) -> String {
    format!(
        "Your {} request has been received and will be fulfilled within 20-30 minutes. Thank you!",
        category.to_lowercase()
    )
}
