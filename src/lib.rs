//! Session core for a hotel-guest concierge widget.
//! Append-only chat log + service-request ledger, with one deferred
//! acknowledgement armed per filed request. Presentation is external;
//! `Concierge` is the only mutation surface collaborators call.

pub mod concierge;
pub mod config;
pub mod error;
mod scheduler;
pub mod session;

pub use concierge::Concierge;
pub use config::{Guest, SessionConfig};
pub use error::ConciergeError;
pub use session::{
    ChatMessage, Origin, PendingAck, Priority, RequestStatus, ServiceRequest, Session,
};
