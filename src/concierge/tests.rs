//! End-to-end facade tests: synchronous effects plus deferred acks.

use super::*;
use crate::session::RequestStatus;
use std::time::Duration;
use tokio::time::sleep;

fn quiet() -> Concierge {
    let _ = env_logger::builder().is_test(true).try_init();
    Concierge::new(SessionConfig {
        greeting: None,
        ..SessionConfig::default()
    })
}

#[tokio::test]
async fn request_service_synchronous_effects() {
    let concierge = quiet();
    let request = concierge.request_service("Towels", "need 2 more", None);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.priority, Priority::Normal);
    assert_eq!(request.category, "Towels");

    assert_eq!(concierge.requests().len(), 1);
    assert_eq!(concierge.pending_acks().len(), 1);

    let messages = concierge.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].origin, Origin::Guest);
    assert_eq!(messages[0].content, "I need towels: need 2 more");
}

#[tokio::test(start_paused = true)]
async fn ack_arrives_after_delay_not_before() {
    let concierge = quiet();
    concierge.request_service("Towels", "need 2 more", None);

    sleep(Duration::from_millis(999)).await;
    assert_eq!(concierge.messages().len(), 1); // guest message only

    sleep(Duration::from_millis(5)).await;
    tokio::task::yield_now().await;
    let messages = concierge.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].origin, Origin::Assistant);
    assert_eq!(
        messages[1].content,
        "Your towels request has been received and will be fulfilled \
         within 20-30 minutes. Thank you!"
    );
    assert!(concierge.pending_acks().is_empty());
}

#[tokio::test(start_paused = true)]
async fn each_request_acknowledged_exactly_once() {
    let concierge = quiet();
    for i in 0..5 {
        concierge.request_service("Housekeeping", &format!("round {i}"), Some(Priority::Urgent));
    }
    assert_eq!(concierge.pending_acks().len(), 5);

    sleep(Duration::from_secs(10)).await;
    tokio::task::yield_now().await;

    let messages = concierge.messages();
    let acks = messages
        .iter()
        .filter(|m| m.origin == Origin::Assistant)
        .count();
    assert_eq!(acks, 5);
    assert_eq!(messages.len(), 10);
    assert!(concierge.pending_acks().is_empty());
}

#[tokio::test]
async fn explicit_priority_is_kept() {
    let concierge = quiet();
    let request = concierge.request_service("Medical", "guest feels faint", Some(Priority::Emergency));
    assert_eq!(request.priority, Priority::Emergency);
}

#[test]
fn guest_message_never_touches_ledger() {
    let concierge = quiet();
    concierge.submit_guest_message("is the pool open?");
    assert_eq!(concierge.messages().len(), 1);
    assert!(concierge.requests().is_empty());
    assert!(concierge.pending_acks().is_empty());
}

#[test]
fn default_session_seeds_greeting() {
    let concierge = Concierge::default();
    let messages = concierge.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].origin, Origin::Assistant);
}

#[test]
fn visibility_flags_toggle() {
    let concierge = quiet();
    assert!(!concierge.chat_open());
    concierge.start_session();
    assert!(concierge.chat_open());

    assert!(!concierge.assistant_open());
    concierge.toggle_assistant();
    assert!(concierge.assistant_open());
    concierge.toggle_assistant();
    assert!(!concierge.assistant_open());
}
