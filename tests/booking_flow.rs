//! Integration tests for the qualification → booking flow.
//!
//! Each test drives the real wizard state machine into the booking surface
//! against a wiremock stand-in for the CRM webhook.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookin::booking::{BookingSurface, SurfaceEvent};
use bookin::leads::{LeadGateway, WebhookSink};
use bookin::wizard::{Advance, AnswerSet, FieldId, QualificationWizard};

/// Maximum time any background wait is allowed before the test fails.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Walk the wizard through the full qualification scenario:
/// saas / 1m-5m / automation / asap / 10k-25k / Jane Doe.
fn complete_qualification() -> AnswerSet {
    let mut wizard = QualificationWizard::new();

    for (field, value) in [
        (FieldId::BusinessType, "saas"),
        (FieldId::Revenue, "1m-5m"),
        (FieldId::ProjectType, "automation"),
        (FieldId::Timeline, "asap"),
        (FieldId::Budget, "10k-25k"),
    ] {
        wizard.set_answer(field, value);
        match wizard.advance() {
            Advance::Moved(_) => {}
            other => panic!("expected to move past {field}, got {other:?}"),
        }
    }

    wizard.set_answer(FieldId::FirstName, "Jane");
    wizard.set_answer(FieldId::LastName, "Doe");
    wizard.set_answer(FieldId::Email, "jane@co.com");
    wizard.set_answer(FieldId::Phone, "555-1234");

    match wizard.advance() {
        Advance::Completed(answers) => answers,
        other => panic!("expected completion, got {other:?}"),
    }
}

fn surface_for(server_uri: &str) -> BookingSurface {
    let sink = WebhookSink::new(
        format!("{server_uri}/webhooks/leads/website"),
        SecretString::from("test-key"),
    );
    BookingSurface::new(LeadGateway::new(Arc::new(sink)), Duration::from_millis(5))
}

#[tokio::test]
async fn completed_wizard_posts_exactly_one_lead() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhooks/leads/website"))
        .and(query_param("api_key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "source": "website-qualification-form",
            "first_name": "Jane",
            "last_name": "Doe",
            "phone_number": "555-1234",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let surface = surface_for(&server.uri());
    surface.complete_wizard(complete_qualification()).await;

    assert!(surface.await_background(TEST_TIMEOUT).await);
    assert!(surface.shows_external_calendar().await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let notes = body["notes"].as_str().unwrap();
    for line in [
        "Business Type: saas",
        "Revenue: 1m-5m",
        "Project Type: automation",
        "Timeline: asap",
        "Budget: 10k-25k",
    ] {
        assert!(notes.contains(line), "missing {line:?} in notes: {notes}");
    }
    assert_eq!(body["email"], "jane@co.com");
}

#[tokio::test]
async fn rejected_webhook_does_not_block_the_calendar() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let surface = surface_for(&server.uri());
    surface.complete_wizard(complete_qualification()).await;

    assert!(surface.await_background(TEST_TIMEOUT).await);
    assert!(surface.shows_external_calendar().await);
}

#[tokio::test]
async fn unreachable_webhook_does_not_block_the_calendar() {
    // Nothing listens here; the connection is refused.
    let sink = WebhookSink::new(
        "http://127.0.0.1:9/webhooks/leads/website",
        SecretString::from("test-key"),
    );
    let surface = BookingSurface::new(LeadGateway::new(Arc::new(sink)), Duration::from_millis(5));

    surface.complete_wizard(complete_qualification()).await;

    assert!(surface.shows_external_calendar().await);
    assert!(surface.await_background(TEST_TIMEOUT).await);
    assert!(surface.shows_external_calendar().await);
}

#[tokio::test]
async fn double_completion_produces_a_single_lead() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let surface = surface_for(&server.uri());
    surface.complete_wizard(complete_qualification()).await;
    surface.complete_wizard(complete_qualification()).await;

    assert!(surface.await_background(TEST_TIMEOUT).await);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn surface_events_reach_the_hosting_view_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let surface = surface_for(&server.uri());
    let mut events = surface.subscribe();

    surface.complete_wizard(complete_qualification()).await;

    let first = tokio::time::timeout(TEST_TIMEOUT, events.recv())
        .await
        .expect("timed out waiting for CalendarShown")
        .unwrap();
    assert_eq!(first, SurfaceEvent::CalendarShown);

    let second = tokio::time::timeout(TEST_TIMEOUT, events.recv())
        .await
        .expect("timed out waiting for ScrollToCalendar")
        .unwrap();
    assert_eq!(second, SurfaceEvent::ScrollToCalendar);
}
