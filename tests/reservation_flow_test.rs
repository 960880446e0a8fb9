use httpmock::prelude::*;
use reservation_desk::core::form::{REQUIRED_FIELDS_NOTICE, SUBMIT_LABEL};
use reservation_desk::core::{Field, Guests, Notifier, ReservationRequest, SubmissionOutcome};
use reservation_desk::{
    ApiClient, FixedClock, ReservationForm, ReservationService, SubmitStatus,
};
use chrono_tz::America::New_York;
use serde_json::json;
use std::sync::Mutex;

/// 記錄所有通知，取代瀏覽器的 toast
#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    fn events(&self) -> Vec<(bool, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push((false, message.to_string()));
    }
}

fn service_for(server: &MockServer) -> ReservationService {
    ReservationService::new(ApiClient::new(&server.url("/api")).unwrap())
}

// Friday 2026-10-16, 16:10 in New York (EDT)
fn afternoon() -> FixedClock {
    FixedClock::parse("2026-10-16T16:10:00-04:00", New_York).unwrap()
}

fn fill(form: &mut ReservationForm<FixedClock>, date: &str, time: &str) {
    form.change(Field::Name, "Grace Hopper");
    form.blur(Field::Name);
    form.change(Field::Email, "grace@example.com");
    form.blur(Field::Email);
    form.change(Field::Phone, "(202) 555-0123");
    form.blur(Field::Phone);
    form.change(Field::Date, date);
    form.blur(Field::Date);
    form.open_time_selector();
    form.change(Field::Time, time);
    form.blur(Field::Time);
    form.set_guests(Guests::new(5).unwrap());
}

#[tokio::test]
async fn test_successful_booking_posts_payload_and_resets() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/reservations").json_body(json!({
                "customer_name": "Grace Hopper",
                "customer_email": "grace@example.com",
                "phone_number": "(202) 555-0123",
                "newsletter_signup": false,
                "time_slot": "2026-10-16T22:00:00.000Z",
                "guests": 5
            }));
            then.status(201)
                .json_body(json!({"success": true, "message": "Reservation confirmed for 6:00 PM."}));
        })
        .await;

    let service = service_for(&server);
    let notifier = RecordingNotifier::default();
    let mut form = ReservationForm::new(afternoon());

    // 16:10 -> only hours after 17 are offered today
    fill(&mut form, "2026-10-16", "6:00 PM");
    assert_eq!(form.time_options().first().map(|s| s.hour()), Some(18));

    let status = form.submit(&service, &notifier).await;

    mock.assert_async().await;
    assert_eq!(
        status,
        SubmitStatus::Completed(SubmissionOutcome {
            success: true,
            message: "Reservation confirmed for 6:00 PM.".to_string(),
        })
    );
    assert_eq!(
        notifier.events(),
        vec![(true, "Reservation confirmed for 6:00 PM.".to_string())]
    );
    assert_eq!(form.request(), &ReservationRequest::default());
    assert!(form.time_options().is_empty());
    assert!(form.errors().is_empty());
    assert!(!form.is_loading());
    assert_eq!(form.submit_label(), SUBMIT_LABEL);
}

#[tokio::test]
async fn test_server_error_keeps_form_data() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/reservations");
            then.status(422)
                .json_body(json!({"success": false, "message": "We are fully booked that evening."}));
        })
        .await;

    let service = service_for(&server);
    let notifier = RecordingNotifier::default();
    let mut form = ReservationForm::new(afternoon());
    fill(&mut form, "2026-10-17", "8:00 PM");
    let before = form.request().clone();

    let status = form.submit(&service, &notifier).await;

    mock.assert_async().await;
    assert!(matches!(status, SubmitStatus::Completed(ref outcome) if !outcome.success));
    assert_eq!(
        notifier.events(),
        vec![(false, "We are fully booked that evening.".to_string())]
    );
    assert_eq!(form.request(), &before);
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_transport_failure_keeps_form_data() {
    let service = ReservationService::new(ApiClient::new("http://127.0.0.1:9").unwrap());
    let notifier = RecordingNotifier::default();
    let mut form = ReservationForm::new(afternoon());
    fill(&mut form, "2026-10-17", "8:00 PM");
    let before = form.request().clone();

    let status = form.submit(&service, &notifier).await;

    match status {
        SubmitStatus::Completed(outcome) => {
            assert!(!outcome.success);
            assert!(!outcome.message.is_empty());
        }
        other => panic!("unexpected status: {:?}", other),
    }
    assert_eq!(form.request(), &before);
    assert!(!form.is_loading());
    assert_eq!(notifier.events().len(), 1);
}

#[tokio::test]
async fn test_incomplete_form_never_calls_the_api() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/reservations");
            then.status(201).json_body(json!({"success": true}));
        })
        .await;

    let service = service_for(&server);
    let notifier = RecordingNotifier::default();
    let mut form = ReservationForm::new(afternoon());
    form.change(Field::Name, "Grace Hopper");
    form.change(Field::Date, "2026-10-17");

    let status = form.submit(&service, &notifier).await;

    assert_eq!(status, SubmitStatus::Rejected);
    assert_eq!(mock.hits_async().await, 0);
    assert_eq!(notifier.events(), vec![(false, REQUIRED_FIELDS_NOTICE.to_string())]);
    assert_eq!(form.request().name, "Grace Hopper");
}

#[tokio::test]
async fn test_late_evening_has_nothing_left_today() {
    let clock = FixedClock::parse("2026-10-16T22:59:00-04:00", New_York).unwrap();
    let mut form = ReservationForm::new(clock);
    form.change(Field::Date, "2026-10-16");

    assert!(form.open_time_selector().is_empty());
    assert_eq!(form.visible_error(Field::Time), Some("No available times today."));

    // 隔天又是完整的晚餐時段
    form.change(Field::Date, "2026-10-17");
    assert_eq!(form.errors().time, None);
    assert_eq!(form.open_time_selector().len(), 6);
}
