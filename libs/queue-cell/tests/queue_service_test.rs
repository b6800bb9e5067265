use assert_matches::assert_matches;
use uuid::Uuid;

use queue_cell::*;
use shared_config::{AppConfig, ServingPolicy};

fn single_slot_config() -> AppConfig {
    AppConfig::default()
}

fn concurrent_config() -> AppConfig {
    AppConfig {
        serving_policy: ServingPolicy::Concurrent,
        ..AppConfig::default()
    }
}

fn check_in_request(name: &str, phone: &str) -> CheckInRequest {
    CheckInRequest {
        name: name.to_string(),
        phone: phone.to_string(),
        appointment_type: shared_models::AppointmentType::Consultation,
        appointment_time: None,
    }
}

#[tokio::test]
async fn test_check_in_appends_waiting_patient() {
    let service = QueueService::new(&single_slot_config());

    let patient = service
        .check_in(check_in_request("Alice", "555-1111"))
        .await
        .expect("check-in should succeed");

    assert_eq!(patient.name, "Alice");
    assert_eq!(patient.phone, "555-1111");
    assert_eq!(patient.status, PatientStatus::Waiting);
    assert_eq!(patient.queue_number, 100);

    let stats = service.stats().await;
    assert_eq!(
        stats,
        QueueStats {
            total_patients: 1,
            waiting: 1,
            in_progress: 0,
            completed_today: 0,
        }
    );
}

#[tokio::test]
async fn test_check_in_trims_whitespace() {
    let service = QueueService::new(&single_slot_config());

    let patient = service
        .check_in(check_in_request("  Alice  ", " 555-1111 "))
        .await
        .expect("check-in should succeed");

    assert_eq!(patient.name, "Alice");
    assert_eq!(patient.phone, "555-1111");
}

#[tokio::test]
async fn test_check_in_rejects_blank_name() {
    let service = QueueService::new(&single_slot_config());

    let result = service.check_in(check_in_request("   ", "555-1111")).await;
    assert_matches!(result, Err(QueueError::Validation(_)));

    // Nothing was created
    assert_eq!(service.stats().await.total_patients, 0);
}

#[tokio::test]
async fn test_check_in_rejects_blank_phone() {
    let service = QueueService::new(&single_slot_config());

    let result = service.check_in(check_in_request("Alice", "")).await;
    assert_matches!(result, Err(QueueError::Validation(_)));

    assert_eq!(service.stats().await.total_patients, 0);
}

#[tokio::test]
async fn test_queue_numbers_are_unique_and_increasing() {
    let service = QueueService::new(&single_slot_config());

    let a = service.check_in(check_in_request("A", "1")).await.unwrap();
    let b = service.check_in(check_in_request("B", "2")).await.unwrap();
    let c = service.check_in(check_in_request("C", "3")).await.unwrap();

    assert_eq!(a.queue_number, 100);
    assert_eq!(b.queue_number, 101);
    assert_eq!(c.queue_number, 102);
}

#[tokio::test]
async fn test_call_next_is_fifo() {
    let service = QueueService::new(&single_slot_config());

    let first = service.check_in(check_in_request("First", "1")).await.unwrap();
    service.check_in(check_in_request("Second", "2")).await.unwrap();

    let called = service.call_next().await.expect("someone is waiting");
    assert_eq!(called.id, first.id);
    assert_eq!(called.status, PatientStatus::InProgress);

    // The waiting list no longer contains the promoted patient
    let waiting = service.waiting().await;
    assert_eq!(waiting.len(), 1);
    assert_eq!(waiting[0].name, "Second");
}

#[tokio::test]
async fn test_call_next_ignores_emergency_priority() {
    // Emergency is a label, not a priority lane: strictly FIFO.
    let service = QueueService::new(&single_slot_config());

    let first = service.check_in(check_in_request("Routine", "1")).await.unwrap();
    service
        .check_in(CheckInRequest {
            name: "Urgent".to_string(),
            phone: "2".to_string(),
            appointment_type: shared_models::AppointmentType::Emergency,
            appointment_time: None,
        })
        .await
        .unwrap();

    let called = service.call_next().await.unwrap();
    assert_eq!(called.id, first.id);
}

#[tokio::test]
async fn test_call_next_on_empty_queue_is_noop() {
    let service = QueueService::new(&single_slot_config());

    assert!(service.call_next().await.is_none());
    assert_eq!(service.stats().await.total_patients, 0);
}

#[tokio::test]
async fn test_call_next_single_slot_blocks_second_call() {
    let service = QueueService::new(&single_slot_config());

    service.check_in(check_in_request("First", "1")).await.unwrap();
    service.check_in(check_in_request("Second", "2")).await.unwrap();

    assert!(service.call_next().await.is_some());
    // Slot is occupied, so the second call changes nothing
    assert!(service.call_next().await.is_none());

    let stats = service.stats().await;
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.waiting, 1);
}

#[tokio::test]
async fn test_call_next_concurrent_policy_allows_multiple_in_progress() {
    let service = QueueService::new(&concurrent_config());

    let first = service.check_in(check_in_request("First", "1")).await.unwrap();
    let second = service.check_in(check_in_request("Second", "2")).await.unwrap();

    assert_eq!(service.call_next().await.unwrap().id, first.id);
    assert_eq!(service.call_next().await.unwrap().id, second.id);

    let stats = service.stats().await;
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.waiting, 0);

    // The serving display still shows the oldest in-progress patient
    assert_eq!(service.now_serving().await.unwrap().id, first.id);
}

#[tokio::test]
async fn test_complete_unknown_id_is_noop() {
    let service = QueueService::new(&single_slot_config());
    service.check_in(check_in_request("Alice", "1")).await.unwrap();

    let before = service.all().await;
    assert!(service.complete(Uuid::new_v4()).await.is_none());

    let after = service.all().await;
    assert_eq!(before.len(), after.len());
    assert_eq!(after[0].status, PatientStatus::Waiting);
}

#[tokio::test]
async fn test_complete_is_idempotent() {
    let service = QueueService::new(&single_slot_config());
    let patient = service.check_in(check_in_request("Alice", "1")).await.unwrap();

    let done = service.complete(patient.id).await.unwrap();
    assert_eq!(done.status, PatientStatus::Completed);

    let again = service.complete(patient.id).await.unwrap();
    assert_eq!(again.status, PatientStatus::Completed);
    assert_eq!(service.stats().await.completed_today, 1);
}

#[tokio::test]
async fn test_complete_works_from_waiting() {
    // Complete is unconditional: a waiting patient can be closed out
    // without ever being called.
    let service = QueueService::new(&single_slot_config());
    let patient = service.check_in(check_in_request("Alice", "1")).await.unwrap();

    let done = service.complete(patient.id).await.unwrap();
    assert_eq!(done.status, PatientStatus::Completed);
    assert!(service.waiting().await.is_empty());
}

#[tokio::test]
async fn test_full_visit_walkthrough() {
    let service = QueueService::new(&single_slot_config());

    let alice = service
        .check_in(check_in_request("Alice", "555-1111"))
        .await
        .unwrap();
    assert_eq!(alice.status, PatientStatus::Waiting);

    let called = service.call_next().await.unwrap();
    assert_eq!(called.id, alice.id);
    assert_eq!(called.status, PatientStatus::InProgress);
    assert_eq!(service.now_serving().await.unwrap().id, alice.id);

    let done = service.complete(alice.id).await.unwrap();
    assert_eq!(done.status, PatientStatus::Completed);

    // Nobody is being served any more
    let display = service.display().await;
    assert!(display.now_serving.is_none());
    assert!(display.waiting.is_empty());
    assert_eq!(display.stats.completed_today, 1);
}

#[tokio::test]
async fn test_waiting_list_tracks_check_ins_and_promotions() {
    let service = QueueService::new(&single_slot_config());

    for i in 0..4 {
        service
            .check_in(check_in_request(&format!("P{}", i), &format!("{}", i)))
            .await
            .unwrap();
    }
    assert_eq!(service.waiting().await.len(), 4);

    let called = service.call_next().await.unwrap();
    assert_eq!(service.waiting().await.len(), 3);

    service.complete(called.id).await.unwrap();
    assert_eq!(service.waiting().await.len(), 3);

    service.call_next().await.unwrap();
    assert_eq!(service.waiting().await.len(), 2);
}

#[tokio::test]
async fn test_staff_overview_caps_waiting_preview() {
    let service = QueueService::new(&single_slot_config());

    for i in 0..5 {
        service
            .check_in(check_in_request(&format!("P{}", i), &format!("{}", i)))
            .await
            .unwrap();
    }

    let overview = service.staff_overview().await;
    assert_eq!(overview.waiting_total, 5);
    assert_eq!(overview.waiting_preview.len(), 3);
    assert_eq!(overview.more_waiting, 2);
    assert_eq!(overview.waiting_preview[0].name, "P0");
    assert!(overview.in_progress.is_empty());
    assert_eq!(overview.completed_today, 0);
}
