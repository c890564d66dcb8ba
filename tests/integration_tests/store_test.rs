//! Store persistence tests

use workweek::prelude::*;

use super::fixtures::VALID_SCHEDULE_JSON;
use crate::common::office_schedule;

#[tokio::test]
async fn test_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScheduleStore::new(dir.path().join("schedule.json"));

    let schedule = office_schedule();
    store.save_validated(&schedule).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, schedule);
}

#[tokio::test]
async fn test_store_reads_wire_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    std::fs::write(&path, VALID_SCHEDULE_JSON).unwrap();

    let loaded = ScheduleStore::new(&path).load().await.unwrap();
    assert!(validate_schedule(&loaded).valid);
}

#[tokio::test]
async fn test_invalid_schedule_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScheduleStore::new(dir.path().join("schedule.json"));
    store.save(&office_schedule()).await.unwrap();

    // Overwriting with a broken schedule is refused and the old file stays
    let broken = office_schedule().with_slot_step_minutes(Some(7));
    let err = store.save_validated(&broken).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(store.load().await.unwrap(), office_schedule());

    // Unchecked save writes it anyway
    store.save(&broken).await.unwrap();
    assert_eq!(store.load().await.unwrap().slot_step_minutes, Some(7));
}

#[tokio::test]
async fn test_malformed_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ScheduleStore::new(&path).load().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
