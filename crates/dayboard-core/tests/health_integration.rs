//! Integration tests for the health widget's full flow: set info, record
//! weights over days, derive metrics, persist.

use chrono::{DateTime, TimeZone, Utc};
use dayboard_core::{BmiCategory, HealthProfile, KvStore};

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, 9, 30, 0).unwrap()
}

#[test]
fn first_run_to_goal_reached() {
    let mut profile = HealthProfile::default();
    profile.set_info(175.0, 70.0).unwrap();

    // First entry ever becomes the initial weight.
    profile.record_weight(80.0, at(1)).unwrap();
    assert_eq!(profile.initial_weight_kg, 80.0);
    assert_eq!(profile.progress_pct(), 0.0);

    profile.record_weight(75.0, at(10)).unwrap();
    assert!((profile.progress_pct() - 50.0).abs() < 1e-9);
    assert_eq!(profile.bmi_category(), Some(BmiCategory::Normal));

    // Overshooting the goal still reads 100%.
    profile.record_weight(68.0, at(20)).unwrap();
    assert_eq!(profile.progress_pct(), 100.0);
    assert_eq!(profile.current_weight(), 68.0);
}

#[test]
fn profile_round_trips_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = KvStore::at(dir.path());

    let mut profile = HealthProfile::default();
    profile.set_info(162.0, 55.0).unwrap();
    profile.record_weight(60.0, at(2)).unwrap();
    profile.record_weight(58.5, at(3)).unwrap();
    store.try_save(&profile).unwrap();

    let reloaded: HealthProfile = store.try_load().unwrap().unwrap();
    assert_eq!(reloaded, profile);
    assert_eq!(reloaded.current_weight(), 58.5);
}

#[test]
fn corrupt_profile_blob_degrades_to_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("health_info.json"), "{{{{").unwrap();

    let store = KvStore::at(dir.path());
    let profile = store.load::<HealthProfile>();
    assert_eq!(profile, HealthProfile::default());
    assert_eq!(profile.bmi(), None);
    assert_eq!(profile.progress_pct(), 0.0);
}

#[test]
fn two_same_day_weigh_ins_keep_one_chart_point() {
    let mut profile = HealthProfile::default();
    let morning = Utc.with_ymd_and_hms(2025, 4, 5, 7, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2025, 4, 5, 21, 0, 0).unwrap();

    profile.record_weight(81.2, morning).unwrap();
    profile.record_weight(80.6, evening).unwrap();

    assert_eq!(profile.entries.len(), 1);
    assert_eq!(profile.entries[0].weight_kg, 80.6);
    assert_eq!(profile.initial_weight_kg, 81.2);
}
