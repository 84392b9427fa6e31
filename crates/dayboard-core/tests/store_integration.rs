//! Save-then-load round trips for every persisted collection.

use chrono::{NaiveDate, TimeZone, Utc};
use dayboard_core::{
    AcademicTasks, Day, DeadlineBook, DeadlineKind, Goals, Habits, HealthProfile, KvStore,
    WeeklyPlan,
};

fn store() -> (tempfile::TempDir, KvStore) {
    let dir = tempfile::tempdir().unwrap();
    let kv = KvStore::at(dir.path());
    (dir, kv)
}

#[test]
fn academic_tasks_round_trip() {
    let (_dir, store) = store();
    let mut tasks = AcademicTasks::default();
    tasks.add("finish lab report").unwrap();
    let id = tasks.add("revise chapter 4").unwrap().id.clone();
    tasks.toggle(&id).unwrap();

    store.try_save(&tasks).unwrap();
    assert_eq!(store.try_load::<AcademicTasks>().unwrap(), Some(tasks));
}

#[test]
fn goals_round_trip() {
    let (_dir, store) = store();
    let mut goals = Goals::default();
    goals.add("run a 10k").unwrap();

    store.try_save(&goals).unwrap();
    assert_eq!(store.try_load::<Goals>().unwrap(), Some(goals));
}

#[test]
fn deadlines_round_trip_and_stay_sorted() {
    let (_dir, store) = store();
    let mut book = DeadlineBook::default();
    book.add(
        "Operating Systems",
        DeadlineKind::Exam,
        Utc.with_ymd_and_hms(2025, 6, 20, 9, 0, 0).unwrap(),
    )
    .unwrap();
    book.add(
        "Linear Algebra",
        DeadlineKind::Assignment,
        Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 0).unwrap(),
    )
    .unwrap();

    store.try_save(&book).unwrap();
    let reloaded: DeadlineBook = store.try_load().unwrap().unwrap();
    assert_eq!(reloaded, book);
    assert_eq!(reloaded.as_slice()[0].subject, "Linear Algebra");
}

#[test]
fn habits_round_trip() {
    let (_dir, store) = store();
    let mut habits = Habits::default();
    let id = habits.add("journal").unwrap().id.clone();
    habits
        .toggle_today(&id, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap())
        .unwrap();

    store.try_save(&habits).unwrap();
    assert_eq!(store.try_load::<Habits>().unwrap(), Some(habits));
}

#[test]
fn health_profile_round_trip() {
    let (_dir, store) = store();
    let mut profile = HealthProfile::default();
    profile.set_info(180.0, 75.0).unwrap();
    profile
        .record_weight(82.0, Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap())
        .unwrap();

    store.try_save(&profile).unwrap();
    assert_eq!(store.try_load::<HealthProfile>().unwrap(), Some(profile));
}

#[test]
fn weekly_plan_round_trip() {
    let (_dir, store) = store();
    let mut plan = WeeklyPlan::default();
    plan.add(Day::Sunday, "plan the week").unwrap();
    plan.add(Day::Wednesday, "gym with Omar").unwrap();

    store.try_save(&plan).unwrap();
    assert_eq!(store.try_load::<WeeklyPlan>().unwrap(), Some(plan));
}

#[test]
fn collections_do_not_collide_in_one_store() {
    let (_dir, store) = store();

    let mut tasks = AcademicTasks::default();
    tasks.add("task").unwrap();
    let mut goals = Goals::default();
    goals.add("goal").unwrap();

    store.try_save(&tasks).unwrap();
    store.try_save(&goals).unwrap();

    let tasks_back: AcademicTasks = store.try_load().unwrap().unwrap();
    let goals_back: Goals = store.try_load().unwrap().unwrap();
    assert_eq!(tasks_back.items()[0].text, "task");
    assert_eq!(goals_back.items()[0].text, "goal");
}
