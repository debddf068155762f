mod common;

use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use common::*;
use prospects::db::*;
use prospects::migrate;
use prospects::model::*;
use prospects::ops::{persistence_ops, reminder_ops};
use prospects::queries::reminder_queries;
use prospects::store::ProspectStore;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(7, 0, 0).unwrap()
}

fn reminder_for(name: &str) -> NotificationRequest {
    reminder_ops::contact_reminder(&Prospect::with_details(name, format!("{}@x.com", name.to_lowercase())))
}

// ==========================================================================
// PROSPECT REPO TESTS
// ==========================================================================

#[test]
fn prospect_insert_and_find() {
    let conn = schema::test_connection();
    let p = prospect("Ada", "ada@x.com", at(1, 9), false);
    prospect_repo::insert(&conn, &p).unwrap();

    let found = prospect_repo::find_by_id(&conn, p.id).unwrap().unwrap();
    assert_eq!(found, p);
    assert!(prospect_repo::find_by_id(&conn, Id::generate()).unwrap().is_none());
}

#[test]
fn find_all_keeps_insertion_order() {
    let conn = schema::test_connection();
    for (name, day) in [("Zoe", 1), ("Ada", 3), ("Mia", 2)] {
        prospect_repo::insert(&conn, &prospect(name, "x@x.com", at(day, 9), false)).unwrap();
    }
    let names: Vec<String> = prospect_repo::find_all(&conn).unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Zoe", "Ada", "Mia"]);
    assert_eq!(prospect_repo::count(&conn).unwrap(), 3);
}

#[test]
fn set_contacted_updates_flag() {
    let conn = schema::test_connection();
    let p = prospect("Ada", "ada@x.com", at(1, 9), false);
    prospect_repo::insert(&conn, &p).unwrap();

    assert!(prospect_repo::set_contacted(&conn, p.id, true).unwrap());
    assert!(prospect_repo::find_by_id(&conn, p.id).unwrap().unwrap().is_contacted);
    assert!(!prospect_repo::set_contacted(&conn, Id::generate(), true).unwrap());
}

// ==========================================================================
// PERSISTENCE OPS TESTS
// ==========================================================================

#[test]
fn store_changes_are_written_through() {
    let conn = Rc::new(schema::test_connection());
    let mut store = ProspectStore::new();
    persistence_ops::attach_persistence(&mut store, Rc::clone(&conn));

    let p = Prospect::with_details("Ada", "ada@x.com");
    let id = p.id;
    store.add(p);
    store.toggle(id);

    let saved = prospect_repo::find_all(&conn).unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].is_contacted);
}

#[test]
fn load_store_restores_saved_prospects() {
    let conn = schema::test_connection();
    let a = prospect("Ada", "ada@x.com", at(1, 9), true);
    let b = prospect("Bob", "bob@y.com", at(2, 9), false);
    prospect_repo::insert(&conn, &a).unwrap();
    prospect_repo::insert(&conn, &b).unwrap();

    let store = persistence_ops::load_store(&conn).unwrap();
    let people: Vec<Prospect> = store.people().cloned().collect();
    assert_eq!(people, vec![a, b]);
}

#[test]
fn failed_write_does_not_break_the_store() {
    let conn = Rc::new(schema::test_connection());
    conn.execute_batch("DROP TABLE prospects").unwrap();
    let mut store = ProspectStore::new();
    persistence_ops::attach_persistence(&mut store, Rc::clone(&conn));

    store.add(Prospect::with_details("Ada", "ada@x.com"));
    assert_eq!(store.len(), 1);
}

// ==========================================================================
// REMINDER REPO TESTS
// ==========================================================================

#[test]
fn authorization_defaults_to_not_determined() {
    let conn = schema::test_connection();
    assert_eq!(reminder_repo::authorization_status(&conn).unwrap(), AuthorizationStatus::NotDetermined);

    reminder_repo::set_authorization_status(&conn, AuthorizationStatus::Denied).unwrap();
    reminder_repo::set_authorization_status(&conn, AuthorizationStatus::Authorized).unwrap();
    assert_eq!(reminder_repo::authorization_status(&conn).unwrap(), AuthorizationStatus::Authorized);
}

#[test]
fn scheduled_reminder_is_read_back() {
    let conn = schema::test_connection();
    let request = reminder_for("Ada");
    let fire_at = request.trigger.next_fire_after(morning()).unwrap();
    reminder_repo::insert(&conn, &request, fire_at).unwrap();

    let pending = reminder_queries::upcoming_reminders(&conn).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].request, request);
    assert_eq!(pending[0].fire_at, morning() + Duration::hours(2));
    assert!(!pending[0].delivered);
}

#[test]
fn pending_reminders_are_soonest_first() {
    let conn = schema::test_connection();
    let later = reminder_for("Late");
    let sooner = reminder_for("Soon");
    reminder_repo::insert(&conn, &later, morning() + Duration::days(2)).unwrap();
    reminder_repo::insert(&conn, &sooner, morning() + Duration::days(1)).unwrap();

    let titles: Vec<String> = reminder_repo::find_pending(&conn)
        .unwrap()
        .into_iter()
        .map(|r| r.request.content.title)
        .collect();
    assert_eq!(titles, vec!["Contact Soon", "Contact Late"]);
}

#[test]
fn deliver_due_marks_only_past_reminders() {
    let conn = schema::test_connection();
    let past = reminder_for("Past");
    let future = reminder_for("Future");
    reminder_repo::insert(&conn, &past, morning() - Duration::hours(1)).unwrap();
    reminder_repo::insert(&conn, &future, morning() + Duration::hours(1)).unwrap();

    assert_eq!(reminder_queries::due_reminders(&conn, morning()).unwrap().len(), 1);

    let delivered = reminder_ops::deliver_due(&conn, morning()).unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].request.id, past.id);

    assert!(reminder_ops::deliver_due(&conn, morning()).unwrap().is_empty());
    let pending = reminder_repo::find_pending(&conn).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].request.id, future.id);
}

// ==========================================================================
// IMPORT / EXPORT TESTS
// ==========================================================================

#[test]
fn export_then_import_into_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let source_db = dir.path().join("source.db");
    let json_path = dir.path().join("prospects.json");
    let target_db = dir.path().join("target.db");

    {
        let conn = rusqlite::Connection::open(&source_db).unwrap();
        schema::initialize(&conn).unwrap();
        prospect_repo::insert(&conn, &prospect("Ada", "ada@x.com", at(1, 9), true)).unwrap();
        prospect_repo::insert(&conn, &prospect("Bob", "bob@y.com", at(2, 9), false)).unwrap();
    }

    assert_eq!(migrate::export_json(&source_db, &json_path).unwrap(), 2);
    let stats = migrate::import_json(&json_path, &target_db).unwrap();
    assert_eq!(stats.prospects, 2);
    assert_eq!(stats.contacted, 1);
    assert_eq!(stats.skipped, 0);

    let conn = rusqlite::Connection::open(&target_db).unwrap();
    let names: Vec<String> = prospect_repo::find_all(&conn).unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Ada", "Bob"]);
}

#[test]
fn export_from_missing_database_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("typo.db");
    let json_path = dir.path().join("out.json");

    assert!(migrate::export_json(&db_path, &json_path).is_err());
    assert!(!db_path.exists());
    assert!(!json_path.exists());
}

#[test]
fn import_skips_known_ids() {
    let conn = schema::test_connection();
    let p = prospect("Ada", "ada@x.com", at(1, 9), false);
    prospect_repo::insert(&conn, &p).unwrap();

    let stats = migrate::import_prospects(&conn, &[p.clone(), prospect("Bob", "bob@y.com", at(2, 9), false)]).unwrap();
    assert_eq!(stats.prospects, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(prospect_repo::count(&conn).unwrap(), 2);
}

#[test]
fn import_reads_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("in.json");
    std::fs::write(
        &json_path,
        r#"[{"id":"6f9619ff-8b86-4d01-b42d-00cf4fc964ff","name":"Paul Hudson",
             "emailAddress":"paul@example.com","isContacted":false,
             "creationDate":"2022-01-03T10:00:00Z"}]"#,
    )
    .unwrap();

    let db_path = dir.path().join("p.db");
    let stats = migrate::import_json(&json_path, &db_path).unwrap();
    assert_eq!(stats.prospects, 1);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let p = &prospect_repo::find_all(&conn).unwrap()[0];
    assert_eq!(p.email_address, "paul@example.com");
}
