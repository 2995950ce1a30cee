use chrono::{Duration, Utc};
use test_fixtures::{anchor, basis, message};
use thermal_core::errors::{HeatError, StoreError, ThermalError};
use thermal_core::models::CoolingInterval;
use thermal_core::traits::{IAnchorStore, IMessageStore};
use thermal_store::InMemoryStore;

#[test]
fn create_and_get_message() {
    let store = InMemoryStore::new();
    let m = message("hello", basis(4, 0));
    let id = m.id.clone();
    IMessageStore::create(&store, m).unwrap();

    let fetched = IMessageStore::get(&store, &id).unwrap().unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.content, "hello");
}

#[test]
fn get_missing_message_returns_none() {
    let store = InMemoryStore::new();
    assert!(IMessageStore::get(&store, "nope").unwrap().is_none());
}

#[test]
fn enumeration_preserves_insertion_order() {
    let store = InMemoryStore::new();
    let mut ids = Vec::new();
    for i in 0..5 {
        let m = message(&format!("msg {}", i), basis(8, i));
        ids.push(m.id.clone());
        IMessageStore::create(&store, m).unwrap();
    }
    let all = IMessageStore::all(&store).unwrap();
    let got: Vec<String> = all.into_iter().map(|m| m.id).collect();
    assert_eq!(got, ids);
}

#[test]
fn append_heat_range_mutates_stored_message() {
    let store = InMemoryStore::new();
    let m = message("0123456789", basis(4, 0));
    let id = m.id.clone();
    IMessageStore::create(&store, m).unwrap();

    store.append_heat_range(&id, 2, 7).unwrap();
    let fetched = IMessageStore::get(&store, &id).unwrap().unwrap();
    assert_eq!(fetched.heat_ranges.len(), 1);
    assert_eq!(fetched.heat_ranges[0].start, 2);
    assert_eq!(fetched.heat_ranges[0].end, 7);
}

#[test]
fn append_heat_range_rejects_out_of_bounds() {
    let store = InMemoryStore::new();
    let m = message("short", basis(4, 0));
    let id = m.id.clone();
    IMessageStore::create(&store, m).unwrap();

    let err = store.append_heat_range(&id, 0, 99).unwrap_err();
    assert!(matches!(
        err,
        ThermalError::Heat(HeatError::RangeOutOfBounds { .. })
    ));
}

#[test]
fn append_heat_range_to_missing_message_fails() {
    let store = InMemoryStore::new();
    let err = store.append_heat_range("ghost", 0, 1).unwrap_err();
    assert!(matches!(
        err,
        ThermalError::Store(StoreError::MessageNotFound { .. })
    ));
}

#[test]
fn cooling_registration_and_readback() {
    let store = InMemoryStore::new();
    let m = message("0123456789", basis(4, 0));
    let id = m.id.clone();
    IMessageStore::create(&store, m).unwrap();

    let interval = CoolingInterval::new(0, 5, Utc::now() + Duration::seconds(60));
    store.register_cooling(&id, interval.clone()).unwrap();

    let intervals = store.cooling_intervals(&id).unwrap();
    assert_eq!(intervals, vec![interval]);
}

#[test]
fn cooling_against_missing_message_fails() {
    let store = InMemoryStore::new();
    let interval = CoolingInterval::new(0, 5, Utc::now());
    let err = store.register_cooling("ghost", interval).unwrap_err();
    assert!(matches!(
        err,
        ThermalError::Store(StoreError::MessageNotFound { .. })
    ));
}

#[test]
fn anchors_are_stored_and_enumerated_in_order() {
    let store = InMemoryStore::new();
    let m = message("target", basis(4, 0));
    let msg_id = m.id.clone();
    IMessageStore::create(&store, m).unwrap();

    let a1 = anchor(&msg_id, "First", basis(4, 1));
    let a2 = anchor(&msg_id, "Second", basis(4, 2));
    let ids = vec![a1.id.clone(), a2.id.clone()];
    IAnchorStore::create(&store, a1).unwrap();
    IAnchorStore::create(&store, a2).unwrap();

    let all = IAnchorStore::all(&store).unwrap();
    let got: Vec<String> = all.into_iter().map(|a| a.id).collect();
    assert_eq!(got, ids);
    assert_eq!(store.anchor_count(), 2);
}
