use std::collections::HashSet;

use chrono::NaiveDate;

use gaa_fixtures_lambda::config::WindowConfig;
use gaa_fixtures_lambda::filter::{Windows, recent_results, upcoming_fixtures};
use gaa_fixtures_lambda::model::record::Record;
use gaa_fixtures_lambda::picks::{PICKS_TARGET, PicksMode, weekend_picks, weekend_picks_with, weekend_range};
use gaa_fixtures_lambda::snapshot::Snapshot;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
}

fn sample_records() -> Vec<Record> {
    Snapshot::from_json(include_str!("sample_snapshot.json")).expect("sample parses").records
}

fn windows() -> Windows {
    Windows::new(today(), &WindowConfig::default())
}

fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

fn fixture(id: &str, date: &str, time: &str) -> Record {
    Record {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        competition: "Club League".to_string(),
        home: "Kilmeena".to_string(),
        away: "Caltra".to_string(),
        venue: None,
        status: Default::default(),
        score: String::new(),
        clubs: None,
    }
}

#[test]
fn range_starts_on_friday() {
    assert_eq!(
        weekend_range(PicksMode::Upcoming, today()),
        ("2025-10-31".to_string(), "2025-11-02".to_string())
    );
    assert_eq!(
        weekend_range(PicksMode::Recent, today()),
        ("2025-10-24".to_string(), "2025-10-26".to_string())
    );
}

#[test]
fn upcoming_stages_fill_in_order() {
    let upcoming = upcoming_fixtures(&sample_records(), &windows());
    // Identity shuffle exposes the stage order: prime, other, then any fixture
    let picks = weekend_picks_with(&upcoming, PicksMode::Upcoming, today(), |_| {});
    assert_eq!(ids(&picks), vec!["fx-1", "fx-3", "fx-2", "fx-5"]);
}

#[test]
fn recent_fallback_only_takes_full_time() {
    let recent = recent_results(&sample_records(), &windows());
    let picks = weekend_picks_with(&recent, PicksMode::Recent, today(), |_| {});
    // rs-4 (PP) and fx-8 are in range; rs-2 only qualifies through the FT fallback
    assert_eq!(ids(&picks), vec!["rs-1", "rs-4", "fx-8", "rs-2"]);
}

#[test]
fn shuffle_is_applied_per_stage() {
    let records = vec![
        fixture("a", "2025-11-01", "13:00"),
        fixture("b", "2025-11-01", "14:00"),
        fixture("c", "2025-11-02", "15:00"),
        fixture("d", "2025-11-02", "16:00"),
        fixture("e", "2025-11-02", "17:00"),
    ];
    let mut calls = 0;
    let picks = weekend_picks_with(&records, PicksMode::Upcoming, today(), |pool| {
        calls += 1;
        pool.reverse();
    });
    assert_eq!(ids(&picks), vec!["e", "d", "c", "b"]);
    assert_eq!(calls, 1, "later stages are skipped once the target is met");
}

#[test]
fn duplicate_ids_are_picked_once() {
    let records = vec![
        fixture("same", "2025-11-01", "13:00"),
        fixture("same", "2025-11-01", "19:00"),
        fixture("same", "2025-11-05", "13:00"),
    ];
    let picks = weekend_picks_with(&records, PicksMode::Upcoming, today(), |_| {});
    assert_eq!(ids(&picks), vec!["same"]);
}

#[test]
fn empty_input_gives_no_picks() {
    assert!(weekend_picks(&[], PicksMode::Upcoming, today()).is_empty());
    assert!(weekend_picks(&[], PicksMode::Recent, today()).is_empty());

    // Nothing full-time means nothing to fall back on for results
    let scheduled = vec![fixture("x", "2025-10-01", "15:00")];
    assert!(weekend_picks(&scheduled, PicksMode::Recent, today()).is_empty());
}

#[test]
fn random_picks_are_bounded_and_unique() {
    let mut records: Vec<Record> = (0..12)
        .map(|i| fixture(&format!("m{}", i), if i % 2 == 0 { "2025-11-01" } else { "2025-11-08" }, "15:00"))
        .collect();
    records.push(fixture("m0", "2025-11-02", "14:00"));

    for _ in 0..50 {
        let picks = weekend_picks(&records, PicksMode::Upcoming, today());
        assert!(picks.len() <= PICKS_TARGET);
        assert_eq!(picks.len(), PICKS_TARGET);
        let unique: HashSet<&str> = picks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique.len(), picks.len(), "duplicate ids in {:?}", ids(&picks));
        assert!(picks.iter().all(|r| r.date == "2025-11-01" || r.date == "2025-11-02"));
    }
}
