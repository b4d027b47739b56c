use gaa_fixtures_lambda::model::record::Record;
use gaa_fixtures_lambda::model::status::Status;
use gaa_fixtures_lambda::search::{build_index, matches_query, normalize};

fn record(home: &str, away: &str, competition: &str, venue: Option<&str>) -> Record {
    Record {
        id: "r1".to_string(),
        date: "2025-11-01".to_string(),
        time: "14:00".to_string(),
        competition: competition.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        venue: venue.map(str::to_string),
        status: Status::Scheduled,
        score: String::new(),
        clubs: None,
    }
}

#[test]
fn normalize_maps_irish_and_strips_marks() {
    assert_eq!(normalize("Ciarraí"), "kerry");
    assert_eq!(normalize("Peil Sinsir Uladh!"), "football senior uladh");
    assert_eq!(normalize("Gaillimh v Maigh Eo"), "galway v maigh mayo");
    assert_eq!(normalize("Naomh Éanna, Co. Ard Mhacha"), "st eanna co ard armagh");
    assert_eq!(normalize("Semi-Final"), "semi-final");
    assert_eq!(normalize("  "), "");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "Ciarraí v Corcaigh",
        "Tír Eoghain – Ard Mhacha (Craobh Uladh)",
        "ÁTH CLIATH 1-12 0-14",
        "Páirc Uí Chaoimh",
        "St. Brigid's / Na Fianna",
        "İstanbul Gaels",
        "",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
    }
}

#[test]
fn index_is_deterministic() {
    let r = record("Ciarraí", "Corcaigh", "Munster Senior Football Championship", Some("Austin Stack Park"));
    assert_eq!(build_index(&r), build_index(&r.clone()));
}

#[test]
fn irish_query_matches_english_record_and_back() {
    let english = record("Kerry", "Cork", "Munster Senior Football Championship", None);
    let irish = record("Ciarraí", "Corcaigh", "Craobh Peile na Mumhan", None);

    assert!(matches_query(&build_index(&english), "Ciarraí"));
    assert!(matches_query(&build_index(&english), "corcaigh"));
    assert!(matches_query(&build_index(&irish), "Kerry"));
    assert!(matches_query(&build_index(&irish), "cork championship"));
}

#[test]
fn query_tokens_match_as_substrings() {
    let r = record("Kerry", "Dublin", "All-Ireland Final", Some("Croke Park"));
    let index = build_index(&r);
    assert!(matches_query(&index, "kerr"));
    assert!(matches_query(&index, "croke dub"));
    assert!(!matches_query(&index, "kerry mayo"));
    assert!(matches_query(&index, ""), "empty query matches everything");
}

#[test]
fn partial_irish_spelling_still_matches() {
    let r = record("Ciarraí", "Corcaigh", "Sraith Náisiúnta", None);
    assert!(matches_query(&build_index(&r), "ciarr"));
}

#[test]
fn level_synonyms_close_both_ways() {
    let senior = record("Mayo", "Sligo", "Connacht Senior Football Championship", None);
    assert!(matches_query(&build_index(&senior), "sfc"));

    let sfc = record("Mayo", "Sligo", "Connacht SFC", None);
    assert!(matches_query(&build_index(&sfc), "senior"));

    let inter = record("Mayo", "Sligo", "Connacht IFC Final", None);
    assert!(matches_query(&build_index(&inter), "intermediate"));

    let junior = record("Mayo", "Sligo", "Craobh Sóisir", None);
    assert!(matches_query(&build_index(&junior), "jfc"));

    let minor = record("Mayo", "Sligo", "Connacht Minor Championship", None);
    assert!(!matches_query(&build_index(&minor), "sfc"));
}
