use std::env;

use chrono::NaiveDate;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::competition::{competitions_from_records, weekend_top_competitions};
use crate::config::{SNAPSHOT_URL_ENV, WindowConfig};
use crate::dates;
use crate::error::SnapshotError;
use crate::filter::{Windows, is_renderable, recent_results, upcoming_fixtures};
use crate::model::competition::CompetitionSummary;
use crate::model::listing::Listing;
use crate::model::record::Record;
use crate::picks::{PicksMode, weekend_picks};
use crate::search::{build_index, matches_query};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Upcoming,
    Recent,
    Search,
    PicksUpcoming,
    PicksRecent,
    Competitions,
    WeekendCompetitions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub view: View,
    #[serde(default)]
    pub snapshot_url: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    // Window sizes may arrive as numbers or numeric strings
    #[serde(default)]
    pub results_days_back: Option<Value>,
    #[serde(default)]
    pub fixtures_days_forward: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub competitions: Vec<CompetitionSummary>,
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;

    let config = WindowConfig::from_env()
        .with_overrides(payload.results_days_back.as_ref(), payload.fixtures_days_forward.as_ref());

    // Request payload first, then the function's environment
    let url = payload
        .snapshot_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .or_else(|| env::var(SNAPSHOT_URL_ENV).ok())
        .ok_or(SnapshotError::MissingLocation)?;

    // ureq is blocking; keep it off the async worker threads
    let snapshot = tokio::task::spawn_blocking(move || Snapshot::from_url(&url)).await?;
    let snapshot = match snapshot {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Snapshot unavailable");
            return Err(e.into());
        }
    };

    let response = build_response(&snapshot.records, &payload, &config, dates::today());
    info!(view = ?payload.view, listings = response.listings.len(), competitions = response.competitions.len(), "Prepared response");
    Ok(response)
}

/// Produce the requested view over an already-loaded record set.
pub fn build_response(records: &[Record], request: &Request, config: &WindowConfig, today: NaiveDate) -> Response {
    let windows = Windows::new(today, config);

    match request.view {
        View::Upcoming => {
            let mut upcoming = upcoming_fixtures(records, &windows);
            sort_ascending(&mut upcoming);
            listings_response(
                &upcoming,
                format!("No fixtures in the next {} days.", config.fixtures_days_forward),
            )
        }
        View::Recent => {
            let mut recent = recent_results(records, &windows);
            recent.sort_by(|a, b| (&b.date, &b.time).cmp(&(&a.date, &a.time)));
            listings_response(
                &recent,
                format!("No results in the last {} days.", config.results_days_back),
            )
        }
        View::Search => {
            let query = request.query.as_deref().unwrap_or("");
            let mut hits: Vec<Record> = records
                .iter()
                .filter(|r| is_renderable(r))
                .filter(|r| windows.in_fixtures_window(&r.date) || windows.in_results_window(&r.date))
                .filter(|r| matches_query(&build_index(r), query))
                .cloned()
                .collect();
            sort_ascending(&mut hits);
            listings_response(&hits, format!("No matches for \"{}\".", query))
        }
        View::PicksUpcoming => {
            let mut picks = weekend_picks(&upcoming_fixtures(records, &windows), PicksMode::Upcoming, today);
            sort_ascending(&mut picks);
            listings_response(&picks, "No picks this weekend.".to_string())
        }
        View::PicksRecent => {
            let mut picks = weekend_picks(&recent_results(records, &windows), PicksMode::Recent, today);
            sort_ascending(&mut picks);
            listings_response(&picks, "No picks from last weekend.".to_string())
        }
        View::Competitions => {
            let competitions = competitions_from_records(&upcoming_fixtures(records, &windows));
            competitions_response(competitions)
        }
        View::WeekendCompetitions => {
            let competitions = weekend_top_competitions(&upcoming_fixtures(records, &windows), today);
            competitions_response(competitions)
        }
    }
}

fn sort_ascending(records: &mut [Record]) {
    records.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
}

fn listings_response(records: &[Record], empty_message: String) -> Response {
    if records.is_empty() {
        return Response { message: empty_message, ..Response::default() };
    }
    Response {
        message: format!("{} matches", records.len()),
        listings: records.iter().map(Listing::from).collect(),
        competitions: Vec::new(),
    }
}

fn competitions_response(competitions: Vec<CompetitionSummary>) -> Response {
    let message = if competitions.is_empty() {
        "No competitions in the fixtures window.".to_string()
    } else {
        format!("{} competitions", competitions.len())
    };
    Response { message, listings: Vec::new(), competitions }
}
